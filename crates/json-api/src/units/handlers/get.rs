//! Get Unit Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{extensions::*, units::models::UnitResponse};

/// Get Unit Handler
#[endpoint(
    tags("units"),
    summary = "Get Unit of Measure",
    responses(
        (status_code = StatusCode::OK, description = "Unit found"),
        (status_code = StatusCode::NOT_FOUND, description = "Unit not found"),
    ),
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<UnitResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let unit = state
        .app
        .units
        .get_unit(uuid.into_inner().into())
        .await
        .or_status()?;

    Ok(Json(unit.into()))
}
