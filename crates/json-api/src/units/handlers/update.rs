//! Update Unit Handler

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use tracing::info;
use uuid::Uuid;

use crate::{
    extensions::*,
    units::models::{UnitResponse, UpdateUnitRequest},
};

/// Update Unit Handler
#[endpoint(
    tags("units"),
    summary = "Update Unit of Measure",
    responses(
        (status_code = StatusCode::OK, description = "Unit updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Unit not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid unit"),
    ),
)]
#[tracing::instrument(name = "units.update", skip(uuid, json, depot), err)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    json: JsonBody<UpdateUnitRequest>,
    depot: &mut Depot,
) -> Result<Json<UnitResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let unit = state
        .app
        .units
        .update_unit(uuid.into_inner().into(), json.into_inner().into())
        .await
        .or_status()?;

    info!(unit_uuid = %unit.uuid, "updated unit");

    Ok(Json(unit.into()))
}
