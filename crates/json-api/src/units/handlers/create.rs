//! Create Unit Handler

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};
use tracing::info;

use crate::{
    extensions::*,
    units::models::{CreateUnitRequest, UnitResponse},
};

/// Create Unit Handler
#[endpoint(
    tags("units"),
    summary = "Create Unit of Measure",
    responses(
        (status_code = StatusCode::CREATED, description = "Unit created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid unit"),
    ),
)]
#[tracing::instrument(name = "units.create", skip(json, depot, res), err)]
pub(crate) async fn handler(
    json: JsonBody<CreateUnitRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<UnitResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let unit = state
        .app
        .units
        .create_unit(json.into_inner().into())
        .await
        .or_status()?;

    res.add_header(LOCATION, format!("/api/units/{}", unit.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    info!(unit_uuid = %unit.uuid, "created unit");

    Ok(Json(unit.into()))
}
