//! Update General Settings Handler

use salvo::{oapi::extract::JsonBody, prelude::*};
use tracing::info;

use crate::{
    extensions::*,
    settings::models::{GeneralSettingsResponse, UpdateGeneralSettingsRequest},
};

/// Update General Settings Handler
#[endpoint(
    tags("settings"),
    summary = "Update General Settings",
    responses(
        (status_code = StatusCode::OK, description = "Settings updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid settings"),
    ),
)]
#[tracing::instrument(name = "settings.update", skip(json, depot), err)]
pub(crate) async fn handler(
    json: JsonBody<UpdateGeneralSettingsRequest>,
    depot: &mut Depot,
) -> Result<Json<GeneralSettingsResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let settings = state
        .app
        .settings
        .update_general_settings(json.into_inner().into())
        .await
        .or_status()?;

    info!(company_name = %settings.company_name, "updated general settings");

    Ok(Json(settings.into()))
}
