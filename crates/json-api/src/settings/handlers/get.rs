//! Get General Settings Handler

use salvo::prelude::*;

use crate::{extensions::*, settings::models::GeneralSettingsResponse};

/// Get General Settings Handler
#[endpoint(tags("settings"), summary = "Get General Settings")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<GeneralSettingsResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let settings = state.app.settings.get_general_settings().await;

    Ok(Json(settings.into()))
}
