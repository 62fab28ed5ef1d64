//! Unit Index Handler

use salvo::prelude::*;

use crate::{extensions::*, units::models::UnitResponse};

/// Unit Index Handler
#[endpoint(tags("units"), summary = "List Units of Measure")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<UnitResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let units = state.app.units.list_units().await;

    Ok(Json(units.into_iter().map(Into::into).collect()))
}
