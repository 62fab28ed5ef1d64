//! Currency Index Handler

use salvo::prelude::*;

use crate::{currencies::models::CurrencyResponse, extensions::*};

/// Currency Index Handler
#[endpoint(tags("currencies"), summary = "List Currencies")]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<Vec<CurrencyResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let currencies = state.app.currencies.list_currencies().await;

    Ok(Json(currencies.into_iter().map(Into::into).collect()))
}
