//! Tax Index Handler

use salvo::prelude::*;

use crate::{extensions::*, taxes::models::TaxResponse};

/// Tax Index Handler
#[endpoint(tags("taxes"), summary = "List Taxes")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<TaxResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let taxes = state.app.taxes.list_taxes().await;

    Ok(Json(taxes.into_iter().map(Into::into).collect()))
}
