//! Discount Index Handler

use salvo::prelude::*;

use crate::{discounts::models::DiscountResponse, extensions::*};

/// Discount Index Handler
#[endpoint(tags("discounts"), summary = "List Discounts")]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<Vec<DiscountResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let discounts = state.app.discounts.list_discounts().await;

    Ok(Json(discounts.into_iter().map(Into::into).collect()))
}
