//! Get Discount Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{discounts::models::DiscountResponse, extensions::*};

/// Get Discount Handler
#[endpoint(
    tags("discounts"),
    summary = "Get Discount",
    responses(
        (status_code = StatusCode::OK, description = "Discount found"),
        (status_code = StatusCode::NOT_FOUND, description = "Discount not found"),
    ),
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<DiscountResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let discount = state
        .app
        .discounts
        .get_discount(uuid.into_inner().into())
        .await
        .or_status()?;

    Ok(Json(discount.into()))
}
