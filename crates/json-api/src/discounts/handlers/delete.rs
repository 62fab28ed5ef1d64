//! Delete Discount Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use tracing::info;
use uuid::Uuid;

use crate::extensions::*;

/// Delete Discount Handler
#[endpoint(
    tags("discounts"),
    summary = "Delete Discount",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Discount deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Discount not found"),
    ),
)]
#[tracing::instrument(name = "discounts.delete", skip(uuid, depot, res), err)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.state_or_500()?;
    let uuid = uuid.into_inner();

    state
        .app
        .discounts
        .delete_discount(uuid.into())
        .await
        .or_status()?;

    info!(discount_uuid = %uuid, "deleted discount");

    res.status_code(StatusCode::NO_CONTENT);

    Ok(())
}
