//! Delete Currency Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use tracing::info;
use uuid::Uuid;

use crate::extensions::*;

/// Delete Currency Handler
///
/// The base currency cannot be deleted.
#[endpoint(
    tags("currencies"),
    summary = "Delete Currency",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Currency deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Currency not found"),
        (status_code = StatusCode::CONFLICT, description = "Currency is the base currency"),
    ),
)]
#[tracing::instrument(name = "currencies.delete", skip(uuid, depot, res), err)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.state_or_500()?;
    let uuid = uuid.into_inner();

    state
        .app
        .currencies
        .delete_currency(uuid.into())
        .await
        .or_status()?;

    info!(currency_uuid = %uuid, "deleted currency");

    res.status_code(StatusCode::NO_CONTENT);

    Ok(())
}
