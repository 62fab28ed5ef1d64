//! Delete Tax Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use tracing::info;
use uuid::Uuid;

use crate::extensions::*;

/// Delete Tax Handler
#[endpoint(
    tags("taxes"),
    summary = "Delete Tax",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Tax deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Tax not found"),
    ),
)]
#[tracing::instrument(name = "taxes.delete", skip(uuid, depot, res), err)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.state_or_500()?;
    let uuid = uuid.into_inner();

    state.app.taxes.delete_tax(uuid.into()).await.or_status()?;

    info!(tax_uuid = %uuid, "deleted tax");

    res.status_code(StatusCode::NO_CONTENT);

    Ok(())
}
