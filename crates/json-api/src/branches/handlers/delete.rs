//! Delete Branch Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use tracing::info;
use uuid::Uuid;

use crate::extensions::*;

/// Delete Branch Handler
///
/// The main branch cannot be deleted.
#[endpoint(
    tags("branches"),
    summary = "Delete Branch",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Branch deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Branch not found"),
        (status_code = StatusCode::CONFLICT, description = "Branch is the main branch"),
    ),
)]
#[tracing::instrument(name = "branches.delete", skip(uuid, depot, res), err)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.state_or_500()?;
    let uuid = uuid.into_inner();

    state
        .app
        .branches
        .delete_branch(uuid.into())
        .await
        .or_status()?;

    info!(branch_uuid = %uuid, "deleted branch");

    res.status_code(StatusCode::NO_CONTENT);

    Ok(())
}
