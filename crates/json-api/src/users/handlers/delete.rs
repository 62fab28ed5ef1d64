//! Delete User Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use tracing::info;
use uuid::Uuid;

use crate::extensions::*;

/// Delete User Handler
#[endpoint(
    tags("users"),
    summary = "Delete User",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "User deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "User not found"),
    ),
)]
#[tracing::instrument(name = "users.delete", skip(uuid, depot, res), err)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.state_or_500()?;
    let uuid = uuid.into_inner();

    state.app.users.delete_user(uuid.into()).await.or_status()?;

    info!(user_uuid = %uuid, "deleted user");

    res.status_code(StatusCode::NO_CONTENT);

    Ok(())
}
