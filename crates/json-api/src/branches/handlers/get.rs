//! Get Branch Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{branches::models::BranchResponse, extensions::*};

/// Get Branch Handler
#[endpoint(
    tags("branches"),
    summary = "Get Branch",
    responses(
        (status_code = StatusCode::OK, description = "Branch found"),
        (status_code = StatusCode::NOT_FOUND, description = "Branch not found"),
    ),
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<BranchResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let branch = state
        .app
        .branches
        .get_branch(uuid.into_inner().into())
        .await
        .or_status()?;

    Ok(Json(branch.into()))
}
