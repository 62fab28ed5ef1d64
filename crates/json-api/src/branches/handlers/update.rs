//! Update Branch Handler

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use tracing::info;
use uuid::Uuid;

use crate::{
    branches::models::{BranchResponse, UpdateBranchRequest},
    extensions::*,
};

/// Update Branch Handler
#[endpoint(
    tags("branches"),
    summary = "Update Branch",
    responses(
        (status_code = StatusCode::OK, description = "Branch updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Branch not found"),
        (status_code = StatusCode::CONFLICT, description = "Another branch is already main"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid branch"),
    ),
)]
#[tracing::instrument(
    name = "branches.update",
    skip(uuid, json, depot),
    fields(branch_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    json: JsonBody<UpdateBranchRequest>,
    depot: &mut Depot,
) -> Result<Json<BranchResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let uuid = uuid.into_inner();

    tracing::Span::current().record("branch_uuid", tracing::field::display(uuid));

    let branch = state
        .app
        .branches
        .update_branch(uuid.into(), json.into_inner().into())
        .await
        .or_status()?;

    info!(branch_uuid = %branch.uuid, is_main = branch.is_main, "updated branch");

    Ok(Json(branch.into()))
}
