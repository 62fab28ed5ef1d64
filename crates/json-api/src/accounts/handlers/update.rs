//! Update Account Handler

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use tracing::info;
use uuid::Uuid;

use crate::{
    accounts::models::{AccountResponse, UpdateAccountRequest},
    extensions::*,
};

/// Update Account Handler
#[endpoint(
    tags("accounts"),
    summary = "Update Account",
    responses(
        (status_code = StatusCode::OK, description = "Account updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Account not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid account"),
        (status_code = StatusCode::CONFLICT, description = "Account code already in use"),
    ),
)]
#[tracing::instrument(name = "accounts.update", skip(uuid, json, depot), err)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    json: JsonBody<UpdateAccountRequest>,
    depot: &mut Depot,
) -> Result<Json<AccountResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let account = state
        .app
        .accounts
        .update_account(uuid.into_inner().into(), json.into_inner().into())
        .await
        .or_status()?;

    info!(account_uuid = %account.uuid, "updated account");

    Ok(Json(account.into()))
}
