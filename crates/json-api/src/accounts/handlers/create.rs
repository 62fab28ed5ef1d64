//! Create Account Handler

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};
use tracing::info;

use crate::{
    accounts::models::{AccountResponse, CreateAccountRequest},
    extensions::*,
};

/// Create Account Handler
#[endpoint(
    tags("accounts"),
    summary = "Create Account",
    responses(
        (status_code = StatusCode::CREATED, description = "Account created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid account"),
        (status_code = StatusCode::CONFLICT, description = "Account code already in use"),
    ),
)]
#[tracing::instrument(name = "accounts.create", skip(json, depot, res), err)]
pub(crate) async fn handler(
    json: JsonBody<CreateAccountRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<AccountResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let account = state
        .app
        .accounts
        .create_account(json.into_inner().into())
        .await
        .or_status()?;

    res.add_header(LOCATION, format!("/api/accounts/{}", account.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    info!(account_uuid = %account.uuid, code = %account.code, "created account");

    Ok(Json(account.into()))
}
