//! Login Handler

use salvo::{oapi::extract::JsonBody, prelude::*};
use tracing::info;

use bizdesk_app::domain::users::Password;

use crate::{
    extensions::*,
    users::models::{LoginRequest, UserResponse},
};

/// Login Handler
///
/// Verifies a username/password pair and returns the matching user.
#[endpoint(
    tags("auth"),
    summary = "Log In",
    responses(
        (status_code = StatusCode::OK, description = "Credentials accepted"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Invalid username or password"),
    ),
)]
#[tracing::instrument(name = "auth.login", skip(json, depot), err)]
pub(crate) async fn handler(
    json: JsonBody<LoginRequest>,
    depot: &mut Depot,
) -> Result<Json<UserResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let LoginRequest { username, password } = json.into_inner();

    let user = state
        .app
        .users
        .verify_credentials(username, Password::new(password))
        .await
        .or_status()?;

    info!(user_uuid = %user.uuid, "user logged in");

    Ok(Json(user.into()))
}
