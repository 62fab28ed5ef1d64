//! Create User Handler

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};
use tracing::info;

use crate::{
    extensions::*,
    users::models::{CreateUserRequest, UserResponse},
};

/// Create User Handler
#[endpoint(
    tags("users"),
    summary = "Create User",
    responses(
        (status_code = StatusCode::CREATED, description = "User created"),
        (status_code = StatusCode::CONFLICT, description = "Username or email already in use"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid user"),
    ),
)]
#[tracing::instrument(
    name = "users.create",
    skip(json, depot, res),
    fields(username = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CreateUserRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<UserResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let request = json.into_inner();

    tracing::Span::current().record("username", tracing::field::display(&request.username));

    let user = state
        .app
        .users
        .create_user(request.into())
        .await
        .or_status()?;

    res.add_header(LOCATION, format!("/api/users/{}", user.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    info!(user_uuid = %user.uuid, "created user");

    Ok(Json(user.into()))
}
