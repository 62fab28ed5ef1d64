//! Update User Handler

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use tracing::info;
use uuid::Uuid;

use crate::{
    extensions::*,
    users::models::{UpdateUserRequest, UserResponse},
};

/// Update User Handler
#[endpoint(
    tags("users"),
    summary = "Update User",
    responses(
        (status_code = StatusCode::OK, description = "User updated"),
        (status_code = StatusCode::NOT_FOUND, description = "User not found"),
        (status_code = StatusCode::CONFLICT, description = "Email already in use"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid user"),
    ),
)]
#[tracing::instrument(
    name = "users.update",
    skip(uuid, json, depot),
    fields(user_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    json: JsonBody<UpdateUserRequest>,
    depot: &mut Depot,
) -> Result<Json<UserResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let uuid = uuid.into_inner();

    tracing::Span::current().record("user_uuid", tracing::field::display(uuid));

    let user = state
        .app
        .users
        .update_user(uuid.into(), json.into_inner().into())
        .await
        .or_status()?;

    info!(user_uuid = %user.uuid, "updated user");

    Ok(Json(user.into()))
}
