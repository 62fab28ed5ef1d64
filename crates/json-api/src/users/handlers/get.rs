//! Get User Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{extensions::*, users::models::UserResponse};

/// Get User Handler
#[endpoint(
    tags("users"),
    summary = "Get User",
    responses(
        (status_code = StatusCode::OK, description = "User found"),
        (status_code = StatusCode::NOT_FOUND, description = "User not found"),
    ),
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<UserResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let user = state
        .app
        .users
        .get_user(uuid.into_inner().into())
        .await
        .or_status()?;

    Ok(Json(user.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;

    use bizdesk_app::domain::{
        RegistryError,
        users::{MockUsersService, records::UserUuid},
    };

    use super::{super::tests::*, *};

    #[tokio::test]
    async fn unknown_user_returns_404() {
        let uuid = UserUuid::new();
        let mut users = MockUsersService::new();

        users
            .expect_get_user()
            .once()
            .withf(move |u| *u == uuid)
            .return_once(|_| Err(RegistryError::NotFound));

        let res = TestClient::get(format!("http://example.com/api/users/{uuid}"))
            .send(&users_service(
                users,
                Router::with_path("api/users/{uuid}").get(handler),
            ))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }
}
