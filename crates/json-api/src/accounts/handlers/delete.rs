//! Delete Account Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use tracing::info;
use uuid::Uuid;

use crate::extensions::*;

/// Delete Account Handler
#[endpoint(
    tags("accounts"),
    summary = "Delete Account",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Account deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Account not found"),
        (status_code = StatusCode::CONFLICT, description = "Account has a balance or sub-accounts"),
    ),
)]
#[tracing::instrument(name = "accounts.delete", skip(uuid, depot, res), err)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.state_or_500()?;
    let uuid = uuid.into_inner();

    state
        .app
        .accounts
        .delete_account(uuid.into())
        .await
        .or_status()?;

    info!(account_uuid = %uuid, "deleted account");

    res.status_code(StatusCode::NO_CONTENT);

    Ok(())
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;

    use bizdesk_app::domain::{
        DeleteRefusal,
        accounts::{MockAccountsService, records::AccountUuid},
    };

    use super::{super::tests::*, *};

    #[tokio::test]
    async fn account_with_balance_returns_409() {
        let uuid = AccountUuid::new();
        let mut accounts = MockAccountsService::new();

        accounts
            .expect_delete_account()
            .once()
            .withf(move |u| *u == uuid)
            .return_once(|_| Err(DeleteRefusal::AccountHasBalance.into()));

        let res = TestClient::delete(format!("http://example.com/api/accounts/{uuid}"))
            .send(&accounts_service(
                accounts,
                Router::with_path("api/accounts/{uuid}").delete(handler),
            ))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));
    }
}
