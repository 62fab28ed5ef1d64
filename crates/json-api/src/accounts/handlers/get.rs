//! Get Account Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{accounts::models::AccountResponse, extensions::*};

/// Get Account Handler
#[endpoint(
    tags("accounts"),
    summary = "Get Account",
    responses(
        (status_code = StatusCode::OK, description = "Account found"),
        (status_code = StatusCode::NOT_FOUND, description = "Account not found"),
    ),
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<AccountResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let account = state
        .app
        .accounts
        .get_account(uuid.into_inner().into())
        .await
        .or_status()?;

    Ok(Json(account.into()))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use bizdesk_app::domain::{
        RegistryError,
        accounts::{MockAccountsService, records::AccountUuid},
    };

    use super::{super::tests::*, *};

    fn make_service(accounts: MockAccountsService) -> Service {
        accounts_service(accounts, Router::with_path("api/accounts/{uuid}").get(handler))
    }

    #[tokio::test]
    async fn returns_type_and_balance() -> TestResult {
        let uuid = AccountUuid::new();
        let mut accounts = MockAccountsService::new();

        accounts
            .expect_get_account()
            .once()
            .withf(move |u| *u == uuid)
            .return_once(move |_| Ok(make_account(uuid, Decimal::from(250_000))));

        let body: serde_json::Value =
            TestClient::get(format!("http://example.com/api/accounts/{uuid}"))
                .send(&make_service(accounts))
                .await
                .take_json()
                .await?;

        assert_eq!(body["accountType"], "asset");
        assert_eq!(body["code"], "1-1100");
        assert_eq!(body["balance"], 250_000.0);

        Ok(())
    }

    #[tokio::test]
    async fn unknown_account_returns_404() {
        let mut accounts = MockAccountsService::new();

        accounts
            .expect_get_account()
            .once()
            .return_once(|_| Err(RegistryError::NotFound));

        let res = TestClient::get(format!(
            "http://example.com/api/accounts/{}",
            AccountUuid::new()
        ))
        .send(&make_service(accounts))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }
}
