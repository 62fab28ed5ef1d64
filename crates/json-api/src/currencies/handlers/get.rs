//! Get Currency Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{currencies::models::CurrencyResponse, extensions::*};

/// Get Currency Handler
#[endpoint(
    tags("currencies"),
    summary = "Get Currency",
    responses(
        (status_code = StatusCode::OK, description = "Currency found"),
        (status_code = StatusCode::NOT_FOUND, description = "Currency not found"),
    ),
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CurrencyResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let currency = state
        .app
        .currencies
        .get_currency(uuid.into_inner().into())
        .await
        .or_status()?;

    Ok(Json(currency.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use bizdesk_app::domain::currencies::{MockCurrenciesService, records::CurrencyUuid};

    use super::{super::tests::*, *};

    #[tokio::test]
    async fn rate_is_serialised_as_a_number() -> TestResult {
        let uuid = CurrencyUuid::new();
        let mut currencies = MockCurrenciesService::new();

        currencies
            .expect_get_currency()
            .once()
            .withf(move |u| *u == uuid)
            .return_once(move |_| {
                let mut usd = make_currency(uuid, "USD");

                usd.exchange_rate_to_base = rust_decimal::Decimal::from(15_000);

                Ok(usd)
            });

        let body: serde_json::Value =
            TestClient::get(format!("http://example.com/api/currencies/{uuid}"))
                .send(&currencies_service(
                    currencies,
                    Router::with_path("api/currencies/{uuid}").get(handler),
                ))
                .await
                .take_json()
                .await?;

        assert_eq!(body["code"], "USD");
        assert_eq!(body["exchangeRateToBase"].as_f64(), Some(15_000.0));

        Ok(())
    }
}
