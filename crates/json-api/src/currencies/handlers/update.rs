//! Update Currency Handler

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use tracing::info;
use uuid::Uuid;

use crate::{
    currencies::models::{CurrencyResponse, UpdateCurrencyRequest},
    extensions::*,
};

/// Update Currency Handler
#[endpoint(
    tags("currencies"),
    summary = "Update Currency",
    responses(
        (status_code = StatusCode::OK, description = "Currency updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Currency not found"),
        (status_code = StatusCode::CONFLICT, description = "Code in use or base currency already set"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid currency"),
    ),
)]
#[tracing::instrument(
    name = "currencies.update",
    skip(uuid, json, depot),
    fields(currency_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    json: JsonBody<UpdateCurrencyRequest>,
    depot: &mut Depot,
) -> Result<Json<CurrencyResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let uuid = uuid.into_inner();

    tracing::Span::current().record("currency_uuid", tracing::field::display(uuid));

    let currency = state
        .app
        .currencies
        .update_currency(uuid.into(), json.into_inner().into())
        .await
        .or_status()?;

    info!(currency_uuid = %currency.uuid, "updated currency");

    Ok(Json(currency.into()))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::TestClient;
    use serde_json::json;
    use uuid::Uuid;

    use bizdesk_app::domain::{
        RegistryError,
        currencies::{MockCurrenciesService, data::CurrencyUpdate, records::CurrencyUuid},
    };

    use super::{super::tests::*, *};

    fn make_service(currencies: MockCurrenciesService) -> Service {
        currencies_service(
            currencies,
            Router::with_path("api/currencies/{uuid}").put(handler),
        )
    }

    #[tokio::test]
    async fn forwards_rate_change() {
        let uuid = CurrencyUuid::new();
        let mut currencies = MockCurrenciesService::new();

        currencies
            .expect_update_currency()
            .once()
            .withf(move |u, update| {
                *u == uuid
                    && *update
                        == CurrencyUpdate {
                            exchange_rate_to_base: Some(Decimal::from(16_000)),
                            ..CurrencyUpdate::default()
                        }
            })
            .return_once(move |_, _| Ok(make_currency(uuid, "USD")));

        let res = TestClient::put(format!("http://example.com/api/currencies/{uuid}"))
            .json(&json!({ "exchangeRateToBase": 16000 }))
            .send(&make_service(currencies))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
    }

    #[tokio::test]
    async fn second_base_currency_returns_409() {
        let mut currencies = MockCurrenciesService::new();

        currencies.expect_update_currency().once().return_once(|_, _| {
            Err(RegistryError::ExclusivityConflict {
                flag: "isBaseCurrency",
                holder: Uuid::now_v7(),
            })
        });

        let res = TestClient::put(format!(
            "http://example.com/api/currencies/{}",
            CurrencyUuid::new()
        ))
        .json(&json!({ "isBaseCurrency": true }))
        .send(&make_service(currencies))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));
    }
}
