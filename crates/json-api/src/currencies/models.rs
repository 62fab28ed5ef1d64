//! Currency Models

use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bizdesk_app::domain::currencies::{
    data::{CurrencyUpdate, NewCurrency},
    records::CurrencyRecord,
};

/// Currency Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CurrencyResponse {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub symbol: String,
    #[salvo(schema(value_type = f64))]
    pub exchange_rate_to_base: Decimal,
    pub is_base_currency: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<CurrencyRecord> for CurrencyResponse {
    fn from(currency: CurrencyRecord) -> Self {
        Self {
            id: currency.uuid.into(),
            code: currency.code,
            name: currency.name,
            symbol: currency.symbol,
            exchange_rate_to_base: currency.exchange_rate_to_base,
            is_base_currency: currency.is_base_currency,
            created_at: currency.created_at.to_string(),
            updated_at: currency.updated_at.to_string(),
        }
    }
}

/// Create Currency Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateCurrencyRequest {
    pub code: String,
    pub name: String,
    pub symbol: String,
    #[salvo(schema(value_type = f64))]
    pub exchange_rate_to_base: Decimal,
    #[serde(default)]
    pub is_base_currency: bool,
}

impl From<CreateCurrencyRequest> for NewCurrency {
    fn from(request: CreateCurrencyRequest) -> Self {
        NewCurrency {
            code: request.code,
            name: request.name,
            symbol: request.symbol,
            exchange_rate_to_base: request.exchange_rate_to_base,
            is_base_currency: request.is_base_currency,
        }
    }
}

/// Update Currency Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct UpdateCurrencyRequest {
    pub code: Option<String>,
    pub name: Option<String>,
    pub symbol: Option<String>,
    #[salvo(schema(value_type = Option<f64>))]
    pub exchange_rate_to_base: Option<Decimal>,
    pub is_base_currency: Option<bool>,
}

impl From<UpdateCurrencyRequest> for CurrencyUpdate {
    fn from(request: UpdateCurrencyRequest) -> Self {
        CurrencyUpdate {
            code: request.code,
            name: request.name,
            symbol: request.symbol,
            exchange_rate_to_base: request.exchange_rate_to_base,
            is_base_currency: request.is_base_currency,
        }
    }
}
