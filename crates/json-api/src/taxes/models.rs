//! Tax Models

use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bizdesk_app::domain::taxes::{
    data::{NewTax, TaxUpdate},
    records::TaxRecord,
};

/// Tax Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TaxResponse {
    pub id: Uuid,
    pub name: String,
    /// Percentage between 0 and 100.
    #[salvo(schema(value_type = f64))]
    pub rate: Decimal,
    pub is_default: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<TaxRecord> for TaxResponse {
    fn from(tax: TaxRecord) -> Self {
        Self {
            id: tax.uuid.into(),
            name: tax.name,
            rate: tax.rate,
            is_default: tax.is_default,
            created_at: tax.created_at.to_string(),
            updated_at: tax.updated_at.to_string(),
        }
    }
}

/// Create Tax Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateTaxRequest {
    pub name: String,
    #[salvo(schema(value_type = f64))]
    pub rate: Decimal,
    #[serde(default)]
    pub is_default: bool,
}

impl From<CreateTaxRequest> for NewTax {
    fn from(request: CreateTaxRequest) -> Self {
        NewTax {
            name: request.name,
            rate: request.rate,
            is_default: request.is_default,
        }
    }
}

/// Update Tax Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct UpdateTaxRequest {
    pub name: Option<String>,
    #[salvo(schema(value_type = Option<f64>))]
    pub rate: Option<Decimal>,
    pub is_default: Option<bool>,
}

impl From<UpdateTaxRequest> for TaxUpdate {
    fn from(request: UpdateTaxRequest) -> Self {
        TaxUpdate {
            name: request.name,
            rate: request.rate,
            is_default: request.is_default,
        }
    }
}
