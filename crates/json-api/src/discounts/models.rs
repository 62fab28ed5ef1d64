//! Discount Models
//!
//! On the wire a discount carries a `discountType` tag plus either `rate`
//! (percentage) or `amount` (fixed). Exactly one of the two is populated.

use rust_decimal::Decimal;
use salvo::{http::StatusError, oapi::ToSchema};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bizdesk_app::domain::discounts::{
    data::{DiscountUpdate, NewDiscount},
    records::{DiscountKind, DiscountRecord, DiscountValue},
};

/// Discount type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub(crate) enum DiscountType {
    Percentage,
    Fixed,
}

impl From<DiscountKind> for DiscountType {
    fn from(kind: DiscountKind) -> Self {
        match kind {
            DiscountKind::Percentage => Self::Percentage,
            DiscountKind::Fixed => Self::Fixed,
        }
    }
}

fn discount_value(
    discount_type: DiscountType,
    rate: Option<Decimal>,
    amount: Option<Decimal>,
) -> Result<DiscountValue, StatusError> {
    match (discount_type, rate, amount) {
        (DiscountType::Percentage, Some(rate), None) => Ok(DiscountValue::Percentage(rate)),
        (DiscountType::Fixed, None, Some(amount)) => Ok(DiscountValue::FixedAmount(amount)),
        (DiscountType::Percentage, _, _) => Err(StatusError::bad_request()
            .brief("a percentage discount needs a rate and no amount")),
        (DiscountType::Fixed, _, _) => Err(StatusError::bad_request()
            .brief("a fixed discount needs an amount and no rate")),
    }
}

/// Discount Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DiscountResponse {
    pub id: Uuid,
    pub name: String,
    pub discount_type: DiscountType,
    #[salvo(schema(value_type = Option<f64>))]
    pub rate: Option<Decimal>,
    #[salvo(schema(value_type = Option<f64>))]
    pub amount: Option<Decimal>,
    pub is_default: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<DiscountRecord> for DiscountResponse {
    fn from(discount: DiscountRecord) -> Self {
        Self {
            id: discount.uuid.into(),
            name: discount.name,
            discount_type: discount.value.kind().into(),
            rate: discount.value.rate(),
            amount: discount.value.amount(),
            is_default: discount.is_default,
            created_at: discount.created_at.to_string(),
            updated_at: discount.updated_at.to_string(),
        }
    }
}

/// Create Discount Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateDiscountRequest {
    pub name: String,
    pub discount_type: DiscountType,
    #[serde(default)]
    #[salvo(schema(value_type = Option<f64>))]
    pub rate: Option<Decimal>,
    #[serde(default)]
    #[salvo(schema(value_type = Option<f64>))]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub is_default: bool,
}

impl TryFrom<CreateDiscountRequest> for NewDiscount {
    type Error = StatusError;

    fn try_from(request: CreateDiscountRequest) -> Result<Self, Self::Error> {
        Ok(NewDiscount {
            name: request.name,
            value: discount_value(request.discount_type, request.rate, request.amount)?,
            is_default: request.is_default,
        })
    }
}

/// Update Discount Request
///
/// Changing the value requires `discountType` together with its matching
/// `rate` or `amount`.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct UpdateDiscountRequest {
    pub name: Option<String>,
    pub discount_type: Option<DiscountType>,
    #[salvo(schema(value_type = Option<f64>))]
    pub rate: Option<Decimal>,
    #[salvo(schema(value_type = Option<f64>))]
    pub amount: Option<Decimal>,
    pub is_default: Option<bool>,
}

impl TryFrom<UpdateDiscountRequest> for DiscountUpdate {
    type Error = StatusError;

    fn try_from(request: UpdateDiscountRequest) -> Result<Self, Self::Error> {
        let value = match request.discount_type {
            Some(discount_type) => Some(discount_value(discount_type, request.rate, request.amount)?),
            None if request.rate.is_some() || request.amount.is_some() => {
                return Err(StatusError::bad_request()
                    .brief("discountType is required when changing the value"));
            }
            None => None,
        };

        Ok(DiscountUpdate {
            name: request.name,
            value,
            is_default: request.is_default,
        })
    }
}
