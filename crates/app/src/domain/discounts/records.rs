//! Discount Records

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{store::Record, uuids::TypedUuid};

/// Discount UUID
pub type DiscountUuid = TypedUuid<DiscountRecord>;

/// Discount type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountKind {
    Percentage,
    Fixed,
}

/// Either a percentage rate or a fixed amount, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscountValue {
    Percentage(Decimal),
    FixedAmount(Decimal),
}

impl DiscountValue {
    /// Type tag of the value.
    #[must_use]
    pub fn kind(&self) -> DiscountKind {
        match self {
            Self::Percentage(_) => DiscountKind::Percentage,
            Self::FixedAmount(_) => DiscountKind::Fixed,
        }
    }

    /// Percentage rate, for percentage discounts.
    #[must_use]
    pub fn rate(&self) -> Option<Decimal> {
        match self {
            Self::Percentage(rate) => Some(*rate),
            Self::FixedAmount(_) => None,
        }
    }

    /// Fixed amount, for fixed discounts.
    #[must_use]
    pub fn amount(&self) -> Option<Decimal> {
        match self {
            Self::Percentage(_) => None,
            Self::FixedAmount(amount) => Some(*amount),
        }
    }
}

/// Discount Record
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountRecord {
    pub uuid: DiscountUuid,
    pub name: String,
    pub value: DiscountValue,
    pub is_default: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Record for DiscountRecord {
    fn uuid(&self) -> DiscountUuid {
        self.uuid
    }
}
