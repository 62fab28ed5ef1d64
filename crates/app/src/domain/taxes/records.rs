//! Tax Records

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::{store::Record, uuids::TypedUuid};

/// Tax UUID
pub type TaxUuid = TypedUuid<TaxRecord>;

/// Tax Record
#[derive(Debug, Clone, PartialEq)]
pub struct TaxRecord {
    pub uuid: TaxUuid,
    pub name: String,
    /// Percentage in `0..=100`.
    pub rate: Decimal,
    pub is_default: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Record for TaxRecord {
    fn uuid(&self) -> TaxUuid {
        self.uuid
    }
}
