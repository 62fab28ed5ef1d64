//! Currency Records

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::{store::Record, uuids::TypedUuid};

/// Currency UUID
pub type CurrencyUuid = TypedUuid<CurrencyRecord>;

/// Currency Record
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyRecord {
    pub uuid: CurrencyUuid,
    /// Upper-case three-letter code, unique across the collection.
    pub code: String,
    pub name: String,
    pub symbol: String,
    /// Units of the base currency per one unit of this currency.
    pub exchange_rate_to_base: Decimal,
    pub is_base_currency: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Record for CurrencyRecord {
    fn uuid(&self) -> CurrencyUuid {
        self.uuid
    }
}
