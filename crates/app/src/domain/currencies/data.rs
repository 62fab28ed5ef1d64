//! Currency Data

use rust_decimal::Decimal;

/// New Currency Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewCurrency {
    pub code: String,
    pub name: String,
    pub symbol: String,
    pub exchange_rate_to_base: Decimal,
    pub is_base_currency: bool,
}

/// Currency Update Data
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurrencyUpdate {
    pub code: Option<String>,
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub exchange_rate_to_base: Option<Decimal>,
    pub is_base_currency: Option<bool>,
}
