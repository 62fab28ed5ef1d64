//! Tax Data

use rust_decimal::Decimal;

/// New Tax Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewTax {
    pub name: String,
    pub rate: Decimal,
    pub is_default: bool,
}

/// Tax Update Data
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaxUpdate {
    pub name: Option<String>,
    pub rate: Option<Decimal>,
    pub is_default: Option<bool>,
}
