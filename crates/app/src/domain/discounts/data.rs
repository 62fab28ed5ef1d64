//! Discount Data

use crate::domain::discounts::records::DiscountValue;

/// New Discount Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewDiscount {
    pub name: String,
    pub value: DiscountValue,
    pub is_default: bool,
}

/// Discount Update Data
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiscountUpdate {
    pub name: Option<String>,
    pub value: Option<DiscountValue>,
    pub is_default: Option<bool>,
}
