//! Product Models

use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

/// Product as exposed by the lookup endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub(crate) struct Product {
    #[serde(rename = "ProductID")]
    pub product_id: i32,

    #[serde(rename = "ProductName")]
    pub product_name: String,

    #[serde(rename = "UnitPrice")]
    #[salvo(schema(value_type = f64))]
    pub unit_price: Decimal,
}

/// Served instead of an empty or unreachable product table.
pub(crate) fn placeholder_products() -> Vec<Product> {
    vec![
        Product {
            product_id: 1,
            product_name: "Sample Product A".to_string(),
            unit_price: Decimal::from(10_000),
        },
        Product {
            product_id: 2,
            product_name: "Sample Product B".to_string(),
            unit_price: Decimal::from(25_000),
        },
    ]
}
