//! Product Index Handler

use salvo::prelude::*;
use tracing::warn;

use crate::{
    extensions::*,
    products::models::{Product, placeholder_products},
};

/// Product Index Handler
///
/// Returns every product, or two placeholder products when the product table
/// is empty or cannot be read.
#[endpoint(
    tags("products"),
    summary = "List Products",
    responses(
        (status_code = StatusCode::OK, description = "Products or placeholders"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<Product>>, StatusError> {
    let state = depot.state_or_500()?;

    let products = match state.products.list_products().await {
        Ok(products) if !products.is_empty() => products,
        Ok(_) => {
            warn!("product table is empty, serving placeholder products");

            placeholder_products()
        }
        Err(source) => {
            warn!("product lookup failed, serving placeholder products: {source}");

            placeholder_products()
        }
    };

    Ok(Json(products))
}
