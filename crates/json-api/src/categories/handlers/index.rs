//! Category Index Handler

use salvo::prelude::*;

use crate::{categories::models::CategoryResponse, extensions::*};

/// Category Index Handler
#[endpoint(tags("categories"), summary = "List Product Categories")]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<Vec<CategoryResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let categories = state.app.categories.list_categories().await;

    Ok(Json(categories.into_iter().map(Into::into).collect()))
}
