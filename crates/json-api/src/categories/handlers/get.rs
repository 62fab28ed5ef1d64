//! Get Category Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{categories::models::CategoryResponse, extensions::*};

/// Get Category Handler
#[endpoint(
    tags("categories"),
    summary = "Get Product Category",
    responses(
        (status_code = StatusCode::OK, description = "Category found"),
        (status_code = StatusCode::NOT_FOUND, description = "Category not found"),
    ),
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CategoryResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let category = state
        .app
        .categories
        .get_category(uuid.into_inner().into())
        .await
        .or_status()?;

    Ok(Json(category.into()))
}
