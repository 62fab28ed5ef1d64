//! Create Category Handler

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};
use tracing::info;

use crate::{
    categories::models::{CategoryResponse, CreateCategoryRequest},
    extensions::*,
};

/// Create Category Handler
#[endpoint(
    tags("categories"),
    summary = "Create Product Category",
    responses(
        (status_code = StatusCode::CREATED, description = "Category created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid category or parent"),
    ),
)]
#[tracing::instrument(name = "categories.create", skip(json, depot, res), err)]
pub(crate) async fn handler(
    json: JsonBody<CreateCategoryRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CategoryResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let category = state
        .app
        .categories
        .create_category(json.into_inner().into())
        .await
        .or_status()?;

    res.add_header(LOCATION, format!("/api/categories/{}", category.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    info!(category_uuid = %category.uuid, "created category");

    Ok(Json(category.into()))
}
