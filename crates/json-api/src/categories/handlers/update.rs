//! Update Category Handler

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use tracing::info;
use uuid::Uuid;

use crate::{
    categories::models::{CategoryResponse, UpdateCategoryRequest},
    extensions::*,
};

/// Update Category Handler
#[endpoint(
    tags("categories"),
    summary = "Update Product Category",
    responses(
        (status_code = StatusCode::OK, description = "Category updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Category not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid category or parent"),
    ),
)]
#[tracing::instrument(name = "categories.update", skip(uuid, json, depot), err)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    json: JsonBody<UpdateCategoryRequest>,
    depot: &mut Depot,
) -> Result<Json<CategoryResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let category = state
        .app
        .categories
        .update_category(uuid.into_inner().into(), json.into_inner().into())
        .await
        .or_status()?;

    info!(category_uuid = %category.uuid, "updated category");

    Ok(Json(category.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use serde_json::json;

    use bizdesk_app::domain::categories::{
        MockCategoriesService, data::CategoryUpdate, records::CategoryUuid,
    };

    use super::{super::tests::*, *};

    #[tokio::test]
    async fn null_parent_is_forwarded_as_clear() {
        let uuid = CategoryUuid::new();
        let mut categories = MockCategoriesService::new();

        categories
            .expect_update_category()
            .once()
            .withf(move |u, update| {
                *u == uuid
                    && *update
                        == CategoryUpdate {
                            name: None,
                            parent: Some(None),
                        }
            })
            .return_once(move |_, _| Ok(make_category(uuid, None)));

        let res = TestClient::put(format!("http://example.com/api/categories/{uuid}"))
            .json(&json!({ "parentCategoryId": null }))
            .send(&categories_service(
                categories,
                Router::with_path("api/categories/{uuid}").put(handler),
            ))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
    }
}
