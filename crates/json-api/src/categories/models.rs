//! Category Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bizdesk_app::domain::categories::{
    data::{CategoryUpdate, NewCategory},
    records::CategoryRecord,
};

/// Category Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CategoryResponse {
    pub id: Uuid,
    pub name: String,
    pub parent_category_id: Option<Uuid>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<CategoryRecord> for CategoryResponse {
    fn from(category: CategoryRecord) -> Self {
        Self {
            id: category.uuid.into(),
            name: category.name,
            parent_category_id: category.parent.map(Into::into),
            created_at: category.created_at.to_string(),
            updated_at: category.updated_at.to_string(),
        }
    }
}

/// Create Category Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateCategoryRequest {
    pub name: String,
    #[serde(default)]
    pub parent_category_id: Option<Uuid>,
}

impl From<CreateCategoryRequest> for NewCategory {
    fn from(request: CreateCategoryRequest) -> Self {
        NewCategory {
            name: request.name,
            parent: request.parent_category_id.map(Into::into),
        }
    }
}

/// Update Category Request
///
/// `parentCategoryId: null` moves the category to the top level; leaving the
/// field out keeps the current parent.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateCategoryRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "crate::nullable::deserialize")]
    #[salvo(schema(value_type = Option<Uuid>))]
    pub parent_category_id: Option<Option<Uuid>>,
}

impl From<UpdateCategoryRequest> for CategoryUpdate {
    fn from(request: UpdateCategoryRequest) -> Self {
        CategoryUpdate {
            name: request.name,
            parent: request
                .parent_category_id
                .map(|parent| parent.map(Into::into)),
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn null_parent_moves_to_top_level() -> TestResult {
        let request: UpdateCategoryRequest =
            serde_json::from_str(r#"{ "parentCategoryId": null }"#)?;

        assert_eq!(CategoryUpdate::from(request).parent, Some(None));

        Ok(())
    }

    #[test]
    fn absent_parent_is_left_alone() -> TestResult {
        let request: UpdateCategoryRequest = serde_json::from_str(r#"{ "name": "Snacks" }"#)?;
        let update = CategoryUpdate::from(request);

        assert_eq!(update.parent, None);
        assert_eq!(update.name.as_deref(), Some("Snacks"));

        Ok(())
    }
}
