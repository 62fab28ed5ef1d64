//! Category Data

use crate::domain::categories::records::CategoryUuid;

/// New Category Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub name: String,
    pub parent: Option<CategoryUuid>,
}

/// Category Update Data
///
/// `parent: Some(None)` moves the category to the top level.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryUpdate {
    pub name: Option<String>,
    pub parent: Option<Option<CategoryUuid>>,
}
