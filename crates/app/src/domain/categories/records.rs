//! Category Records

use jiff::Timestamp;

use crate::{store::Record, uuids::TypedUuid};

/// Category UUID
pub type CategoryUuid = TypedUuid<CategoryRecord>;

/// Product Category Record. Categories form a forest through `parent`.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRecord {
    pub uuid: CategoryUuid,
    pub name: String,
    pub parent: Option<CategoryUuid>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Record for CategoryRecord {
    fn uuid(&self) -> CategoryUuid {
        self.uuid
    }
}
