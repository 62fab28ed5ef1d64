//! Branch Records

use jiff::Timestamp;

use crate::{store::Record, uuids::TypedUuid};

/// Branch UUID
pub type BranchUuid = TypedUuid<BranchRecord>;

/// Branch Record
#[derive(Debug, Clone, PartialEq)]
pub struct BranchRecord {
    pub uuid: BranchUuid,
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub is_main: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Record for BranchRecord {
    fn uuid(&self) -> BranchUuid {
        self.uuid
    }
}
