//! Unit Records

use jiff::Timestamp;

use crate::{store::Record, uuids::TypedUuid};

/// Unit UUID
pub type UnitUuid = TypedUuid<UnitRecord>;

/// Unit of Measure Record
#[derive(Debug, Clone, PartialEq)]
pub struct UnitRecord {
    pub uuid: UnitUuid,
    pub name: String,
    pub symbol: String,
    pub is_base_unit: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Record for UnitRecord {
    fn uuid(&self) -> UnitUuid {
        self.uuid
    }
}
