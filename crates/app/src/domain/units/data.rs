//! Unit Data

/// New Unit Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewUnit {
    pub name: String,
    pub symbol: String,
    pub is_base_unit: bool,
}

/// Unit Update Data
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnitUpdate {
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub is_base_unit: Option<bool>,
}
