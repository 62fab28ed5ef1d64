//! Branch Data

/// New Branch Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewBranch {
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub is_main: bool,
}

/// Branch Update Data
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BranchUpdate {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub is_main: Option<bool>,
}
