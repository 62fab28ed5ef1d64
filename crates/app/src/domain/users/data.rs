//! User Data

use crate::domain::users::{credential::Password, records::Role};

/// New User Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub role: Role,
    pub is_active: bool,
    pub password: Option<Password>,
}

/// User Update Data
///
/// There is no username: it is fixed at creation. A missing or
/// blank password keeps the stored credential.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserUpdate {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub is_active: Option<bool>,
    pub password: Option<Password>,
}
