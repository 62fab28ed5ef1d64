//! User Records

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{domain::users::credential::Credential, store::Record, uuids::TypedUuid};

/// User UUID
pub type UserUuid = TypedUuid<UserRecord>;

/// Access role granted to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    Accountant,
    Cashier,
    Staff,
}

/// Stored user. Only the users service sees the credential.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub uuid: UserUuid,
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub role: Role,
    pub is_active: bool,
    pub last_login: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub(crate) credential: Option<Credential>,
}

impl Record for UserRecord {
    fn uuid(&self) -> UserUuid {
        self.uuid
    }
}

/// User as returned to callers, without credential material.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub uuid: UserUuid,
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub role: Role,
    pub is_active: bool,
    pub has_password: bool,
    pub last_login: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<&UserRecord> for User {
    fn from(record: &UserRecord) -> Self {
        Self {
            uuid: record.uuid,
            username: record.username.clone(),
            full_name: record.full_name.clone(),
            email: record.email.clone(),
            role: record.role,
            is_active: record.is_active,
            has_password: record.credential.is_some(),
            last_login: record.last_login,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}
