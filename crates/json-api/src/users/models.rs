//! User Models

use std::fmt;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bizdesk_app::domain::users::{
    Password,
    data::{NewUser, UserUpdate},
    records::{Role, User},
};

/// User role on the wire.
///
/// Mirrors [`Role`] so the OpenAPI schema lives in this crate; the registry
/// crate does not depend on salvo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub(crate) enum UserRole {
    Admin,
    Manager,
    Accountant,
    Cashier,
    Staff,
}

impl From<UserRole> for Role {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::Admin => Role::Admin,
            UserRole::Manager => Role::Manager,
            UserRole::Accountant => Role::Accountant,
            UserRole::Cashier => Role::Cashier,
            UserRole::Staff => Role::Staff,
        }
    }
}

impl From<Role> for UserRole {
    fn from(role: Role) -> Self {
        match role {
            Role::Admin => UserRole::Admin,
            Role::Manager => UserRole::Manager,
            Role::Accountant => UserRole::Accountant,
            Role::Cashier => UserRole::Cashier,
            Role::Staff => UserRole::Staff,
        }
    }
}

/// User Response
///
/// Credentials are never returned; `hasPassword` tells whether one is set.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub role: UserRole,
    pub is_active: bool,
    pub has_password: bool,
    pub last_login: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.uuid.into(),
            username: user.username,
            full_name: user.full_name,
            email: user.email,
            role: user.role.into(),
            is_active: user.is_active,
            has_password: user.has_password,
            last_login: user.last_login.map(|at| at.to_string()),
            created_at: user.created_at.to_string(),
            updated_at: user.updated_at.to_string(),
        }
    }
}

fn active() -> bool {
    true
}

/// Create User Request
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateUserRequest {
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default = "active")]
    pub is_active: bool,
    #[serde(default)]
    pub password: Option<String>,
}

impl fmt::Debug for CreateUserRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateUserRequest")
            .field("username", &self.username)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

impl From<CreateUserRequest> for NewUser {
    fn from(request: CreateUserRequest) -> Self {
        NewUser {
            username: request.username,
            full_name: request.full_name,
            email: request.email,
            role: request.role.into(),
            is_active: request.is_active,
            password: request.password.map(Password::new),
        }
    }
}

/// Update User Request
///
/// The username cannot be changed. A blank or missing password keeps the
/// current one.
#[derive(Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct UpdateUserRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub role: Option<UserRole>,
    pub is_active: Option<bool>,
    pub password: Option<String>,
}

impl fmt::Debug for UpdateUserRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateUserRequest")
            .field("role", &self.role)
            .field("is_active", &self.is_active)
            .finish_non_exhaustive()
    }
}

impl From<UpdateUserRequest> for UserUpdate {
    fn from(request: UpdateUserRequest) -> Self {
        UserUpdate {
            full_name: request.full_name,
            email: request.email,
            role: request.role.map(Into::into),
            is_active: request.is_active,
            password: request.password.map(Password::new),
        }
    }
}

/// Login Request
#[derive(Serialize, Deserialize, ToSchema)]
pub(crate) struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}
