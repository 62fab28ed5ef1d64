//! User Handlers

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod login;
pub(crate) mod update;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use jiff::Timestamp;
    use salvo::prelude::*;

    use bizdesk_app::domain::users::{
        MockUsersService,
        records::{Role, User, UserUuid},
    };

    use crate::test_helpers::{app_service, strict_app};

    pub(super) fn make_user(uuid: UserUuid) -> User {
        User {
            uuid,
            username: "budi".to_string(),
            full_name: "Budi Santoso".to_string(),
            email: "budi@example.com".to_string(),
            role: Role::Cashier,
            is_active: true,
            has_password: true,
            last_login: None,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }

    pub(super) fn users_service(users: MockUsersService, route: Router) -> Service {
        let mut app = strict_app();

        app.users = Arc::new(users);

        app_service(app, route)
    }
}
