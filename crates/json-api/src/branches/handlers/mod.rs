//! Branch Handlers

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod update;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use jiff::Timestamp;
    use salvo::prelude::*;

    use bizdesk_app::domain::branches::{
        MockBranchesService,
        records::{BranchRecord, BranchUuid},
    };

    use crate::test_helpers::{app_service, strict_app};

    pub(super) fn make_branch(uuid: BranchUuid, is_main: bool) -> BranchRecord {
        BranchRecord {
            uuid,
            name: "Kantor Pusat".to_string(),
            address: "Jl. Sudirman No. 1".to_string(),
            phone: None,
            is_main,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }

    pub(super) fn branches_service(branches: MockBranchesService, route: Router) -> Service {
        let mut app = strict_app();

        app.branches = Arc::new(branches);

        app_service(app, route)
    }
}
