//! Unit Handlers

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

    use bizdesk_app::domain::units::{
        MockUnitsService,
        records::{UnitRecord, UnitUuid},
    };

    use crate::test_helpers::{app_service, strict_app};

    pub(super) fn make_unit(uuid: UnitUuid) -> UnitRecord {
        UnitRecord {
            uuid,
            name: "Kilogram".to_string(),
            symbol: "kg".to_string(),
            is_base_unit: true,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }

    pub(super) fn units_service(units: MockUnitsService, route: Router) -> Service {
        let mut app = strict_app();

        app.units = Arc::new(units);

        app_service(app, route)
    }
}
