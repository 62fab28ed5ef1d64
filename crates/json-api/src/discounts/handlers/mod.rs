//! Discount Handlers

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

    use bizdesk_app::domain::discounts::{
        MockDiscountsService,
        records::{DiscountRecord, DiscountUuid, DiscountValue},
    };

    use crate::test_helpers::{app_service, strict_app};

    pub(super) fn make_discount(uuid: DiscountUuid, value: DiscountValue) -> DiscountRecord {
        DiscountRecord {
            uuid,
            name: "Member".to_string(),
            value,
            is_default: false,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }

    pub(super) fn discounts_service(discounts: MockDiscountsService, route: Router) -> Service {
        let mut app = strict_app();

        app.discounts = Arc::new(discounts);

        app_service(app, route)
    }
}
