//! Currency Handlers

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod update;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use jiff::Timestamp;
    use rust_decimal::Decimal;
    use salvo::prelude::*;

    use bizdesk_app::domain::currencies::{
        MockCurrenciesService,
        records::{CurrencyRecord, CurrencyUuid},
    };

    use crate::test_helpers::{app_service, strict_app};

    pub(super) fn make_currency(uuid: CurrencyUuid, code: &str) -> CurrencyRecord {
        CurrencyRecord {
            uuid,
            code: code.to_string(),
            name: format!("{code} currency"),
            symbol: code.to_string(),
            exchange_rate_to_base: Decimal::ONE,
            is_base_currency: false,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }

    pub(super) fn currencies_service(currencies: MockCurrenciesService, route: Router) -> Service {
        let mut app = strict_app();

        app.currencies = Arc::new(currencies);

        app_service(app, route)
    }
}
