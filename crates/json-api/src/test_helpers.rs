//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use bizdesk_app::{
    context::AppContext,
    domain::{
        accounts::MockAccountsService, branches::MockBranchesService,
        categories::MockCategoriesService, currencies::MockCurrenciesService,
        discounts::MockDiscountsService, settings::MockGeneralSettingsService,
        taxes::MockTaxesService, units::MockUnitsService, users::MockUsersService,
    },
};

use crate::{products::MockProductsRepository, state::State};

/// Context whose services panic on any call. Tests swap in the one mock
/// they set expectations on.
pub(crate) fn strict_app() -> AppContext {
    AppContext {
        settings: Arc::new(MockGeneralSettingsService::new()),
        users: Arc::new(MockUsersService::new()),
        branches: Arc::new(MockBranchesService::new()),
        currencies: Arc::new(MockCurrenciesService::new()),
        taxes: Arc::new(MockTaxesService::new()),
        discounts: Arc::new(MockDiscountsService::new()),
        units: Arc::new(MockUnitsService::new()),
        categories: Arc::new(MockCategoriesService::new()),
        accounts: Arc::new(MockAccountsService::new()),
    }
}

pub(crate) fn products_service(
    app: AppContext,
    products: MockProductsRepository,
    route: Router,
) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(Arc::new(State::new(app, Arc::new(products)))))
            .push(route),
    )
}

pub(crate) fn app_service(app: AppContext, route: Router) -> Service {
    products_service(app, MockProductsRepository::new(), route)
}
