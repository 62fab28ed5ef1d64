//! Test context for service-level tests.

use crate::domain::{
    accounts::InMemoryAccountsService, branches::InMemoryBranchesService,
    categories::InMemoryCategoriesService, currencies::InMemoryCurrenciesService,
    discounts::InMemoryDiscountsService, settings::InMemoryGeneralSettingsService,
    taxes::InMemoryTaxesService, units::InMemoryUnitsService, users::InMemoryUsersService,
};

/// Fresh, empty services. Every test builds its own so no state leaks
/// between tests running in parallel.
pub struct TestContext {
    pub settings: InMemoryGeneralSettingsService,
    pub users: InMemoryUsersService,
    pub branches: InMemoryBranchesService,
    pub currencies: InMemoryCurrenciesService,
    pub taxes: InMemoryTaxesService,
    pub discounts: InMemoryDiscountsService,
    pub units: InMemoryUnitsService,
    pub categories: InMemoryCategoriesService,
    pub accounts: InMemoryAccountsService,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            settings: InMemoryGeneralSettingsService::default(),
            users: InMemoryUsersService::default(),
            branches: InMemoryBranchesService::default(),
            currencies: InMemoryCurrenciesService::default(),
            taxes: InMemoryTaxesService::default(),
            discounts: InMemoryDiscountsService::default(),
            units: InMemoryUnitsService::default(),
            categories: InMemoryCategoriesService::default(),
            accounts: InMemoryAccountsService::default(),
        }
    }
}
