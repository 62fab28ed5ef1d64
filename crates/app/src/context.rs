//! App Context

use std::sync::Arc;

use crate::domain::{
    accounts::{AccountsService, InMemoryAccountsService},
    branches::{BranchesService, InMemoryBranchesService},
    categories::{CategoriesService, InMemoryCategoriesService},
    currencies::{CurrenciesService, InMemoryCurrenciesService},
    discounts::{DiscountsService, InMemoryDiscountsService},
    errors::RegistryError,
    settings::{GeneralSettingsService, InMemoryGeneralSettingsService},
    taxes::{InMemoryTaxesService, TaxesService},
    units::{InMemoryUnitsService, UnitsService},
    users::{InMemoryUsersService, UsersService},
};

mod seed;

/// Every master-data service, each over its own store.
///
/// Collections are independent. An operation that touches two of them (for
/// example creating a branch and then pointing the general settings at it) is
/// two separate calls; if the second one fails the first stays applied.
#[derive(Clone)]
pub struct AppContext {
    pub settings: Arc<dyn GeneralSettingsService>,
    pub users: Arc<dyn UsersService>,
    pub branches: Arc<dyn BranchesService>,
    pub currencies: Arc<dyn CurrenciesService>,
    pub taxes: Arc<dyn TaxesService>,
    pub discounts: Arc<dyn DiscountsService>,
    pub units: Arc<dyn UnitsService>,
    pub categories: Arc<dyn CategoriesService>,
    pub accounts: Arc<dyn AccountsService>,
}

impl AppContext {
    /// Build a context with empty collections and default general settings.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            settings: Arc::new(InMemoryGeneralSettingsService::default()),
            users: Arc::new(InMemoryUsersService::default()),
            branches: Arc::new(InMemoryBranchesService::default()),
            currencies: Arc::new(InMemoryCurrenciesService::default()),
            taxes: Arc::new(InMemoryTaxesService::default()),
            discounts: Arc::new(InMemoryDiscountsService::default()),
            units: Arc::new(InMemoryUnitsService::default()),
            categories: Arc::new(InMemoryCategoriesService::default()),
            accounts: Arc::new(InMemoryAccountsService::default()),
        }
    }

    /// Build a context pre-populated with demo master data.
    ///
    /// # Errors
    ///
    /// Returns an error if a demo record is rejected by its collection.
    pub async fn seeded() -> Result<Self, RegistryError> {
        let context = Self::in_memory();

        seed::populate(&context).await?;

        Ok(context)
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}
