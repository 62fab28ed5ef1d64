//! General settings service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::debug;

use crate::{
    domain::{
        errors::RegistryError,
        settings::{data::GeneralSettingsUpdate, records::GeneralSettings},
        validation,
    },
    store::Singleton,
};

/// General settings kept in memory. Starts from the defaults.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGeneralSettingsService {
    store: Singleton<GeneralSettings>,
}

impl InMemoryGeneralSettingsService {
    /// Serves the settings held in `store`.
    #[must_use]
    pub fn new(store: Singleton<GeneralSettings>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl GeneralSettingsService for InMemoryGeneralSettingsService {
    async fn get_general_settings(&self) -> GeneralSettings {
        self.store.get().await
    }

    async fn update_general_settings(
        &self,
        update: GeneralSettingsUpdate,
    ) -> Result<GeneralSettings, RegistryError> {
        let company_name = update
            .company_name
            .as_deref()
            .map(|name| validation::required("companyName", name))
            .transpose()?;

        let base_currency = update
            .base_currency
            .as_deref()
            .map(|code| validation::required("baseCurrency", code))
            .transpose()?;

        let email = validation::optional(update.email.as_deref());

        if let Some(email) = &email {
            validation::email("email", email)?;
        }

        let base_currency = base_currency
            .map(|code| validation::currency_code("baseCurrency", &code))
            .transpose()?;

        let mut settings = self.store.begin().await;

        if let Some(company_name) = company_name {
            settings.company_name = company_name;
        }

        if update.email.is_some() {
            settings.email = email;
        }

        if let Some(base_currency) = base_currency {
            settings.base_currency = base_currency;
        }

        if let Some(tax_number) = update.tax_number.as_deref() {
            settings.tax_number = validation::optional(Some(tax_number));
        }

        if let Some(address) = update.address.as_deref() {
            settings.address = validation::optional(Some(address));
        }

        if let Some(phone) = update.phone.as_deref() {
            settings.phone = validation::optional(Some(phone));
        }

        if let Some(enabled) = update.e_invoice_enabled {
            settings.e_invoice_enabled = enabled;
        }

        settings.updated_at = Timestamp::now();

        debug!(company_name = %settings.company_name, "updated general settings");

        Ok(settings.clone())
    }
}

#[automock]
#[async_trait]
pub trait GeneralSettingsService: Send + Sync {
    /// Returns the current settings.
    async fn get_general_settings(&self) -> GeneralSettings;

    /// Applies a partial update in place.
    async fn update_general_settings(
        &self,
        update: GeneralSettingsUpdate,
    ) -> Result<GeneralSettings, RegistryError>;
}
