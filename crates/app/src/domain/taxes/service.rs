//! Taxes service.
//!
//! Unlike branches and currencies, the default flag is managed by cascade:
//! making a tax the default clears the flag on every other tax in the same
//! operation.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::debug;

use crate::{
    domain::{
        errors::RegistryError,
        taxes::{
            data::{NewTax, TaxUpdate},
            records::{TaxRecord, TaxUuid},
        },
        validation,
    },
    store::{Collection, Store},
};

/// Taxes kept in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaxesService {
    store: Store<TaxRecord>,
}

impl InMemoryTaxesService {
    /// Serves the taxes held in `store`.
    #[must_use]
    pub fn new(store: Store<TaxRecord>) -> Self {
        Self { store }
    }
}

fn demote_defaults(taxes: &mut Collection<TaxRecord>, now: Timestamp) {
    for tax in taxes.iter_mut().filter(|tax| tax.is_default) {
        tax.is_default = false;
        tax.updated_at = now;
    }
}

#[async_trait]
impl TaxesService for InMemoryTaxesService {
    async fn list_taxes(&self) -> Vec<TaxRecord> {
        self.store.read().await.to_vec()
    }

    async fn get_tax(&self, tax: TaxUuid) -> Result<TaxRecord, RegistryError> {
        self.store
            .read()
            .await
            .get(tax)
            .cloned()
            .ok_or(RegistryError::NotFound)
    }

    async fn create_tax(&self, tax: NewTax) -> Result<TaxRecord, RegistryError> {
        let name = validation::required("name", &tax.name)?;

        validation::percentage("rate", tax.rate)?;

        let mut tx = self.store.begin().await;
        let now = Timestamp::now();

        if tax.is_default {
            demote_defaults(&mut tx, now);
        }

        let record = TaxRecord {
            uuid: TaxUuid::new(),
            name,
            rate: tax.rate,
            is_default: tax.is_default,
            created_at: now,
            updated_at: now,
        };

        tx.push(record.clone());

        debug!(tax_uuid = %record.uuid, is_default = record.is_default, "created tax");

        Ok(record)
    }

    async fn update_tax(&self, tax: TaxUuid, update: TaxUpdate) -> Result<TaxRecord, RegistryError> {
        let mut tx = self.store.begin().await;

        if !tx.contains(tax) {
            return Err(RegistryError::NotFound);
        }

        let name = update
            .name
            .as_deref()
            .map(|name| validation::required("name", name))
            .transpose()?;

        if let Some(rate) = update.rate {
            validation::percentage("rate", rate)?;
        }

        let now = Timestamp::now();

        if update.is_default == Some(true) {
            demote_defaults(&mut tx, now);
        }

        let record = tx.get_mut(tax).ok_or(RegistryError::NotFound)?;

        if let Some(name) = name {
            record.name = name;
        }

        if let Some(rate) = update.rate {
            record.rate = rate;
        }

        if let Some(is_default) = update.is_default {
            record.is_default = is_default;
        }

        record.updated_at = now;

        debug!(tax_uuid = %tax, is_default = record.is_default, "updated tax");

        Ok(record.clone())
    }

    async fn delete_tax(&self, tax: TaxUuid) -> Result<(), RegistryError> {
        self.store
            .begin()
            .await
            .remove(tax)
            .ok_or(RegistryError::NotFound)?;

        debug!(tax_uuid = %tax, "deleted tax");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait TaxesService: Send + Sync {
    /// Retrieves all taxes in creation order.
    async fn list_taxes(&self) -> Vec<TaxRecord>;

    /// Retrieves a single tax.
    async fn get_tax(&self, tax: TaxUuid) -> Result<TaxRecord, RegistryError>;

    /// Creates a tax. A new default demotes the previous one.
    async fn create_tax(&self, tax: NewTax) -> Result<TaxRecord, RegistryError>;

    /// Applies a partial update. Setting the default flag demotes every
    /// other tax.
    async fn update_tax(&self, tax: TaxUuid, update: TaxUpdate) -> Result<TaxRecord, RegistryError>;

    /// Deletes a tax.
    async fn delete_tax(&self, tax: TaxUuid) -> Result<(), RegistryError>;
}
