//! Units of measure service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::debug;

use crate::{
    domain::{
        errors::RegistryError,
        units::{
            data::{NewUnit, UnitUpdate},
            records::{UnitRecord, UnitUuid},
        },
        validation,
    },
    store::Store,
};

/// Units of measure kept in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUnitsService {
    store: Store<UnitRecord>,
}

impl InMemoryUnitsService {
    /// Serves the units held in `store`.
    #[must_use]
    pub fn new(store: Store<UnitRecord>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UnitsService for InMemoryUnitsService {
    async fn list_units(&self) -> Vec<UnitRecord> {
        self.store.read().await.to_vec()
    }

    async fn get_unit(&self, unit: UnitUuid) -> Result<UnitRecord, RegistryError> {
        self.store
            .read()
            .await
            .get(unit)
            .cloned()
            .ok_or(RegistryError::NotFound)
    }

    async fn create_unit(&self, unit: NewUnit) -> Result<UnitRecord, RegistryError> {
        let name = validation::required("name", &unit.name)?;
        let symbol = validation::required("symbol", &unit.symbol)?;

        let now = Timestamp::now();

        let record = UnitRecord {
            uuid: UnitUuid::new(),
            name,
            symbol,
            is_base_unit: unit.is_base_unit,
            created_at: now,
            updated_at: now,
        };

        self.store.begin().await.push(record.clone());

        debug!(unit_uuid = %record.uuid, symbol = %record.symbol, "created unit");

        Ok(record)
    }

    async fn update_unit(
        &self,
        unit: UnitUuid,
        update: UnitUpdate,
    ) -> Result<UnitRecord, RegistryError> {
        let mut tx = self.store.begin().await;

        let record = tx.get_mut(unit).ok_or(RegistryError::NotFound)?;

        let name = update
            .name
            .as_deref()
            .map(|name| validation::required("name", name))
            .transpose()?;

        let symbol = update
            .symbol
            .as_deref()
            .map(|symbol| validation::required("symbol", symbol))
            .transpose()?;

        if let Some(name) = name {
            record.name = name;
        }

        if let Some(symbol) = symbol {
            record.symbol = symbol;
        }

        if let Some(is_base_unit) = update.is_base_unit {
            record.is_base_unit = is_base_unit;
        }

        record.updated_at = Timestamp::now();

        debug!(unit_uuid = %unit, "updated unit");

        Ok(record.clone())
    }

    async fn delete_unit(&self, unit: UnitUuid) -> Result<(), RegistryError> {
        self.store
            .begin()
            .await
            .remove(unit)
            .ok_or(RegistryError::NotFound)?;

        debug!(unit_uuid = %unit, "deleted unit");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait UnitsService: Send + Sync {
    /// Retrieves all units in creation order.
    async fn list_units(&self) -> Vec<UnitRecord>;

    /// Retrieves a single unit.
    async fn get_unit(&self, unit: UnitUuid) -> Result<UnitRecord, RegistryError>;

    /// Creates a unit of measure.
    async fn create_unit(&self, unit: NewUnit) -> Result<UnitRecord, RegistryError>;

    /// Applies a partial update.
    async fn update_unit(&self, unit: UnitUuid, update: UnitUpdate)
    -> Result<UnitRecord, RegistryError>;

    /// Deletes a unit of measure.
    async fn delete_unit(&self, unit: UnitUuid) -> Result<(), RegistryError>;
}
