//! Discounts service.
//!
//! The default discount follows the same cascade rule as the default tax.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::debug;

use crate::{
    domain::{
        discounts::{
            data::{DiscountUpdate, NewDiscount},
            records::{DiscountRecord, DiscountUuid, DiscountValue},
        },
        errors::RegistryError,
        validation,
    },
    store::{Collection, Store},
};

/// Discounts kept in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDiscountsService {
    store: Store<DiscountRecord>,
}

impl InMemoryDiscountsService {
    /// Serves the discounts held in `store`.
    #[must_use]
    pub fn new(store: Store<DiscountRecord>) -> Self {
        Self { store }
    }
}

fn validate_value(value: DiscountValue) -> Result<(), RegistryError> {
    match value {
        DiscountValue::Percentage(rate) => validation::percentage("rate", rate),
        DiscountValue::FixedAmount(amount) => validation::non_negative("amount", amount),
    }
}

fn demote_defaults(discounts: &mut Collection<DiscountRecord>, now: Timestamp) {
    for discount in discounts.iter_mut().filter(|discount| discount.is_default) {
        discount.is_default = false;
        discount.updated_at = now;
    }
}

#[async_trait]
impl DiscountsService for InMemoryDiscountsService {
    async fn list_discounts(&self) -> Vec<DiscountRecord> {
        self.store.read().await.to_vec()
    }

    async fn get_discount(&self, discount: DiscountUuid) -> Result<DiscountRecord, RegistryError> {
        self.store
            .read()
            .await
            .get(discount)
            .cloned()
            .ok_or(RegistryError::NotFound)
    }

    async fn create_discount(
        &self,
        discount: NewDiscount,
    ) -> Result<DiscountRecord, RegistryError> {
        let name = validation::required("name", &discount.name)?;

        validate_value(discount.value)?;

        let mut tx = self.store.begin().await;
        let now = Timestamp::now();

        if discount.is_default {
            demote_defaults(&mut tx, now);
        }

        let record = DiscountRecord {
            uuid: DiscountUuid::new(),
            name,
            value: discount.value,
            is_default: discount.is_default,
            created_at: now,
            updated_at: now,
        };

        tx.push(record.clone());

        debug!(discount_uuid = %record.uuid, kind = ?record.value.kind(), "created discount");

        Ok(record)
    }

    async fn update_discount(
        &self,
        discount: DiscountUuid,
        update: DiscountUpdate,
    ) -> Result<DiscountRecord, RegistryError> {
        let mut tx = self.store.begin().await;

        if !tx.contains(discount) {
            return Err(RegistryError::NotFound);
        }

        let name = update
            .name
            .as_deref()
            .map(|name| validation::required("name", name))
            .transpose()?;

        if let Some(value) = update.value {
            validate_value(value)?;
        }

        let now = Timestamp::now();

        if update.is_default == Some(true) {
            demote_defaults(&mut tx, now);
        }

        let record = tx.get_mut(discount).ok_or(RegistryError::NotFound)?;

        if let Some(name) = name {
            record.name = name;
        }

        if let Some(value) = update.value {
            record.value = value;
        }

        if let Some(is_default) = update.is_default {
            record.is_default = is_default;
        }

        record.updated_at = now;

        debug!(discount_uuid = %discount, "updated discount");

        Ok(record.clone())
    }

    async fn delete_discount(&self, discount: DiscountUuid) -> Result<(), RegistryError> {
        self.store
            .begin()
            .await
            .remove(discount)
            .ok_or(RegistryError::NotFound)?;

        debug!(discount_uuid = %discount, "deleted discount");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait DiscountsService: Send + Sync {
    /// Retrieves all discounts in creation order.
    async fn list_discounts(&self) -> Vec<DiscountRecord>;

    /// Retrieves a single discount.
    async fn get_discount(&self, discount: DiscountUuid) -> Result<DiscountRecord, RegistryError>;

    /// Creates a discount. A new default demotes the previous one.
    async fn create_discount(&self, discount: NewDiscount)
    -> Result<DiscountRecord, RegistryError>;

    /// Applies a partial update; switching between percentage and fixed
    /// amount replaces the value entirely.
    async fn update_discount(
        &self,
        discount: DiscountUuid,
        update: DiscountUpdate,
    ) -> Result<DiscountRecord, RegistryError>;

    /// Deletes a discount.
    async fn delete_discount(&self, discount: DiscountUuid) -> Result<(), RegistryError>;
}
