//! Product categories service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::debug;

use crate::{
    domain::{
        categories::{
            data::{CategoryUpdate, NewCategory},
            records::{CategoryRecord, CategoryUuid},
        },
        errors::{DeleteRefusal, RegistryError},
        validation,
    },
    store::Store,
};

const PARENT_FIELD: &str = "parentCategoryId";

/// Product category forest kept in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCategoriesService {
    store: Store<CategoryRecord>,
}

impl InMemoryCategoriesService {
    /// Serves the categories held in `store`.
    #[must_use]
    pub fn new(store: Store<CategoryRecord>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CategoriesService for InMemoryCategoriesService {
    async fn list_categories(&self) -> Vec<CategoryRecord> {
        self.store.read().await.to_vec()
    }

    async fn get_category(&self, category: CategoryUuid) -> Result<CategoryRecord, RegistryError> {
        self.store
            .read()
            .await
            .get(category)
            .cloned()
            .ok_or(RegistryError::NotFound)
    }

    async fn create_category(
        &self,
        category: NewCategory,
    ) -> Result<CategoryRecord, RegistryError> {
        let name = validation::required("name", &category.name)?;

        let mut tx = self.store.begin().await;

        if let Some(parent) = category.parent {
            validation::parent(PARENT_FIELD, &tx, None, parent, |c| c.parent)?;
        }

        let now = Timestamp::now();

        let record = CategoryRecord {
            uuid: CategoryUuid::new(),
            name,
            parent: category.parent,
            created_at: now,
            updated_at: now,
        };

        tx.push(record.clone());

        debug!(category_uuid = %record.uuid, "created category");

        Ok(record)
    }

    async fn update_category(
        &self,
        category: CategoryUuid,
        update: CategoryUpdate,
    ) -> Result<CategoryRecord, RegistryError> {
        let mut tx = self.store.begin().await;

        if !tx.contains(category) {
            return Err(RegistryError::NotFound);
        }

        let name = update
            .name
            .as_deref()
            .map(|name| validation::required("name", name))
            .transpose()?;

        if let Some(Some(parent)) = update.parent {
            validation::parent(PARENT_FIELD, &tx, Some(category), parent, |c| c.parent)?;
        }

        let record = tx.get_mut(category).ok_or(RegistryError::NotFound)?;

        if let Some(name) = name {
            record.name = name;
        }

        if let Some(parent) = update.parent {
            record.parent = parent;
        }

        record.updated_at = Timestamp::now();

        debug!(category_uuid = %category, "updated category");

        Ok(record.clone())
    }

    async fn delete_category(&self, category: CategoryUuid) -> Result<(), RegistryError> {
        let mut tx = self.store.begin().await;

        if !tx.contains(category) {
            return Err(RegistryError::NotFound);
        }

        if tx.iter().any(|c| c.parent == Some(category)) {
            return Err(DeleteRefusal::CategoryHasChildren.into());
        }

        tx.remove(category);

        debug!(category_uuid = %category, "deleted category");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CategoriesService: Send + Sync {
    /// Retrieves all categories in creation order.
    async fn list_categories(&self) -> Vec<CategoryRecord>;

    /// Retrieves a single category.
    async fn get_category(&self, category: CategoryUuid) -> Result<CategoryRecord, RegistryError>;

    /// Creates a category under an existing parent, or at the top level.
    async fn create_category(&self, category: NewCategory)
    -> Result<CategoryRecord, RegistryError>;

    /// Applies a partial update, refusing to make a category its own
    /// ancestor.
    async fn update_category(
        &self,
        category: CategoryUuid,
        update: CategoryUpdate,
    ) -> Result<CategoryRecord, RegistryError>;

    /// Deletes a category that has no sub-categories.
    async fn delete_category(&self, category: CategoryUuid) -> Result<(), RegistryError>;
}
