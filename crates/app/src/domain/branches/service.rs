//! Branches service.
//!
//! At most one branch is the main branch. Marking a second one is rejected
//! rather than silently moving the flag: the caller must clear the current
//! main branch first.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::debug;

use crate::{
    domain::{
        branches::{
            data::{BranchUpdate, NewBranch},
            records::{BranchRecord, BranchUuid},
        },
        errors::{DeleteRefusal, RegistryError},
        validation,
    },
    store::{Collection, Store},
};

const MAIN_FLAG: &str = "isMain";

/// Company branches kept in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBranchesService {
    store: Store<BranchRecord>,
}

impl InMemoryBranchesService {
    /// Serves the branches held in `store`.
    #[must_use]
    pub fn new(store: Store<BranchRecord>) -> Self {
        Self { store }
    }
}

fn ensure_no_other_main(
    branches: &Collection<BranchRecord>,
    except: Option<BranchUuid>,
) -> Result<(), RegistryError> {
    match branches.find_other(except, |branch| branch.is_main) {
        Some(holder) => Err(RegistryError::exclusivity(MAIN_FLAG, holder.uuid)),
        None => Ok(()),
    }
}

#[async_trait]
impl BranchesService for InMemoryBranchesService {
    async fn list_branches(&self) -> Vec<BranchRecord> {
        self.store.read().await.to_vec()
    }

    async fn get_branch(&self, branch: BranchUuid) -> Result<BranchRecord, RegistryError> {
        self.store
            .read()
            .await
            .get(branch)
            .cloned()
            .ok_or(RegistryError::NotFound)
    }

    async fn create_branch(&self, branch: NewBranch) -> Result<BranchRecord, RegistryError> {
        let name = validation::required("name", &branch.name)?;
        let address = validation::required("address", &branch.address)?;

        let mut tx = self.store.begin().await;

        if branch.is_main {
            ensure_no_other_main(&tx, None)?;
        }

        let now = Timestamp::now();

        let record = BranchRecord {
            uuid: BranchUuid::new(),
            name,
            address,
            phone: validation::optional(branch.phone.as_deref()),
            is_main: branch.is_main,
            created_at: now,
            updated_at: now,
        };

        tx.push(record.clone());

        debug!(branch_uuid = %record.uuid, is_main = record.is_main, "created branch");

        Ok(record)
    }

    async fn update_branch(
        &self,
        branch: BranchUuid,
        update: BranchUpdate,
    ) -> Result<BranchRecord, RegistryError> {
        let mut tx = self.store.begin().await;

        if !tx.contains(branch) {
            return Err(RegistryError::NotFound);
        }

        let name = update
            .name
            .as_deref()
            .map(|name| validation::required("name", name))
            .transpose()?;

        let address = update
            .address
            .as_deref()
            .map(|address| validation::required("address", address))
            .transpose()?;

        if update.is_main == Some(true) {
            ensure_no_other_main(&tx, Some(branch))?;
        }

        let record = tx.get_mut(branch).ok_or(RegistryError::NotFound)?;

        if let Some(name) = name {
            record.name = name;
        }

        if let Some(address) = address {
            record.address = address;
        }

        if let Some(phone) = update.phone.as_deref() {
            record.phone = validation::optional(Some(phone));
        }

        if let Some(is_main) = update.is_main {
            record.is_main = is_main;
        }

        record.updated_at = Timestamp::now();

        debug!(branch_uuid = %branch, is_main = record.is_main, "updated branch");

        Ok(record.clone())
    }

    async fn delete_branch(&self, branch: BranchUuid) -> Result<(), RegistryError> {
        let mut tx = self.store.begin().await;

        let record = tx.get(branch).ok_or(RegistryError::NotFound)?;

        if record.is_main {
            return Err(DeleteRefusal::MainBranch.into());
        }

        tx.remove(branch);

        debug!(branch_uuid = %branch, "deleted branch");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait BranchesService: Send + Sync {
    /// Retrieves all branches in creation order.
    async fn list_branches(&self) -> Vec<BranchRecord>;

    /// Retrieves a single branch.
    async fn get_branch(&self, branch: BranchUuid) -> Result<BranchRecord, RegistryError>;

    /// Creates a branch. Fails if it is marked main while another branch is.
    async fn create_branch(&self, branch: NewBranch) -> Result<BranchRecord, RegistryError>;

    /// Applies a partial update.
    async fn update_branch(
        &self,
        branch: BranchUuid,
        update: BranchUpdate,
    ) -> Result<BranchRecord, RegistryError>;

    /// Deletes a branch. The main branch cannot be deleted.
    async fn delete_branch(&self, branch: BranchUuid) -> Result<(), RegistryError>;
}
