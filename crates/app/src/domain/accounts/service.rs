//! Chart of accounts service.
//!
//! Accounts may only be removed once they are empty: a nonzero balance or any
//! sub-account blocks the delete.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::debug;

use crate::{
    domain::{
        accounts::{
            data::{AccountUpdate, NewAccount},
            records::{AccountRecord, AccountUuid},
        },
        errors::{DeleteRefusal, RegistryError},
        validation,
    },
    store::{Collection, Store},
};

const PARENT_FIELD: &str = "parentAccountId";

/// Chart of accounts kept in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAccountsService {
    store: Store<AccountRecord>,
}

impl InMemoryAccountsService {
    /// Serves the accounts held in `store`.
    #[must_use]
    pub fn new(store: Store<AccountRecord>) -> Self {
        Self { store }
    }
}

fn ensure_unique_code(
    accounts: &Collection<AccountRecord>,
    except: Option<AccountUuid>,
    code: &str,
) -> Result<(), RegistryError> {
    if accounts
        .find_other(except, |account| account.code == code)
        .is_some()
    {
        return Err(RegistryError::duplicate("code", code));
    }

    Ok(())
}

#[async_trait]
impl AccountsService for InMemoryAccountsService {
    async fn list_accounts(&self) -> Vec<AccountRecord> {
        self.store.read().await.to_vec()
    }

    async fn get_account(&self, account: AccountUuid) -> Result<AccountRecord, RegistryError> {
        self.store
            .read()
            .await
            .get(account)
            .cloned()
            .ok_or(RegistryError::NotFound)
    }

    async fn create_account(&self, account: NewAccount) -> Result<AccountRecord, RegistryError> {
        let code = validation::required("code", &account.code)?;
        let name = validation::required("name", &account.name)?;

        let mut tx = self.store.begin().await;

        if let Some(parent) = account.parent {
            validation::parent(PARENT_FIELD, &tx, None, parent, |a| a.parent)?;
        }

        ensure_unique_code(&tx, None, &code)?;

        let now = Timestamp::now();

        let record = AccountRecord {
            uuid: AccountUuid::new(),
            code,
            name,
            account_type: account.account_type,
            parent: account.parent,
            balance: account.opening_balance,
            created_at: now,
            updated_at: now,
        };

        tx.push(record.clone());

        debug!(account_uuid = %record.uuid, code = %record.code, "created account");

        Ok(record)
    }

    async fn update_account(
        &self,
        account: AccountUuid,
        update: AccountUpdate,
    ) -> Result<AccountRecord, RegistryError> {
        let mut tx = self.store.begin().await;

        if !tx.contains(account) {
            return Err(RegistryError::NotFound);
        }

        let code = update
            .code
            .as_deref()
            .map(|code| validation::required("code", code))
            .transpose()?;

        let name = update
            .name
            .as_deref()
            .map(|name| validation::required("name", name))
            .transpose()?;

        if let Some(Some(parent)) = update.parent {
            validation::parent(PARENT_FIELD, &tx, Some(account), parent, |a| a.parent)?;
        }

        if let Some(code) = &code {
            ensure_unique_code(&tx, Some(account), code)?;
        }

        let record = tx.get_mut(account).ok_or(RegistryError::NotFound)?;

        if let Some(code) = code {
            record.code = code;
        }

        if let Some(name) = name {
            record.name = name;
        }

        if let Some(account_type) = update.account_type {
            record.account_type = account_type;
        }

        if let Some(parent) = update.parent {
            record.parent = parent;
        }

        if let Some(balance) = update.balance {
            record.balance = balance;
        }

        record.updated_at = Timestamp::now();

        debug!(account_uuid = %account, "updated account");

        Ok(record.clone())
    }

    async fn delete_account(&self, account: AccountUuid) -> Result<(), RegistryError> {
        let mut tx = self.store.begin().await;

        let record = tx.get(account).ok_or(RegistryError::NotFound)?;

        if !record.balance.is_zero() {
            return Err(DeleteRefusal::AccountHasBalance.into());
        }

        if tx.iter().any(|a| a.parent == Some(account)) {
            return Err(DeleteRefusal::AccountHasChildren.into());
        }

        tx.remove(account);

        debug!(account_uuid = %account, "deleted account");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait AccountsService: Send + Sync {
    /// Retrieves the chart of accounts in creation order.
    async fn list_accounts(&self) -> Vec<AccountRecord>;

    /// Retrieves a single account.
    async fn get_account(&self, account: AccountUuid) -> Result<AccountRecord, RegistryError>;

    /// Creates an account with a unique code.
    async fn create_account(&self, account: NewAccount) -> Result<AccountRecord, RegistryError>;

    /// Applies a partial update.
    async fn update_account(
        &self,
        account: AccountUuid,
        update: AccountUpdate,
    ) -> Result<AccountRecord, RegistryError>;

    /// Deletes an account with a zero balance and no sub-accounts.
    async fn delete_account(&self, account: AccountUuid) -> Result<(), RegistryError>;
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::{
        domain::accounts::records::AccountType,
        test::{TestContext, helpers::new_account},
    };

    use super::*;

    #[tokio::test]
    async fn account_with_balance_cannot_be_deleted() -> TestResult {
        let ctx = TestContext::new();

        let mut cash = new_account("1-1100", "Cash", None);
        cash.opening_balance = Decimal::from(250_000);

        let cash = ctx.accounts.create_account(cash).await?;

        let result = ctx.accounts.delete_account(cash.uuid).await;

        assert!(
            matches!(
                result,
                Err(RegistryError::StructuralConflict(
                    DeleteRefusal::AccountHasBalance
                ))
            ),
            "expected StructuralConflict, got {result:?}"
        );

        ctx.accounts
            .update_account(
                cash.uuid,
                AccountUpdate {
                    balance: Some(Decimal::ZERO),
                    ..AccountUpdate::default()
                },
            )
            .await?;

        ctx.accounts.delete_account(cash.uuid).await?;

        Ok(())
    }

    #[tokio::test]
    async fn account_with_sub_accounts_cannot_be_deleted() -> TestResult {
        let ctx = TestContext::new();

        let assets = ctx
            .accounts
            .create_account(new_account("1-0000", "Assets", None))
            .await?;

        ctx.accounts
            .create_account(new_account("1-1100", "Cash", Some(assets.uuid)))
            .await?;

        let result = ctx.accounts.delete_account(assets.uuid).await;

        assert!(
            matches!(
                result,
                Err(RegistryError::StructuralConflict(
                    DeleteRefusal::AccountHasChildren
                ))
            ),
            "expected StructuralConflict, got {result:?}"
        );
        assert_eq!(ctx.accounts.list_accounts().await.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn duplicate_code_is_rejected() -> TestResult {
        let ctx = TestContext::new();

        ctx.accounts
            .create_account(new_account("1-1100", "Cash", None))
            .await?;

        let result = ctx
            .accounts
            .create_account(new_account("1-1100", "Petty Cash", None))
            .await;

        assert!(
            matches!(result, Err(RegistryError::Duplicate { field: "code", .. })),
            "expected Duplicate, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn update_changes_type_and_keeps_code() -> TestResult {
        let ctx = TestContext::new();

        let account = ctx
            .accounts
            .create_account(new_account("4-1000", "Sales", None))
            .await?;

        let updated = ctx
            .accounts
            .update_account(
                account.uuid,
                AccountUpdate {
                    account_type: Some(AccountType::Revenue),
                    ..AccountUpdate::default()
                },
            )
            .await?;

        assert_eq!(updated.account_type, AccountType::Revenue);
        assert_eq!(updated.code, "4-1000");

        Ok(())
    }
}
