//! Account Records

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{store::Record, uuids::TypedUuid};

/// Account UUID
pub type AccountUuid = TypedUuid<AccountRecord>;

/// Ledger classification of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Asset,
    Liability,
    Equity,
    Revenue,
    Expense,
}

/// Account Record
#[derive(Debug, Clone, PartialEq)]
pub struct AccountRecord {
    pub uuid: AccountUuid,
    /// Unique ledger code such as `1-1100`.
    pub code: String,
    pub name: String,
    pub account_type: AccountType,
    pub parent: Option<AccountUuid>,
    pub balance: Decimal,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Record for AccountRecord {
    fn uuid(&self) -> AccountUuid {
        self.uuid
    }
}
