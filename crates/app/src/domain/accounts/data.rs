//! Account Data

use rust_decimal::Decimal;

use crate::domain::accounts::records::{AccountType, AccountUuid};

/// New Account Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewAccount {
    pub code: String,
    pub name: String,
    pub account_type: AccountType,
    pub parent: Option<AccountUuid>,
    pub opening_balance: Decimal,
}

/// Account Update Data
///
/// `parent: Some(None)` moves the account to the top level.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountUpdate {
    pub code: Option<String>,
    pub name: Option<String>,
    pub account_type: Option<AccountType>,
    pub parent: Option<Option<AccountUuid>>,
    pub balance: Option<Decimal>,
}
