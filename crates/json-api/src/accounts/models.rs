//! Account Models

use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bizdesk_app::domain::accounts::{
    data::{AccountUpdate, NewAccount},
    records::{AccountRecord, AccountType as Ledger},
};

/// Ledger classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub(crate) enum AccountType {
    Asset,
    Liability,
    Equity,
    Revenue,
    Expense,
}

impl From<Ledger> for AccountType {
    fn from(ledger: Ledger) -> Self {
        match ledger {
            Ledger::Asset => Self::Asset,
            Ledger::Liability => Self::Liability,
            Ledger::Equity => Self::Equity,
            Ledger::Revenue => Self::Revenue,
            Ledger::Expense => Self::Expense,
        }
    }
}

impl From<AccountType> for Ledger {
    fn from(account_type: AccountType) -> Self {
        match account_type {
            AccountType::Asset => Self::Asset,
            AccountType::Liability => Self::Liability,
            AccountType::Equity => Self::Equity,
            AccountType::Revenue => Self::Revenue,
            AccountType::Expense => Self::Expense,
        }
    }
}

/// Account Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AccountResponse {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub account_type: AccountType,
    pub parent_account_id: Option<Uuid>,
    #[salvo(schema(value_type = f64))]
    pub balance: Decimal,
    pub created_at: String,
    pub updated_at: String,
}

impl From<AccountRecord> for AccountResponse {
    fn from(account: AccountRecord) -> Self {
        Self {
            id: account.uuid.into(),
            code: account.code,
            name: account.name,
            account_type: account.account_type.into(),
            parent_account_id: account.parent.map(Into::into),
            balance: account.balance,
            created_at: account.created_at.to_string(),
            updated_at: account.updated_at.to_string(),
        }
    }
}

/// Create Account Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateAccountRequest {
    pub code: String,
    pub name: String,
    pub account_type: AccountType,
    #[serde(default)]
    pub parent_account_id: Option<Uuid>,
    #[serde(default)]
    #[salvo(schema(value_type = f64))]
    pub opening_balance: Decimal,
}

impl From<CreateAccountRequest> for NewAccount {
    fn from(request: CreateAccountRequest) -> Self {
        NewAccount {
            code: request.code,
            name: request.name,
            account_type: request.account_type.into(),
            parent: request.parent_account_id.map(Into::into),
            opening_balance: request.opening_balance,
        }
    }
}

/// Update Account Request
///
/// `parentAccountId: null` moves the account to the top level.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateAccountRequest {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub account_type: Option<AccountType>,
    #[serde(default, deserialize_with = "crate::nullable::deserialize")]
    #[salvo(schema(value_type = Option<Uuid>))]
    pub parent_account_id: Option<Option<Uuid>>,
    #[serde(default)]
    #[salvo(schema(value_type = Option<f64>))]
    pub balance: Option<Decimal>,
}

impl From<UpdateAccountRequest> for AccountUpdate {
    fn from(request: UpdateAccountRequest) -> Self {
        AccountUpdate {
            code: request.code,
            name: request.name,
            account_type: request.account_type.map(Into::into),
            parent: request.parent_account_id.map(|parent| parent.map(Into::into)),
            balance: request.balance,
        }
    }
}
