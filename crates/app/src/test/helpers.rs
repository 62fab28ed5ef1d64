//! Test Helpers

use rust_decimal::Decimal;

use crate::domain::{
    accounts::{
        data::NewAccount,
        records::{AccountType, AccountUuid},
    },
    branches::data::NewBranch,
    categories::{data::NewCategory, records::CategoryUuid},
    currencies::data::NewCurrency,
    taxes::data::NewTax,
    users::{Password, data::NewUser, records::Role},
};

pub(crate) fn new_user(username: &str, email: &str, password: Option<&str>) -> NewUser {
    NewUser {
        username: username.to_string(),
        full_name: format!("User {username}"),
        email: email.to_string(),
        role: Role::Staff,
        is_active: true,
        password: password.map(Password::new),
    }
}

pub(crate) fn new_branch(name: &str, is_main: bool) -> NewBranch {
    NewBranch {
        name: name.to_string(),
        address: format!("Jl. {name} No. 1"),
        phone: None,
        is_main,
    }
}

/// Non-base currencies get a rate of 15,000 per base unit.
pub(crate) fn new_currency(code: &str, is_base_currency: bool) -> NewCurrency {
    NewCurrency {
        code: code.to_string(),
        name: format!("{code} currency"),
        symbol: code.to_string(),
        exchange_rate_to_base: if is_base_currency {
            Decimal::ONE
        } else {
            Decimal::from(15_000)
        },
        is_base_currency,
    }
}

pub(crate) fn new_tax(name: &str, rate: i64, is_default: bool) -> NewTax {
    NewTax {
        name: name.to_string(),
        rate: Decimal::from(rate),
        is_default,
    }
}

pub(crate) fn new_category(name: &str, parent: Option<CategoryUuid>) -> NewCategory {
    NewCategory {
        name: name.to_string(),
        parent,
    }
}

pub(crate) fn new_account(code: &str, name: &str, parent: Option<AccountUuid>) -> NewAccount {
    NewAccount {
        code: code.to_string(),
        name: name.to_string(),
        account_type: AccountType::Asset,
        parent,
        opening_balance: Decimal::ZERO,
    }
}
