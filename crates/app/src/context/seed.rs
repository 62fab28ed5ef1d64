//! Demo master data loaded by [`AppContext::seeded`](super::AppContext::seeded).

use rust_decimal::Decimal;
use tracing::info;

use crate::{
    context::AppContext,
    domain::{
        accounts::{data::NewAccount, records::AccountType},
        branches::data::NewBranch,
        categories::data::NewCategory,
        currencies::data::NewCurrency,
        discounts::{data::NewDiscount, records::DiscountValue},
        errors::RegistryError,
        settings::data::GeneralSettingsUpdate,
        taxes::data::NewTax,
        units::data::NewUnit,
        users::{Password, data::NewUser, records::Role},
    },
};

pub(super) async fn populate(context: &AppContext) -> Result<(), RegistryError> {
    context
        .settings
        .update_general_settings(GeneralSettingsUpdate {
            company_name: Some("PT BizDesk Nusantara".to_string()),
            address: Some("Jl. Sudirman No. 1, Jakarta".to_string()),
            email: Some("admin@bizdesk.example".to_string()),
            ..GeneralSettingsUpdate::default()
        })
        .await?;

    context
        .users
        .create_user(NewUser {
            username: "admin".to_string(),
            full_name: "Administrator".to_string(),
            email: "admin@bizdesk.example".to_string(),
            role: Role::Admin,
            is_active: true,
            password: Some(Password::new("admin123")),
        })
        .await?;

    context
        .branches
        .create_branch(NewBranch {
            name: "Kantor Pusat".to_string(),
            address: "Jl. Sudirman No. 1, Jakarta".to_string(),
            phone: Some("021-555-0100".to_string()),
            is_main: true,
        })
        .await?;

    for (code, name, symbol, rate, is_base) in [
        ("IDR", "Rupiah", "Rp", Decimal::ONE, true),
        ("USD", "US Dollar", "$", Decimal::from(15_000), false),
    ] {
        context
            .currencies
            .create_currency(NewCurrency {
                code: code.to_string(),
                name: name.to_string(),
                symbol: symbol.to_string(),
                exchange_rate_to_base: rate,
                is_base_currency: is_base,
            })
            .await?;
    }

    for (name, rate, is_default) in [("PPN", 11, true), ("PPh 23", 2, false)] {
        context
            .taxes
            .create_tax(NewTax {
                name: name.to_string(),
                rate: Decimal::from(rate),
                is_default,
            })
            .await?;
    }

    context
        .discounts
        .create_discount(NewDiscount {
            name: "Member".to_string(),
            value: DiscountValue::Percentage(Decimal::from(5)),
            is_default: false,
        })
        .await?;

    for (name, symbol, is_base_unit) in [
        ("Pieces", "pcs", true),
        ("Box", "box", false),
        ("Kilogram", "kg", true),
    ] {
        context
            .units
            .create_unit(NewUnit {
                name: name.to_string(),
                symbol: symbol.to_string(),
                is_base_unit,
            })
            .await?;
    }

    let goods = context
        .categories
        .create_category(NewCategory {
            name: "Barang Dagangan".to_string(),
            parent: None,
        })
        .await?;

    for name in ["Makanan", "Minuman"] {
        context
            .categories
            .create_category(NewCategory {
                name: name.to_string(),
                parent: Some(goods.uuid),
            })
            .await?;
    }

    let assets = context
        .accounts
        .create_account(NewAccount {
            code: "1-0000".to_string(),
            name: "Aset".to_string(),
            account_type: AccountType::Asset,
            parent: None,
            opening_balance: Decimal::ZERO,
        })
        .await?;

    for (code, name) in [("1-1100", "Kas"), ("1-1200", "Bank")] {
        context
            .accounts
            .create_account(NewAccount {
                code: code.to_string(),
                name: name.to_string(),
                account_type: AccountType::Asset,
                parent: Some(assets.uuid),
                opening_balance: Decimal::ZERO,
            })
            .await?;
    }

    for (code, name, account_type) in [
        ("2-0000", "Kewajiban", AccountType::Liability),
        ("3-0000", "Ekuitas", AccountType::Equity),
        ("4-0000", "Pendapatan", AccountType::Revenue),
        ("5-0000", "Beban", AccountType::Expense),
    ] {
        context
            .accounts
            .create_account(NewAccount {
                code: code.to_string(),
                name: name.to_string(),
                account_type,
                parent: None,
                opening_balance: Decimal::ZERO,
            })
            .await?;
    }

    info!("seeded demo master data");

    Ok(())
}
