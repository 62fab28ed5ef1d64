//! Currencies service.
//!
//! Codes are stored upper-case and compared case-insensitively. Like the main
//! branch, the base currency flag is exclusive by rejection and the base
//! currency itself can never be deleted.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::debug;

use crate::{
    domain::{
        currencies::{
            data::{CurrencyUpdate, NewCurrency},
            records::{CurrencyRecord, CurrencyUuid},
        },
        errors::{DeleteRefusal, RegistryError},
        validation,
    },
    store::{Collection, Store},
};

const BASE_FLAG: &str = "isBaseCurrency";

/// Currencies kept in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCurrenciesService {
    store: Store<CurrencyRecord>,
}

impl InMemoryCurrenciesService {
    /// Serves the currencies held in `store`.
    #[must_use]
    pub fn new(store: Store<CurrencyRecord>) -> Self {
        Self { store }
    }
}

fn ensure_unique_code(
    currencies: &Collection<CurrencyRecord>,
    except: Option<CurrencyUuid>,
    code: &str,
) -> Result<(), RegistryError> {
    if currencies
        .find_other(except, |currency| currency.code.eq_ignore_ascii_case(code))
        .is_some()
    {
        return Err(RegistryError::duplicate("code", code));
    }

    Ok(())
}

fn ensure_no_other_base(
    currencies: &Collection<CurrencyRecord>,
    except: Option<CurrencyUuid>,
) -> Result<(), RegistryError> {
    match currencies.find_other(except, |currency| currency.is_base_currency) {
        Some(holder) => Err(RegistryError::exclusivity(BASE_FLAG, holder.uuid)),
        None => Ok(()),
    }
}

#[async_trait]
impl CurrenciesService for InMemoryCurrenciesService {
    async fn list_currencies(&self) -> Vec<CurrencyRecord> {
        self.store.read().await.to_vec()
    }

    async fn get_currency(&self, currency: CurrencyUuid) -> Result<CurrencyRecord, RegistryError> {
        self.store
            .read()
            .await
            .get(currency)
            .cloned()
            .ok_or(RegistryError::NotFound)
    }

    async fn create_currency(
        &self,
        currency: NewCurrency,
    ) -> Result<CurrencyRecord, RegistryError> {
        let code = validation::required("code", &currency.code)?;
        let name = validation::required("name", &currency.name)?;
        let symbol = validation::required("symbol", &currency.symbol)?;

        let code = validation::currency_code("code", &code)?;

        validation::non_negative("exchangeRateToBase", currency.exchange_rate_to_base)?;

        let mut tx = self.store.begin().await;

        ensure_unique_code(&tx, None, &code)?;

        if currency.is_base_currency {
            ensure_no_other_base(&tx, None)?;
        }

        let now = Timestamp::now();

        let record = CurrencyRecord {
            uuid: CurrencyUuid::new(),
            code,
            name,
            symbol,
            exchange_rate_to_base: currency.exchange_rate_to_base,
            is_base_currency: currency.is_base_currency,
            created_at: now,
            updated_at: now,
        };

        tx.push(record.clone());

        debug!(currency_uuid = %record.uuid, code = %record.code, "created currency");

        Ok(record)
    }

    async fn update_currency(
        &self,
        currency: CurrencyUuid,
        update: CurrencyUpdate,
    ) -> Result<CurrencyRecord, RegistryError> {
        let mut tx = self.store.begin().await;

        if !tx.contains(currency) {
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

        let symbol = update
            .symbol
            .as_deref()
            .map(|symbol| validation::required("symbol", symbol))
            .transpose()?;

        let code = code
            .map(|code| validation::currency_code("code", &code))
            .transpose()?;

        if let Some(rate) = update.exchange_rate_to_base {
            validation::non_negative("exchangeRateToBase", rate)?;
        }

        if let Some(code) = &code {
            ensure_unique_code(&tx, Some(currency), code)?;
        }

        if update.is_base_currency == Some(true) {
            ensure_no_other_base(&tx, Some(currency))?;
        }

        let record = tx.get_mut(currency).ok_or(RegistryError::NotFound)?;

        if let Some(code) = code {
            record.code = code;
        }

        if let Some(name) = name {
            record.name = name;
        }

        if let Some(symbol) = symbol {
            record.symbol = symbol;
        }

        if let Some(rate) = update.exchange_rate_to_base {
            record.exchange_rate_to_base = rate;
        }

        if let Some(is_base) = update.is_base_currency {
            record.is_base_currency = is_base;
        }

        record.updated_at = Timestamp::now();

        debug!(currency_uuid = %currency, code = %record.code, "updated currency");

        Ok(record.clone())
    }

    async fn delete_currency(&self, currency: CurrencyUuid) -> Result<(), RegistryError> {
        let mut tx = self.store.begin().await;

        let record = tx.get(currency).ok_or(RegistryError::NotFound)?;

        if record.is_base_currency {
            return Err(DeleteRefusal::BaseCurrency.into());
        }

        tx.remove(currency);

        debug!(currency_uuid = %currency, "deleted currency");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CurrenciesService: Send + Sync {
    /// Retrieves all currencies in creation order.
    async fn list_currencies(&self) -> Vec<CurrencyRecord>;

    /// Retrieves a single currency.
    async fn get_currency(&self, currency: CurrencyUuid) -> Result<CurrencyRecord, RegistryError>;

    /// Creates a currency with a unique code.
    async fn create_currency(&self, currency: NewCurrency)
    -> Result<CurrencyRecord, RegistryError>;

    /// Applies a partial update.
    async fn update_currency(
        &self,
        currency: CurrencyUuid,
        update: CurrencyUpdate,
    ) -> Result<CurrencyRecord, RegistryError>;

    /// Deletes a currency. The base currency cannot be deleted.
    async fn delete_currency(&self, currency: CurrencyUuid) -> Result<(), RegistryError>;
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::test::{TestContext, helpers::new_currency};

    use super::*;

    #[tokio::test]
    async fn code_is_stored_upper_case() -> TestResult {
        let ctx = TestContext::new();

        let currency = ctx
            .currencies
            .create_currency(new_currency("usd", false))
            .await?;

        assert_eq!(currency.code, "USD");

        Ok(())
    }

    #[tokio::test]
    async fn duplicate_code_is_rejected_case_insensitively() -> TestResult {
        let ctx = TestContext::new();

        ctx.currencies
            .create_currency(new_currency("usd", false))
            .await?;

        let result = ctx
            .currencies
            .create_currency(new_currency("USD", false))
            .await;

        assert!(
            matches!(result, Err(RegistryError::Duplicate { field: "code", .. })),
            "expected Duplicate code, got {result:?}"
        );
        assert_eq!(ctx.currencies.list_currencies().await.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn duplicate_code_is_reported_before_base_conflict() -> TestResult {
        let ctx = TestContext::new();

        ctx.currencies
            .create_currency(new_currency("IDR", true))
            .await?;

        let result = ctx
            .currencies
            .create_currency(new_currency("idr", true))
            .await;

        assert!(
            matches!(result, Err(RegistryError::Duplicate { .. })),
            "expected Duplicate, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn second_base_currency_is_rejected() -> TestResult {
        let ctx = TestContext::new();

        let base = ctx
            .currencies
            .create_currency(new_currency("IDR", true))
            .await?;

        let result = ctx
            .currencies
            .create_currency(new_currency("USD", true))
            .await;

        assert!(
            matches!(
                result,
                Err(RegistryError::ExclusivityConflict {
                    flag: "isBaseCurrency",
                    ..
                })
            ),
            "expected ExclusivityConflict, got {result:?}"
        );
        assert_eq!(ctx.currencies.list_currencies().await, vec![base]);

        Ok(())
    }

    #[tokio::test]
    async fn base_currency_cannot_be_deleted() -> TestResult {
        let ctx = TestContext::new();

        let base = ctx
            .currencies
            .create_currency(new_currency("IDR", true))
            .await?;

        ctx.currencies
            .create_currency(new_currency("USD", false))
            .await?;

        let result = ctx.currencies.delete_currency(base.uuid).await;

        assert!(
            matches!(
                result,
                Err(RegistryError::StructuralConflict(DeleteRefusal::BaseCurrency))
            ),
            "expected StructuralConflict, got {result:?}"
        );
        assert_eq!(ctx.currencies.list_currencies().await.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn update_code_to_existing_code_is_rejected() -> TestResult {
        let ctx = TestContext::new();

        ctx.currencies
            .create_currency(new_currency("USD", false))
            .await?;

        let eur = ctx
            .currencies
            .create_currency(new_currency("EUR", false))
            .await?;

        let result = ctx
            .currencies
            .update_currency(
                eur.uuid,
                CurrencyUpdate {
                    code: Some("usd".to_string()),
                    ..CurrencyUpdate::default()
                },
            )
            .await;

        assert!(
            matches!(result, Err(RegistryError::Duplicate { field: "code", .. })),
            "expected Duplicate code, got {result:?}"
        );
        assert_eq!(ctx.currencies.get_currency(eur.uuid).await?.code, "EUR");

        Ok(())
    }

    #[tokio::test]
    async fn update_rate_keeps_other_fields() -> TestResult {
        let ctx = TestContext::new();

        let usd = ctx
            .currencies
            .create_currency(new_currency("USD", false))
            .await?;

        let updated = ctx
            .currencies
            .update_currency(
                usd.uuid,
                CurrencyUpdate {
                    exchange_rate_to_base: Some(Decimal::from(16_250)),
                    ..CurrencyUpdate::default()
                },
            )
            .await?;

        assert_eq!(updated.exchange_rate_to_base, Decimal::from(16_250));
        assert_eq!(updated.code, "USD");
        assert_eq!(updated.symbol, usd.symbol);

        Ok(())
    }

    #[tokio::test]
    async fn negative_rate_is_rejected() {
        let ctx = TestContext::new();

        let mut currency = new_currency("USD", false);
        currency.exchange_rate_to_base = Decimal::NEGATIVE_ONE;

        let result = ctx.currencies.create_currency(currency).await;

        assert!(
            matches!(result, Err(RegistryError::InvalidField { field: "exchangeRateToBase", .. })),
            "expected InvalidField, got {result:?}"
        );
    }

    #[tokio::test]
    async fn malformed_code_is_rejected() {
        let ctx = TestContext::new();

        let result = ctx
            .currencies
            .create_currency(new_currency("DOLLAR", false))
            .await;

        assert!(
            matches!(result, Err(RegistryError::InvalidField { field: "code", .. })),
            "expected InvalidField, got {result:?}"
        );
    }
}
