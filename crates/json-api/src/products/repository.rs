//! Products Repository

use std::{num::ParseIntError, time::Duration};

use async_trait::async_trait;
use mockall::automock;
use sqlx::{
    Error, FromRow, PgPool, Postgres, Row,
    postgres::{PgConnectOptions, PgPoolOptions, PgRow, PgSslMode},
    query_as,
};
use thiserror::Error;
use tracing::info;

use crate::{config::db::DatabaseConfig, products::models::Product};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");

const MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Error)]
pub(crate) enum ProductsLookupError {
    #[error("no product database is configured")]
    NotConfigured,

    #[error("invalid database port: {0}")]
    InvalidPort(#[from] ParseIntError),

    #[error("storage error")]
    Sql(#[from] Error),
}

#[derive(Debug, Clone)]
pub(crate) struct PgProductsRepository {
    pool: PgPool,
}

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Build a lazily connecting repository. Returns `None` when no database
    /// server is configured; nothing is dialled until the first lookup.
    pub(crate) fn from_config(
        config: &DatabaseConfig,
    ) -> Result<Option<Self>, ProductsLookupError> {
        let Some(server) = config.server.as_deref() else {
            return Ok(None);
        };

        let mut options = PgConnectOptions::new()
            .database(&config.database)
            .username(&config.user)
            .password(&config.password)
            .ssl_mode(ssl_mode(config.encrypt, config.trust_server_certificate));

        options = match server.split_once(':') {
            Some((host, port)) => options.host(host).port(port.parse()?),
            None => options.host(server),
        };

        info!(server, database = %config.database, "product lookup database configured");

        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .acquire_timeout(Duration::from_millis(config.acquire_timeout_ms))
            .connect_lazy_with(options);

        Ok(Some(Self::new(pool)))
    }
}

fn ssl_mode(encrypt: bool, trust_server_certificate: bool) -> PgSslMode {
    match (encrypt, trust_server_certificate) {
        (false, _) => PgSslMode::Prefer,
        (true, true) => PgSslMode::Require,
        (true, false) => PgSslMode::VerifyFull,
    }
}

impl<'r> FromRow<'r, PgRow> for Product {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            product_id: row.try_get("ProductID")?,
            product_name: row.try_get("ProductName")?,
            unit_price: row.try_get("UnitPrice")?,
        })
    }
}

#[async_trait]
impl ProductsRepository for PgProductsRepository {
    async fn list_products(&self) -> Result<Vec<Product>, ProductsLookupError> {
        query_as::<Postgres, Product>(LIST_PRODUCTS_SQL)
            .fetch_all(&self.pool)
            .await
            .map_err(Into::into)
    }
}

/// Stand-in used when no database is configured.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct UnconfiguredProductsRepository;

#[async_trait]
impl ProductsRepository for UnconfiguredProductsRepository {
    async fn list_products(&self) -> Result<Vec<Product>, ProductsLookupError> {
        Err(ProductsLookupError::NotConfigured)
    }
}

#[automock]
#[async_trait]
pub(crate) trait ProductsRepository: Send + Sync {
    /// List every product in the product table.
    async fn list_products(&self) -> Result<Vec<Product>, ProductsLookupError>;
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use testresult::TestResult;

    use super::*;

    fn config(server: Option<&str>) -> DatabaseConfig {
        DatabaseConfig {
            server: server.map(ToOwned::to_owned),
            database: "bizdesk".to_string(),
            user: "bizdesk".to_string(),
            password: String::new(),
            encrypt: false,
            trust_server_certificate: false,
            acquire_timeout_ms: 200,
        }
    }

    #[test]
    fn ssl_mode_follows_encrypt_and_trust_flags() {
        assert!(matches!(ssl_mode(false, true), PgSslMode::Prefer));
        assert!(matches!(ssl_mode(true, true), PgSslMode::Require));
        assert!(matches!(ssl_mode(true, false), PgSslMode::VerifyFull));
    }

    #[test]
    fn missing_server_disables_the_repository() -> TestResult {
        assert!(PgProductsRepository::from_config(&config(None))?.is_none());

        Ok(())
    }

    #[test]
    fn malformed_port_is_rejected() {
        let result = PgProductsRepository::from_config(&config(Some("db:not-a-port")));

        assert!(
            matches!(result, Err(ProductsLookupError::InvalidPort(_))),
            "expected InvalidPort, got {result:?}"
        );
    }

    #[tokio::test]
    async fn unreachable_server_fails_within_the_acquire_timeout() -> TestResult {
        let repository = PgProductsRepository::from_config(&config(Some("127.0.0.1:1")))?
            .ok_or("a configured server should yield a repository")?;

        let started = Instant::now();
        let result = repository.list_products().await;
        let elapsed = started.elapsed();

        assert!(result.is_err(), "nothing listens on port 1, got {result:?}");
        assert!(
            elapsed < Duration::from_secs(5),
            "lookup should give up after the acquire timeout, took {elapsed:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn unconfigured_repository_reports_not_configured() {
        let result = UnconfiguredProductsRepository.list_products().await;

        assert!(
            matches!(result, Err(ProductsLookupError::NotConfigured)),
            "expected NotConfigured, got {result:?}"
        );
    }
}
