//! Server configuration module

use clap::Parser;

use crate::config::{
    db::DatabaseConfig, observability::LoggingConfig, registry::RegistryConfig,
    server::ServerRuntimeConfig,
};

pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod registry;
pub(crate) mod server;

/// BizDesk JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "bizdesk-json", about = "BizDesk JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Product database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Master-data registry settings.
    #[command(flatten)]
    pub registry: RegistryConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}
