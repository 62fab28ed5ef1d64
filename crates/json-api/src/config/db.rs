//! Database Config

use clap::Args;

/// Product database settings.
///
/// The database is optional. Without a server the product lookup answers
/// from its placeholder list only.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// Database server host, optionally with `:port`
    #[arg(long = "db-server", env = "DB_SERVER")]
    pub server: Option<String>,

    /// Database name
    #[arg(long = "db-database", env = "DB_DATABASE", default_value = "bizdesk")]
    pub database: String,

    /// Database user
    #[arg(long = "db-user", env = "DB_USER", default_value = "bizdesk")]
    pub user: String,

    /// Database password
    #[arg(
        long = "db-password",
        env = "DB_PASSWORD",
        default_value = "",
        hide_env_values = true
    )]
    pub password: String,

    /// Require an encrypted connection
    #[arg(long = "db-encrypt", env = "DB_ENCRYPT", default_value_t = false)]
    pub encrypt: bool,

    /// Accept the server certificate without verifying it
    #[arg(
        long = "db-trust-server-certificate",
        env = "DB_TRUST_SERVER_CERTIFICATE",
        default_value_t = false
    )]
    pub trust_server_certificate: bool,

    /// How long a lookup waits for a connection before it falls back to the
    /// placeholder products, in milliseconds
    #[arg(
        long = "db-acquire-timeout-ms",
        env = "DB_ACQUIRE_TIMEOUT_MS",
        default_value_t = 2_000
    )]
    pub acquire_timeout_ms: u64,
}
