//! Registry Config

use clap::{ArgAction, Args};

/// Master-data registry settings.
#[derive(Debug, Args)]
pub struct RegistryConfig {
    /// Populate the registry with demo master data on startup
    #[arg(
        long,
        env = "SEED_DEMO_DATA",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub seed_demo_data: bool,
}
