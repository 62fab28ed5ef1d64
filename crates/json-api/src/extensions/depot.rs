//! Depot helper extensions.

use std::sync::Arc;

use salvo::prelude::{Depot, StatusError};
use tracing::error;

use crate::state::State;

/// Helpers for reading injected state out of the depot.
pub(crate) trait DepotExt {
    /// The shared server state, or a 500 when the router forgot to inject it.
    fn state_or_500(&self) -> Result<&Arc<State>, StatusError>;
}

impl DepotExt for Depot {
    fn state_or_500(&self) -> Result<&Arc<State>, StatusError> {
        self.obtain::<Arc<State>>().map_err(|_ignored| {
            error!("server state missing from depot");

            StatusError::internal_server_error()
        })
    }
}
