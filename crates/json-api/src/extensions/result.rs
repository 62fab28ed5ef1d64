//! Result helper extensions for HTTP handlers.

use std::fmt::Display;

use salvo::prelude::StatusError;
use tracing::error;

use bizdesk_app::domain::RegistryError;

use crate::errors::into_status_error;

/// Map any error to a logged internal server error.
pub(crate) trait ResultExt<T> {
    fn or_500(self, context: &str) -> Result<T, StatusError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_500(self, context: &str) -> Result<T, StatusError> {
        self.map_err(|error| {
            error!("{context}: {error}");

            StatusError::internal_server_error()
        })
    }
}

/// Map a registry rejection to the matching client error.
pub(crate) trait RegistryResultExt<T> {
    fn or_status(self) -> Result<T, StatusError>;
}

impl<T> RegistryResultExt<T> for Result<T, RegistryError> {
    fn or_status(self) -> Result<T, StatusError> {
        self.map_err(into_status_error)
    }
}
