//! Registry error responses

use salvo::http::StatusError;
use tracing::{debug, error};

use bizdesk_app::domain::{ErrorKind, RegistryError};

/// Translate a registry rejection into an HTTP error whose brief is the
/// human-readable message shown by the settings page. Internal failures are
/// logged and answered with a bare 500.
pub(crate) fn into_status_error(error: RegistryError) -> StatusError {
    let brief = error.to_string();

    let status = match error.kind() {
        ErrorKind::Validation => StatusError::bad_request(),
        ErrorKind::Duplicate | ErrorKind::ExclusivityConflict | ErrorKind::StructuralConflict => {
            StatusError::conflict()
        }
        ErrorKind::NotFound => StatusError::not_found(),
        ErrorKind::Authentication => StatusError::unauthorized(),
        ErrorKind::Internal => {
            error!("registry operation failed: {brief}");

            return StatusError::internal_server_error();
        }
    };

    debug!(kind = ?error.kind(), "registry rejected request: {brief}");

    status.brief(brief)
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use uuid::Uuid;

    use bizdesk_app::domain::DeleteRefusal;

    use super::*;

    fn duplicate_code() -> RegistryError {
        RegistryError::Duplicate {
            field: "code",
            value: "IDR".to_string(),
        }
    }

    #[test]
    fn each_kind_maps_to_its_status() {
        let cases = [
            (
                RegistryError::MissingField { field: "name" },
                StatusCode::BAD_REQUEST,
            ),
            (duplicate_code(), StatusCode::CONFLICT),
            (
                RegistryError::ExclusivityConflict {
                    flag: "isMain",
                    holder: Uuid::nil(),
                },
                StatusCode::CONFLICT,
            ),
            (
                RegistryError::from(DeleteRefusal::MainBranch),
                StatusCode::CONFLICT,
            ),
            (RegistryError::NotFound, StatusCode::NOT_FOUND),
            (RegistryError::InvalidCredentials, StatusCode::UNAUTHORIZED),
        ];

        for (error, expected) in cases {
            let label = format!("{error:?}");

            assert_eq!(into_status_error(error).code, expected, "for {label}");
        }
    }

    #[test]
    fn brief_carries_the_message() {
        let status = into_status_error(duplicate_code());

        assert_eq!(status.brief, "code 'IDR' is already in use");
    }
}
