//! Registry errors.

use thiserror::Error;
use uuid::Uuid;

use crate::domain::users::CredentialError;

/// Broad classification of a [`RegistryError`], used by callers to decide how
/// to present a rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required field is missing or malformed.
    Validation,

    /// A uniqueness constraint would be violated.
    Duplicate,

    /// A singleton flag is already held by another record.
    ExclusivityConflict,

    /// The referenced record does not exist.
    NotFound,

    /// A delete would orphan dependents or remove a protected record.
    StructuralConflict,

    /// A credential check failed.
    Authentication,

    /// The registry itself failed; the caller did nothing wrong.
    Internal,
}

/// Reason a delete was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeleteRefusal {
    #[error("the main branch cannot be deleted")]
    MainBranch,

    #[error("the base currency cannot be deleted")]
    BaseCurrency,

    #[error("category still has sub-categories")]
    CategoryHasChildren,

    #[error("account balance is not zero")]
    AccountHasBalance,

    #[error("account still has sub-accounts")]
    AccountHasChildren,
}

/// Rejection of a registry operation. No variant implies any mutation took
/// place.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A required field was absent or blank.
    #[error("{field} is required")]
    MissingField { field: &'static str },

    /// A field failed its format constraint.
    #[error("{field} is invalid: {reason}")]
    InvalidField {
        field: &'static str,
        reason: &'static str,
    },

    /// Another record already uses this value.
    #[error("{field} '{value}' is already in use")]
    Duplicate { field: &'static str, value: String },

    /// Another record already holds the singleton flag.
    #[error("another record is already marked as {flag}; clear it first")]
    ExclusivityConflict { flag: &'static str, holder: Uuid },

    /// The record was not found.
    #[error("record not found")]
    NotFound,

    /// The delete was refused.
    #[error("{0}")]
    StructuralConflict(DeleteRefusal),

    /// Username/password pair did not match an active user.
    #[error("invalid username or password")]
    InvalidCredentials,

    /// Hashing or checking a password failed.
    #[error(transparent)]
    Credential(#[from] CredentialError),
}

impl RegistryError {
    pub(crate) fn duplicate(field: &'static str, value: impl Into<String>) -> Self {
        Self::Duplicate {
            field,
            value: value.into(),
        }
    }

    pub(crate) fn exclusivity(flag: &'static str, holder: impl Into<Uuid>) -> Self {
        Self::ExclusivityConflict {
            flag,
            holder: holder.into(),
        }
    }

    /// Classifies the rejection.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingField { .. } | Self::InvalidField { .. } => ErrorKind::Validation,
            Self::Duplicate { .. } => ErrorKind::Duplicate,
            Self::ExclusivityConflict { .. } => ErrorKind::ExclusivityConflict,
            Self::NotFound => ErrorKind::NotFound,
            Self::StructuralConflict(_) => ErrorKind::StructuralConflict,
            Self::InvalidCredentials => ErrorKind::Authentication,
            Self::Credential(_) => ErrorKind::Internal,
        }
    }
}

impl From<DeleteRefusal> for RegistryError {
    fn from(refusal: DeleteRefusal) -> Self {
        Self::StructuralConflict(refusal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_message_names_the_field() {
        let error = RegistryError::duplicate("email", "a@example.com");

        assert_eq!(error.to_string(), "email 'a@example.com' is already in use");
        assert_eq!(error.kind(), ErrorKind::Duplicate);
    }

    #[test]
    fn structural_conflict_carries_refusal_message() {
        let error = RegistryError::from(DeleteRefusal::BaseCurrency);

        assert_eq!(error.to_string(), "the base currency cannot be deleted");
        assert_eq!(error.kind(), ErrorKind::StructuralConflict);
    }
}
