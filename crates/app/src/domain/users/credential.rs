//! Password handling.
//!
//! Passwords are never stored. A user keeps the bcrypt hash of the password;
//! the plaintext is wiped once it has been hashed or compared. Hashing runs on
//! the blocking pool so it does not stall the runtime.

use std::fmt;

use bcrypt::BcryptError;
use thiserror::Error;
use tokio::task::{self, JoinError};
use zeroize::Zeroizing;

const BCRYPT_COST: u32 = 10;

/// Failure while hashing or checking a password.
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("password hashing failed: {0}")]
    Bcrypt(#[from] BcryptError),

    #[error("password hashing task did not complete: {0}")]
    Task(#[from] JoinError),
}

/// Plaintext password supplied by a caller. Wiped on drop and never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(Zeroizing<String>);

impl Password {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(Zeroizing::new(value.into()))
    }

    /// True when nothing but whitespace was supplied, which update treats as
    /// "keep the current password".
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

impl From<&str> for Password {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Password {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Bcrypt hash stored in place of a password.
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct Credential {
    hash: String,
}

impl Credential {
    pub(crate) async fn derive(password: Password) -> Result<Self, CredentialError> {
        let hash = task::spawn_blocking(move || bcrypt::hash(password.expose(), BCRYPT_COST))
            .await??;

        Ok(Self { hash })
    }

    pub(crate) async fn verify(&self, password: Password) -> Result<bool, CredentialError> {
        let hash = self.hash.clone();

        let matches =
            task::spawn_blocking(move || bcrypt::verify(password.expose(), &hash)).await??;

        Ok(matches)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::domain::{ErrorKind, RegistryError};

    use super::*;

    #[tokio::test]
    async fn verifies_only_the_original_password() -> TestResult {
        let credential = Credential::derive(Password::new("s3cret!")).await?;

        assert!(credential.verify(Password::new("s3cret!")).await?);
        assert!(!credential.verify(Password::new("s3cret")).await?);

        Ok(())
    }

    #[tokio::test]
    async fn stores_a_bcrypt_hash_not_the_password() -> TestResult {
        let credential = Credential::derive(Password::new("s3cret!")).await?;

        assert!(
            credential.hash.starts_with("$2b$10$"),
            "expected a cost-10 bcrypt hash, got {}",
            credential.hash
        );
        assert!(!credential.hash.contains("s3cret!"));

        Ok(())
    }

    #[tokio::test]
    async fn same_password_gets_a_fresh_salt() -> TestResult {
        let first = Credential::derive(Password::new("s3cret!")).await?;
        let second = Credential::derive(Password::new("s3cret!")).await?;

        assert_ne!(first, second);

        Ok(())
    }

    #[tokio::test]
    async fn debug_output_is_redacted() -> TestResult {
        let password = Password::new("hunter2");

        assert_eq!(format!("{password:?}"), "Password(***)");
        assert_eq!(
            format!("{:?}", Credential::derive(password).await?),
            "Credential(***)"
        );

        Ok(())
    }

    #[tokio::test]
    async fn malformed_hash_is_an_internal_failure() {
        let credential = Credential {
            hash: "not-a-bcrypt-hash".to_string(),
        };

        let result = credential.verify(Password::new("s3cret!")).await;

        assert!(
            matches!(result, Err(CredentialError::Bcrypt(_))),
            "expected a bcrypt error, got {result:?}"
        );

        if let Err(error) = result {
            assert_eq!(RegistryError::from(error).kind(), ErrorKind::Internal);
        }
    }

    #[test]
    fn whitespace_only_password_is_blank() {
        assert!(Password::new("   ").is_blank());
        assert!(!Password::new(" x ").is_blank());
    }
}
