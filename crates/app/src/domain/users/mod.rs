//! Users

mod credential;
pub mod data;
pub mod records;
pub mod service;

pub use credential::{CredentialError, Password};
pub use service::*;
