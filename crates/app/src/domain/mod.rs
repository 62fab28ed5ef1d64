//! Master-Data Collections

pub mod accounts;
pub mod branches;
pub mod categories;
pub mod currencies;
pub mod discounts;
pub mod errors;
pub mod settings;
pub mod taxes;
pub mod units;
pub mod users;

mod validation;

pub use errors::{DeleteRefusal, ErrorKind, RegistryError};
