//! Chart of Accounts

mod handlers;
mod models;

pub(crate) use handlers::*;
