//! Branches

mod handlers;
mod models;

pub(crate) use handlers::*;
