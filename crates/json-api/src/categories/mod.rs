//! Product Categories

mod handlers;
mod models;

pub(crate) use handlers::*;
