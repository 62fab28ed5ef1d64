//! Units of Measure

mod handlers;
mod models;

pub(crate) use handlers::*;
