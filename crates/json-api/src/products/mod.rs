//! Product lookup
//!
//! Read-only view of the product table kept by the inventory database. The
//! lookup never fails towards the caller: when the table is empty or the
//! database cannot be reached it answers with placeholder products.

mod handlers;
mod models;
mod repository;

pub(crate) use handlers::*;
pub(crate) use repository::*;
