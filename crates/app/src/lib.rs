//! Master-data registry for the BizDesk back office.
//!
//! Each collection (users, branches, currencies, taxes, discounts, units of
//! measure, product categories, accounts) lives in its own in-memory store and
//! is mutated only through its service, which enforces the collection's
//! uniqueness and singleton rules before touching the store.

pub mod context;
pub mod domain;
pub mod store;

#[cfg(test)]
mod test;

mod uuids;

pub use uuids::TypedUuid;
