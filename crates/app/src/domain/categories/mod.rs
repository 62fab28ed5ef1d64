//! Product Categories

pub mod data;
pub mod records;
pub mod service;

pub use service::*;
