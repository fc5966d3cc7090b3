//! Core domain types for vocabulary cards
//!
//! Word records and the immutable catalog they live in. Nothing here knows
//! about terminals or randomness.

mod catalog;
mod record;

pub use catalog::{Catalog, CatalogError};
pub use record::{WordError, WordRecord};
