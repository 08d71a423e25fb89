//! Catalog records and the read-only catalog file loader.
//!
//! A catalog is an ordered list of [`Book`]s. File order is display order;
//! nothing here sorts, filters or mutates records.

mod error;
mod load;
mod model;

pub use error::CatalogError;
pub use load::load;
pub use model::*;
