//! Catalog import
//!
//! This module turns the library's CSV export into a [`Catalog`](crate::models::Catalog)
//! and reports what was dropped along the way.

pub mod loader;
pub mod parser;

pub use loader::{load_catalog, load_catalog_or_empty};
pub use parser::{parse_catalog, split_line, ParsedCatalog};
