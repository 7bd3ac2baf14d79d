//! # Catalog Crate
//!
//! Domain types and catalog loading for the shop-recs workspace.
//!
//! This crate provides:
//! - The [`Product`] and [`User`] documents shared by every other crate
//! - The flattener that normalizes the storefront's nested catalog JSON
//! - File loading with explicit errors for missing or invalid files
//! - The [`Catalog`] container with a per-category candidate index

pub mod error;
pub mod flatten;
pub mod index;
pub mod loader;
pub mod types;

// Re-export main types
pub use error::{CatalogError, Result};
pub use flatten::flatten_products;
pub use index::Catalog;
pub use loader::load_catalog;
pub use types::{InteractionItem, InteractionSource, Product, User};
