//! Catalog file loading.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{CatalogError, Result};
use crate::flatten::flatten_products;
use crate::types::Product;

/// Load and flatten a catalog file.
///
/// The file must exist and contain valid JSON; its nested layout is
/// then normalized through [`flatten_products`]. Shape problems inside
/// the JSON are tolerated, a missing file or a syntax error is not.
pub fn load_catalog(path: &Path) -> Result<Vec<Product>> {
    let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let value: serde_json::Value =
        serde_json::from_str(&raw).map_err(|source| CatalogError::Json {
            path: path.display().to_string(),
            source,
        })?;

    let products = flatten_products(&value);
    debug!("loaded {} products from {}", products.len(), path.display());

    Ok(products)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_catalog_missing_file() {
        let result = load_catalog(Path::new("no/such/catalog.json"));
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }
}
