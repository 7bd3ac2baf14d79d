//! Error types for the catalog crate.

use thiserror::Error;

/// Errors that can occur while loading the product catalog.
///
/// Shape problems *inside* a parsed catalog are not errors: the
/// flattener silently skips malformed sections. Only failures to read
/// or parse the file itself surface here.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Catalog file is not valid JSON
    #[error("catalog file {path} is not valid JSON: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
