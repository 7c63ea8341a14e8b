//! Error types for catalog_sync

use thiserror::Error;

/// Unified error type for catalog_sync operations
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// HTTP error status code
    #[error("HTTP error: {0}")]
    HttpStatus(reqwest::StatusCode),
    /// Failed to parse or write JSON
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Search URL could not be built
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// Listing page did not have the expected markup
    #[error("HTML error: {0}")]
    Html(String),
    /// Persisted record has no usable identity key
    #[error("Catalog record #{index} has no title")]
    MissingTitle { index: usize },
    /// Persisted catalog holds the same title twice
    #[error("Catalog contains duplicate title: {0}")]
    DuplicateTitle(String),
}

/// Short alias used across the crate
pub type Error = CatalogError;

/// Result alias for catalog_sync operations
pub type Result<T> = std::result::Result<T, CatalogError>;
