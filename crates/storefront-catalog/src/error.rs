//! Catalog error types.

use thiserror::Error;

/// Errors that can occur when configuring or querying the catalog.
///
/// Catalog generation itself is total; these only surface at the edges
/// (configuration loading, lookups by id, serialization).
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Configuration value out of range.
    #[error("Invalid catalog configuration: {0}")]
    InvalidConfig(String),

    /// Date string could not be parsed.
    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate { value: String },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML configuration could not be parsed.
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// I/O error while reading configuration.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
