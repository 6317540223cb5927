//! Catalog build configuration.

use crate::catalog::DEFAULT_BRAND;
use crate::error::CatalogError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for building and querying the catalog.
///
/// The defaults reproduce the standard storefront catalog; changing any
/// of them produces a different (but still deterministic) catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Number of variants to keep after selection.
    #[serde(default = "default_target_count")]
    pub target_count: usize,

    /// Seed for sampling unphotographed variants.
    #[serde(default = "default_selection_seed")]
    pub selection_seed: i64,

    /// Date reviews are dated back from (YYYY-MM-DD).
    #[serde(default = "default_reference_date")]
    pub reference_date: String,

    /// Image paths generated per product.
    #[serde(default = "default_images_per_product")]
    pub images_per_product: usize,

    /// Brand for products that do not name one.
    #[serde(default = "default_brand")]
    pub brand: String,

    /// Size of the featured view.
    #[serde(default = "default_featured_limit")]
    pub featured_limit: usize,

    /// Size of the new-arrivals view.
    #[serde(default = "default_new_arrivals_limit")]
    pub new_arrivals_limit: usize,
}

fn default_target_count() -> usize {
    400
}

fn default_selection_seed() -> i64 {
    99999
}

fn default_reference_date() -> String {
    "2024-01-01".to_string()
}

fn default_images_per_product() -> usize {
    4
}

fn default_brand() -> String {
    DEFAULT_BRAND.to_string()
}

fn default_featured_limit() -> usize {
    8
}

fn default_new_arrivals_limit() -> usize {
    4
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            target_count: default_target_count(),
            selection_seed: default_selection_seed(),
            reference_date: default_reference_date(),
            images_per_product: default_images_per_product(),
            brand: default_brand(),
            featured_limit: default_featured_limit(),
            new_arrivals_limit: default_new_arrivals_limit(),
        }
    }
}

impl CatalogConfig {
    /// Parse from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parsed reference date.
    pub fn reference_date(&self) -> Result<NaiveDate, CatalogError> {
        NaiveDate::parse_from_str(&self.reference_date, "%Y-%m-%d").map_err(|_| {
            CatalogError::InvalidDate {
                value: self.reference_date.clone(),
            }
        })
    }

    /// Reject settings that cannot produce a usable catalog.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.target_count == 0 {
            return Err(CatalogError::InvalidConfig(
                "target_count must be greater than zero".to_string(),
            ));
        }
        if self.images_per_product == 0 {
            return Err(CatalogError::InvalidConfig(
                "images_per_product must be greater than zero".to_string(),
            ));
        }
        if self.featured_limit == 0 || self.new_arrivals_limit == 0 {
            return Err(CatalogError::InvalidConfig(
                "view limits must be greater than zero".to_string(),
            ));
        }
        if self.brand.trim().is_empty() {
            return Err(CatalogError::InvalidConfig("brand must not be empty".to_string()));
        }
        self.reference_date()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CatalogConfig::default();
        assert_eq!(config.target_count, 400);
        assert_eq!(config.selection_seed, 99999);
        assert_eq!(
            config.reference_date().unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = CatalogConfig::from_toml_str("target_count = 120\nbrand = \"Atelier\"").unwrap();
        assert_eq!(config.target_count, 120);
        assert_eq!(config.brand, "Atelier");
        assert_eq!(config.images_per_product, 4);
        assert_eq!(config.featured_limit, 8);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(CatalogConfig::from_toml_str("").unwrap(), CatalogConfig::default());
    }

    #[test]
    fn test_validation_errors() {
        let err = CatalogConfig::from_toml_str("target_count = 0").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidConfig(_)));

        let err = CatalogConfig::from_toml_str("reference_date = \"01/01/2024\"").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidDate { .. }));

        let err = CatalogConfig::from_toml_str("target_count = \"many\"").unwrap_err();
        assert!(matches!(err, CatalogError::ConfigParse(_)));
    }
}
