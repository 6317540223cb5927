//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use storefront_catalog::CatalogConfig;

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Catalog build settings.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        let config: Self = if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))?
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))?
        };

        config
            .catalog
            .validate()
            .with_context(|| format!("Invalid [catalog] section in {}", path))?;
        Ok(config)
    }
}

/// Output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print JSON written by `generate`.
    #[serde(default)]
    pub pretty: bool,

    /// Page size for `search` when `--per-page` is not given.
    #[serde(default = "default_per_page")]
    pub default_per_page: i64,
}

fn default_per_page() -> i64 {
    24
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            default_per_page: default_per_page(),
        }
    }
}

/// Generate a default storefront.toml config file.
pub fn generate_default_config() -> String {
    r#"# Market Street storefront configuration

[catalog]
target_count = 400
selection_seed = 99999
reference_date = "2024-01-01"
images_per_product = 4
brand = "Market Street"
featured_limit = 8
new_arrivals_limit = 4

[output]
pretty = false
default_per_page = 24
"#
    .to_string()
}
