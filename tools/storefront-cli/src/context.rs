//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use storefront_catalog::CatalogService;
use tracing::debug;

use crate::config::CliConfig;
use crate::output::Output;

/// Config file names searched for, nearest directory first.
pub const CONFIG_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = match config_path {
            Some(path) => CliConfig::load(path)?,
            None => Self::find_config(&cwd)?.unwrap_or_default(),
        };

        Ok(Self { config, output, cwd })
    }

    /// Find config file in directory tree.
    ///
    /// The nearest file found must load; a broken one is an error rather
    /// than a silent fallback to defaults.
    fn find_config(start: &Path) -> Result<Option<CliConfig>> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    let path = config_path.to_string_lossy();
                    let config = CliConfig::load(&path)?;
                    debug!(path = %config_path.display(), "Loaded config");
                    return Ok(Some(config));
                }
            }

            if !current.pop() {
                break;
            }
        }

        Ok(None)
    }

    /// Build the catalog from the configured settings.
    pub fn catalog(&self) -> Result<CatalogService> {
        CatalogService::build(self.config.catalog.clone()).context("Failed to build catalog")
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}
