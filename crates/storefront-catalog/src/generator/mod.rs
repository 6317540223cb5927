//! Deterministic catalog generation.
//!
//! Pipeline: name tables, per-subcategory expansion, image-slug
//! reconciliation, fixed-size selection, color normalization. Every step
//! is pure; the same configuration always yields the same catalog.

pub mod content;
pub mod curated;
pub mod expand;
pub mod images;
pub mod normalize;
pub mod select;
pub mod templates;

pub use curated::ProductTemplate;
pub use expand::{ProductFactory, ProductShell};
pub use images::ImageSlugs;
pub use templates::{Department, PriceBand, SubcategoryTemplate};

use crate::catalog::Product;
use crate::config::CatalogConfig;
use crate::error::CatalogError;
use tracing::info;

/// Counts recorded while building a catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Variants produced by expansion.
    pub expanded: usize,
    /// Photographed variants kept.
    pub imaged: usize,
    /// Unphotographed variants sampled.
    pub sampled: usize,
    /// Final catalog size.
    pub total: usize,
}

/// Builds the catalog from the static tables.
#[derive(Debug, Clone)]
pub struct CatalogGenerator {
    config: CatalogConfig,
    slugs: ImageSlugs,
}

impl CatalogGenerator {
    /// Create a generator with the curated image table.
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            config,
            slugs: ImageSlugs::curated(),
        }
    }

    /// Replace the image-slug table.
    pub fn with_image_slugs(mut self, slugs: ImageSlugs) -> Self {
        self.slugs = slugs;
        self
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn image_slugs(&self) -> &ImageSlugs {
        &self.slugs
    }

    /// Expand every subcategory without selecting or normalizing.
    pub fn expand_all(&self) -> Result<Vec<Product>, CatalogError> {
        let factory = ProductFactory::new(
            self.config.reference_date()?,
            self.config.images_per_product,
            self.config.brand.clone(),
        );
        Ok(templates::subcategory_templates()
            .iter()
            .flat_map(|template| expand::expand_subcategory(template, &self.slugs, &factory))
            .collect())
    }

    /// Build the final catalog.
    pub fn build(&self) -> Result<(Vec<Product>, BuildReport), CatalogError> {
        self.config.validate()?;

        let expanded = self.expand_all()?;
        let expanded_count = expanded.len();

        let selection = select::select_catalog(
            expanded,
            &self.slugs,
            self.config.target_count,
            self.config.selection_seed,
        );
        let products = normalize::normalize_colors(selection.products);

        let report = BuildReport {
            expanded: expanded_count,
            imaged: selection.imaged,
            sampled: selection.sampled,
            total: products.len(),
        };
        info!(
            expanded = report.expanded,
            imaged = report.imaged,
            sampled = report.sampled,
            total = report.total,
            "Catalog built"
        );

        Ok((products, report))
    }
}

impl Default for CatalogGenerator {
    fn default() -> Self {
        Self::new(CatalogConfig::default())
    }
}

/// Build the standard catalog.
pub fn generate_catalog() -> Result<Vec<Product>, CatalogError> {
    CatalogGenerator::default().build().map(|(products, _)| products)
}
