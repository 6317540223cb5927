//! Deterministic fashion catalog for the Market Street storefront.
//!
//! This crate builds a reproducible mock catalog and serves queries over it:
//!
//! - **Generator**: name tables, seeded expansion, image-slug reconciliation,
//!   fixed-size selection, color normalization
//! - **Catalog**: products, reviews, creation options
//! - **Search**: filters, sorting, pagination, facets
//! - **Service**: lookups and curated views (featured, new arrivals, sale)
//!
//! # Example
//!
//! ```rust,no_run
//! use storefront_catalog::prelude::*;
//!
//! let catalog = CatalogService::build(CatalogConfig::default())?;
//!
//! for product in catalog.featured() {
//!     println!("{} {}", product.name, product.price);
//! }
//!
//! let results = catalog.search(
//!     &SearchQuery::new()
//!         .with_filter(Filter::category("Women"))
//!         .with_sort(SortOption::PriceAsc),
//! );
//! println!("{} matches", results.pagination.total);
//! # Ok::<(), storefront_catalog::CatalogError>(())
//! ```

pub mod config;
pub mod error;
pub mod ids;
pub mod money;
pub mod rng;

pub mod catalog;
pub mod generator;
pub mod search;
pub mod service;

pub use config::CatalogConfig;
pub use error::CatalogError;
pub use ids::*;
pub use money::{Currency, Money};
pub use service::CatalogService;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::CatalogConfig;
    pub use crate::error::CatalogError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};
    pub use crate::rng::{SeededRandom, StreamPurpose};

    // Catalog
    pub use crate::catalog::{Product, ProductOptions, Review};

    // Generator
    pub use crate::generator::{generate_catalog, BuildReport, CatalogGenerator, Department};

    // Search
    pub use crate::search::{Filter, Pagination, SearchQuery, SearchResults, SortOption};

    // Service
    pub use crate::service::{unique_by_name, CatalogService, CatalogStats};
}
