//! Catalog model.
//!
//! Contains the product, review and option types produced by the generator.

mod product;

pub use product::{Product, ProductOptions, Review, DEFAULT_BRAND};
