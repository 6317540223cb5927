//! Fixed-size catalog selection.

use super::images::ImageSlugs;
use crate::catalog::Product;
use crate::rng::SeededRandom;
use tracing::warn;

/// Outcome of trimming the expanded catalog to its target size.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    /// Photographed variants followed by the sampled remainder.
    pub products: Vec<Product>,
    /// Number of photographed variants kept.
    pub imaged: usize,
    /// Number of unphotographed variants sampled.
    pub sampled: usize,
}

/// Keep every photographed variant and fill up to `target` with a seeded
/// sample of the rest.
///
/// Photographed variants are never dropped. When they alone exceed the
/// target the catalog is larger than requested and a warning is logged.
pub fn select_catalog(products: Vec<Product>, slugs: &ImageSlugs, target: usize, seed: i64) -> Selection {
    let (mut imaged, mut rest): (Vec<Product>, Vec<Product>) =
        products.into_iter().partition(|p| slugs.has_images(&p.name));

    let needed = target.saturating_sub(imaged.len());
    if imaged.len() > target {
        warn!(
            imaged = imaged.len(),
            target, "Photographed products exceed the target size; keeping all of them"
        );
    }

    SeededRandom::new(seed).shuffle(&mut rest);
    rest.truncate(needed);

    let imaged_count = imaged.len();
    let sampled = rest.len();
    imaged.extend(rest);
    Selection {
        products: imaged,
        imaged: imaged_count,
        sampled,
    }
}
