//! Catalog queries and curated views.
//!
//! [`CatalogService`] owns one built catalog. The featured view is computed
//! on first use and cached for the life of the service.

use crate::catalog::Product;
use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::generator::{BuildReport, CatalogGenerator, Department, ImageSlugs};
use crate::rng::SeededRandom;
use crate::search::{SearchQuery, SearchResults};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::OnceLock;
use tracing::debug;

/// Number of products returned by the new-releases fallback.
pub const NEW_RELEASES_FALLBACK: usize = 12;

const FEATURED_SEEDS: MixSeeds = MixSeeds {
    women: 1000,
    men: 2000,
    kids: 3000,
    fill: 4000,
};

const NEW_ARRIVAL_SEEDS: MixSeeds = MixSeeds {
    women: 5000,
    men: 6000,
    kids: 7000,
    fill: 8000,
};

#[derive(Debug, Clone, Copy)]
struct MixSeeds {
    women: i64,
    men: i64,
    kids: i64,
    fill: i64,
}

/// Read-only access to a built catalog.
#[derive(Debug)]
pub struct CatalogService {
    products: Vec<Product>,
    config: CatalogConfig,
    slugs: ImageSlugs,
    report: Option<BuildReport>,
    featured: OnceLock<Vec<Product>>,
}

impl CatalogService {
    /// Build the catalog from configuration.
    pub fn build(config: CatalogConfig) -> Result<Self, CatalogError> {
        Self::from_generator(&CatalogGenerator::new(config))
    }

    /// Build the catalog with a configured generator.
    pub fn from_generator(generator: &CatalogGenerator) -> Result<Self, CatalogError> {
        let (products, report) = generator.build()?;
        Ok(Self {
            products,
            config: generator.config().clone(),
            slugs: generator.image_slugs().clone(),
            report: Some(report),
            featured: OnceLock::new(),
        })
    }

    /// Wrap an already built product list, photographed per the curated
    /// image table.
    pub fn from_products(products: Vec<Product>, config: CatalogConfig) -> Self {
        Self {
            products,
            config,
            slugs: ImageSlugs::curated(),
            report: None,
            featured: OnceLock::new(),
        }
    }

    /// Replace the image table used to count photographed products.
    pub fn with_image_slugs(mut self, slugs: ImageSlugs) -> Self {
        self.slugs = slugs;
        self
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Counts from the build, when this service built the catalog.
    pub fn report(&self) -> Option<&BuildReport> {
        self.report.as_ref()
    }

    /// Every product in catalog order.
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Products in a category, optionally narrowed to a subcategory.
    ///
    /// The category must match exactly; the subcategory ignores case.
    pub fn by_category(&self, category: &str, subcategory: Option<&str>) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .filter(|p| subcategory.map_or(true, |s| p.subcategory.eq_ignore_ascii_case(s)))
            .collect()
    }

    /// Look up a product by id.
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id.as_str() == id)
    }

    /// Look up a product by id, failing when it does not exist.
    pub fn require_product(&self, id: &str) -> Result<&Product, CatalogError> {
        self.product(id)
            .ok_or_else(|| CatalogError::ProductNotFound(id.to_string()))
    }

    /// Featured products: new or best-selling, one per name, mixed across
    /// departments.
    ///
    /// Computed once; later calls return the same slice.
    pub fn featured(&self) -> &[Product] {
        self.featured.get_or_init(|| {
            let eligible = self
                .products
                .iter()
                .filter(|p| p.is_best_seller || p.is_new);
            let featured: Vec<Product> = mix_departments(
                unique_by_name(eligible),
                FEATURED_SEEDS,
                self.config.featured_limit,
            )
            .into_iter()
            .cloned()
            .collect();
            debug!(count = featured.len(), "Featured products computed");
            featured
        })
    }

    /// New products not already featured, one per name, mixed across
    /// departments.
    pub fn new_arrivals(&self) -> Vec<&Product> {
        let featured: HashSet<&str> = self.featured().iter().map(|p| p.name.as_str()).collect();
        let eligible = self
            .products
            .iter()
            .filter(|p| p.is_new && !featured.contains(p.name.as_str()));
        mix_departments(
            unique_by_name(eligible),
            NEW_ARRIVAL_SEEDS,
            self.config.new_arrivals_limit,
        )
    }

    /// Discounted products in catalog order.
    pub fn sale(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_on_sale()).collect()
    }

    /// New products in catalog order.
    ///
    /// With no new products at all, falls back to the first twelve products
    /// by id. A limit of zero means no limit.
    pub fn new_releases(&self, limit: Option<usize>) -> Vec<&Product> {
        let limit = limit.filter(|&n| n > 0);
        let mut releases = new_or_fallback(self.products.iter(), NEW_RELEASES_FALLBACK);
        if let Some(limit) = limit {
            releases.truncate(limit);
        }
        releases
    }

    /// New products in one category, with the same fallback as
    /// [`new_releases`](Self::new_releases).
    pub fn new_releases_by_category(&self, category: &str, limit: Option<usize>) -> Vec<&Product> {
        let limit = limit.filter(|&n| n > 0);
        let in_category = self.products.iter().filter(|p| p.category == category);
        let mut releases = new_or_fallback(in_category, limit.unwrap_or(NEW_RELEASES_FALLBACK));
        if let Some(limit) = limit {
            releases.truncate(limit);
        }
        releases
    }

    /// Run a search over the whole catalog.
    pub fn search(&self, query: &SearchQuery) -> SearchResults<Product> {
        query.execute(&self.products)
    }

    /// Summary counts for the catalog.
    pub fn stats(&self) -> CatalogStats {
        let by_category = Department::ALL
            .iter()
            .map(|d| CategoryCount {
                category: d.label().to_string(),
                count: self.products.iter().filter(|p| p.category == d.label()).count(),
            })
            .collect();

        CatalogStats {
            total: self.products.len(),
            unique_names: unique_by_name(self.products.iter()).len(),
            by_category,
            imaged: self
                .products
                .iter()
                .filter(|p| self.slugs.has_images(&p.name))
                .count(),
            on_sale: self.products.iter().filter(|p| p.is_on_sale()).count(),
            out_of_stock: self.products.iter().filter(|p| !p.in_stock).count(),
            new: self.products.iter().filter(|p| p.is_new).count(),
            best_sellers: self.products.iter().filter(|p| p.is_best_seller).count(),
        }
    }
}

/// Summary counts for a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub total: usize,
    pub unique_names: usize,
    pub by_category: Vec<CategoryCount>,
    /// Variants with photography.
    pub imaged: usize,
    pub on_sale: usize,
    pub out_of_stock: usize,
    pub new: usize,
    pub best_sellers: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Keep the first product seen for each name.
pub fn unique_by_name<'a>(products: impl IntoIterator<Item = &'a Product>) -> Vec<&'a Product> {
    let mut seen = HashSet::new();
    products
        .into_iter()
        .filter(|p| seen.insert(p.name.as_str()))
        .collect()
}

fn shuffled<'a>(products: &[&'a Product], seed: i64) -> Vec<&'a Product> {
    let mut out = products.to_vec();
    SeededRandom::new(seed).shuffle(&mut out);
    out
}

/// Shuffle each department, interleave Women, Men, Kids up to `limit`, then
/// fill from the remaining products.
fn mix_departments<'a>(unique: Vec<&'a Product>, seeds: MixSeeds, limit: usize) -> Vec<&'a Product> {
    let of = |department: Department| -> Vec<&'a Product> {
        unique
            .iter()
            .copied()
            .filter(|p| p.category == department.label())
            .collect()
    };
    let columns = [
        shuffled(&of(Department::Women), seeds.women),
        shuffled(&of(Department::Men), seeds.men),
        shuffled(&of(Department::Kids), seeds.kids),
    ];

    let mut mixed: Vec<&Product> = Vec::with_capacity(limit);
    let rows = columns.iter().map(Vec::len).max().unwrap_or(0);
    'rows: for row in 0..rows {
        for column in &columns {
            if mixed.len() >= limit {
                break 'rows;
            }
            if let Some(product) = column.get(row) {
                mixed.push(*product);
            }
        }
    }

    if mixed.len() < limit {
        let taken: HashSet<&str> = mixed.iter().map(|p| p.name.as_str()).collect();
        let remaining: Vec<&Product> = unique
            .iter()
            .copied()
            .filter(|p| !taken.contains(p.name.as_str()))
            .collect();
        let needed = limit - mixed.len();
        mixed.extend(shuffled(&remaining, seeds.fill).into_iter().take(needed));
    }

    mixed.truncate(limit);
    mixed
}

fn new_or_fallback<'a>(products: impl Iterator<Item = &'a Product> + Clone, fallback: usize) -> Vec<&'a Product> {
    let new: Vec<&Product> = products.clone().filter(|p| p.is_new).collect();
    if !new.is_empty() {
        return new;
    }
    let mut by_id: Vec<&Product> = products.collect();
    by_id.sort_by(|a, b| a.id.cmp(&b.id));
    by_id.truncate(fallback);
    by_id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductOptions;
    use crate::generator::{ProductFactory, ProductShell};
    use crate::money::Money;

    struct Row {
        name: String,
        category: &'static str,
        subcategory: &'static str,
        is_new: bool,
        is_best_seller: bool,
        sale: bool,
    }

    fn row(name: impl Into<String>, category: &'static str, subcategory: &'static str) -> Row {
        Row {
            name: name.into(),
            category,
            subcategory,
            is_new: false,
            is_best_seller: false,
            sale: false,
        }
    }

    fn service(rows: Vec<Row>) -> CatalogService {
        let factory = ProductFactory::default();
        let products = rows
            .iter()
            .enumerate()
            .flat_map(|(i, r)| {
                let shell = ProductShell {
                    base_id: format!("{}-{}", r.category.to_lowercase(), i + 1),
                    name: r.name.clone(),
                    category: r.category.to_string(),
                    subcategory: r.subcategory.to_string(),
                    price: Money::usd(7990),
                    original_price: r.sale.then(|| Money::usd(19990)),
                    colors: vec!["Black".to_string(), "White".to_string()],
                    sizes: vec!["M".to_string()],
                };
                let options = ProductOptions {
                    is_new: r.is_new,
                    is_best_seller: r.is_best_seller,
                    ..Default::default()
                };
                factory.variants(&shell, &options)
            })
            .collect();
        CatalogService::from_products(products, CatalogConfig::default())
    }

    fn eligible_rows() -> Vec<Row> {
        let mut rows = Vec::new();
        for (i, category) in ["Women", "Men", "Kids"].iter().enumerate() {
            for n in 0..5 {
                rows.push(Row {
                    is_new: (n + i) % 2 == 0,
                    is_best_seller: (n + i) % 2 == 1,
                    ..row(format!("{} Item {}", category, n), category, "New In")
                });
            }
        }
        rows.push(row("Plain Tee", "Men", "T-Shirts"));
        rows
    }

    #[test]
    fn test_by_category_subcategory_case_insensitive() {
        let service = service(vec![
            row("Coat", "Women", "Outerwear"),
            row("Tee", "Women", "Tops"),
            row("Suit", "Men", "Suits"),
        ]);
        assert_eq!(service.by_category("Women", None).len(), 4);
        assert_eq!(service.by_category("Women", Some("outerwear")).len(), 2);
        assert_eq!(service.by_category("Women", Some("OUTERWEAR")).len(), 2);
        assert!(service.by_category("women", None).is_empty());
    }

    #[test]
    fn test_product_lookup() {
        let service = service(vec![row("Coat", "Women", "Outerwear")]);
        assert!(service.product("women-1-white").is_some());
        assert!(service.product("women-9").is_none());
        assert!(matches!(
            service.require_product("women-9"),
            Err(CatalogError::ProductNotFound(id)) if id == "women-9"
        ));
    }

    #[test]
    fn test_featured_is_mixed_unique_and_cached() {
        let service = service(eligible_rows());
        let featured = service.featured();

        assert_eq!(featured.len(), 8);
        let categories: Vec<&str> = featured.iter().map(|p| p.category.as_str()).collect();
        assert_eq!(
            categories,
            vec!["Women", "Men", "Kids", "Women", "Men", "Kids", "Women", "Men"]
        );
        let names: HashSet<&str> = featured.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names.len(), 8);
        assert!(featured.iter().all(|p| p.is_new || p.is_best_seller));

        assert!(std::ptr::eq(service.featured(), featured));
    }

    #[test]
    fn test_featured_fills_when_departments_run_short() {
        let mut rows: Vec<Row> = (0..3)
            .map(|i| Row {
                is_new: true,
                ..row(format!("Women Item {}", i), "Women", "New In")
            })
            .collect();
        rows.push(Row {
            is_best_seller: true,
            ..row("Men Item", "Men", "Shirts")
        });
        let service = service(rows);
        assert_eq!(service.featured().len(), 4);
    }

    #[test]
    fn test_new_arrivals_exclude_featured() {
        let service = service(eligible_rows());
        let featured: HashSet<&str> = service.featured().iter().map(|p| p.name.as_str()).collect();
        let arrivals = service.new_arrivals();

        assert!(!arrivals.is_empty());
        assert!(arrivals.len() <= 4);
        for product in arrivals {
            assert!(product.is_new);
            assert!(!featured.contains(product.name.as_str()));
        }
    }

    #[test]
    fn test_sale() {
        let service = service(vec![
            Row {
                sale: true,
                ..row("Coat", "Women", "Outerwear")
            },
            row("Tee", "Women", "Tops"),
        ]);
        let sale = service.sale();
        assert_eq!(sale.len(), 2);
        assert!(sale.iter().all(|p| p.name == "Coat"));
    }

    #[test]
    fn test_new_releases_and_fallback() {
        let catalog = service(vec![
            row("Coat", "Women", "Outerwear"),
            Row {
                is_new: true,
                ..row("Tee", "Women", "Tops")
            },
        ]);
        let releases = catalog.new_releases(None);
        assert_eq!(releases.len(), 2);
        assert_eq!(catalog.new_releases(Some(1)).len(), 1);

        let rows: Vec<Row> = (0..10)
            .map(|i| row(format!("Item {}", i), "Men", "Shirts"))
            .collect();
        let fallback = service(rows);
        let releases = fallback.new_releases(None);
        assert_eq!(releases.len(), NEW_RELEASES_FALLBACK);
        let ids: Vec<&str> = releases.iter().map(|p| p.id.as_str()).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);

        assert_eq!(fallback.new_releases_by_category("Men", Some(3)).len(), 3);
        assert!(fallback.new_releases_by_category("Kids", None).is_empty());
    }

    #[test]
    fn test_new_releases_zero_limit_is_unlimited() {
        let catalog = service(vec![
            Row {
                is_new: true,
                ..row("Coat", "Women", "Outerwear")
            },
            Row {
                is_new: true,
                ..row("Tee", "Women", "Tops")
            },
        ]);
        assert_eq!(catalog.new_releases(Some(0)).len(), 4);
        assert_eq!(catalog.new_releases_by_category("Women", Some(0)).len(), 4);

        let rows: Vec<Row> = (0..15)
            .map(|i| row(format!("Item {}", i), "Men", "Shirts"))
            .collect();
        let fallback = service(rows);
        assert_eq!(
            fallback.new_releases_by_category("Men", Some(0)).len(),
            NEW_RELEASES_FALLBACK
        );
    }

    #[test]
    fn test_unique_by_name_keeps_first() {
        let service = service(vec![row("Coat", "Women", "Outerwear")]);
        let unique = unique_by_name(service.all());
        assert_eq!(unique.len(), 1);
        assert_eq!(unique[0].id.as_str(), "women-1");
    }

    #[test]
    fn test_stats() {
        let service = service(vec![
            Row {
                sale: true,
                is_new: true,
                ..row("Trench Coat", "Women", "Outerwear")
            },
            row("Tee", "Kids", "Girls Tops"),
        ]);
        let stats = service.stats();
        assert_eq!(stats.total, 4);
        assert_eq!(stats.unique_names, 2);
        assert_eq!(stats.imaged, 2);
        assert_eq!(stats.on_sale, 2);
        assert_eq!(stats.new, 2);
        assert_eq!(
            stats.by_category,
            vec![
                CategoryCount { category: "Women".to_string(), count: 2 },
                CategoryCount { category: "Men".to_string(), count: 0 },
                CategoryCount { category: "Kids".to_string(), count: 2 },
            ]
        );
    }

    #[test]
    fn test_stats_use_service_image_table() {
        let catalog = service(vec![row("Trench Coat", "Women", "Outerwear")]);
        assert_eq!(catalog.stats().imaged, 2);

        let catalog = catalog.with_image_slugs(ImageSlugs::from_entries(&[]));
        assert_eq!(catalog.stats().imaged, 0);
    }

    #[test]
    fn test_from_generator_counts_against_generator_table() {
        let generator = CatalogGenerator::new(CatalogConfig::default())
            .with_image_slugs(ImageSlugs::from_entries(&[]));
        let catalog = CatalogService::from_generator(&generator).unwrap();
        let report = catalog.report().unwrap();
        assert_eq!(report.imaged, 0);
        assert_eq!(catalog.stats().imaged, 0);
    }
}
