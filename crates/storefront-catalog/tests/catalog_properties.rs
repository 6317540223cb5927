//! Whole-catalog properties of the default build.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::OnceLock;

use storefront_catalog::generator::ImageSlugs;
use storefront_catalog::prelude::*;

fn catalog() -> &'static CatalogService {
    static CATALOG: OnceLock<CatalogService> = OnceLock::new();
    CATALOG.get_or_init(|| CatalogService::build(CatalogConfig::default()).unwrap())
}

#[test]
fn test_two_builds_are_identical() {
    let first = generate_catalog().unwrap();
    let second = generate_catalog().unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_variant_colors_match_siblings() {
    let mut groups: HashMap<(&str, &str, &str), BTreeSet<&str>> = HashMap::new();
    for product in catalog().all() {
        groups
            .entry(product.group_key())
            .or_default()
            .insert(product.color.as_str());
    }

    for product in catalog().all() {
        if product.colors.len() <= 1 {
            continue;
        }
        let expected: Vec<&str> = groups[&product.group_key()].iter().copied().collect();
        let actual: Vec<&str> = product.colors.iter().map(String::as_str).collect();
        assert_eq!(actual, expected, "colors of {}", product.id);
    }
}

#[test]
fn test_size_bound() {
    let report = *catalog().report().unwrap();
    let target = catalog().config().target_count;
    let pool = report.expanded - report.imaged;

    let expected = if pool >= target.saturating_sub(report.imaged) {
        report.imaged.max(target)
    } else {
        report.imaged + pool
    };
    assert_eq!(catalog().all().len(), expected);
}

#[test]
fn test_every_photographed_variant_is_kept() {
    let slugs = ImageSlugs::curated();
    let expanded = CatalogGenerator::default().expand_all().unwrap();
    let kept: HashSet<&str> = catalog().all().iter().map(|p| p.id.as_str()).collect();

    let photographed: Vec<&Product> = expanded.iter().filter(|p| slugs.has_images(&p.name)).collect();
    assert!(!photographed.is_empty());
    for product in &photographed {
        assert!(kept.contains(product.id.as_str()), "missing {}", product.id);
    }

    // The photographed block comes first, in expansion order.
    let head: Vec<&str> = catalog().all()[..photographed.len()]
        .iter()
        .map(|p| p.id.as_str())
        .collect();
    let expected: Vec<&str> = photographed.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(head, expected);
}

#[test]
fn test_photographed_products_use_curated_paths() {
    let slugs = ImageSlugs::curated();
    for product in catalog().all() {
        if !slugs.has_images(&product.name) {
            continue;
        }
        let slug = slugs.resolve(&product.name, "");
        assert_eq!(product.image, format!("/images/products/{}/1.jpg", slug));
        assert_eq!(product.images.len(), 4);
    }
}

#[test]
fn test_ids_are_unique() {
    let ids: HashSet<&str> = catalog().all().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids.len(), catalog().all().len());
}

#[test]
fn test_out_of_stock_share_near_ten_percent() {
    let expanded = CatalogGenerator::default().expand_all().unwrap();
    let out = expanded.iter().filter(|p| !p.in_stock).count() as f64;
    let share = out / expanded.len() as f64;
    assert!((0.05..0.15).contains(&share), "out of stock share {}", share);
    assert!(expanded.iter().filter(|p| !p.in_stock).all(|p| p.stock_quantity == 0));
}

#[test]
fn test_featured_selection() {
    let featured = catalog().featured();
    assert_eq!(featured.len(), 8);

    let names: HashSet<&str> = featured.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names.len(), 8);
    assert!(featured.iter().all(|p| p.is_new || p.is_best_seller));
    assert_eq!(featured[0].category, "Women");
    assert_eq!(featured[1].category, "Men");
    assert_eq!(featured[2].category, "Kids");

    assert!(std::ptr::eq(catalog().featured(), featured));
}

#[test]
fn test_new_arrivals_do_not_repeat_featured() {
    let featured: HashSet<&str> = catalog().featured().iter().map(|p| p.name.as_str()).collect();
    let arrivals = catalog().new_arrivals();
    assert_eq!(arrivals.len(), 4);
    assert!(arrivals.iter().all(|p| p.is_new && !featured.contains(p.name.as_str())));
}

#[test]
fn test_sale_view() {
    let sale = catalog().sale();
    assert!(!sale.is_empty());
    for product in &sale {
        let original = product.original_price.unwrap();
        assert!(original.amount_cents > product.price.amount_cents);
        assert!(product.discount_percentage.is_some());
    }
    let regular = catalog().all().iter().filter(|p| p.original_price.is_none());
    for product in regular {
        assert!(!sale.iter().any(|s| s.id == product.id));
    }
}

#[test]
fn test_subcategory_lookup_ignores_case() {
    let exact = catalog().by_category("Women", Some("New In"));
    let lower = catalog().by_category("Women", Some("new in"));
    assert!(!exact.is_empty());
    assert_eq!(exact.len(), lower.len());
    assert!(catalog().by_category("women", Some("New In")).is_empty());
}

#[test]
fn test_new_releases() {
    let releases = catalog().new_releases(Some(6));
    assert_eq!(releases.len(), 6);
    assert!(releases.iter().all(|p| p.is_new));

    let kids = catalog().new_releases_by_category("Kids", None);
    assert!(kids.iter().all(|p| p.category == "Kids"));
}

#[test]
fn test_prices_within_bands() {
    for product in catalog().all() {
        let cents = product.price.amount_cents;
        assert!((990..=39990).contains(&cents), "{} costs {}", product.id, cents);
        assert!(product.rating >= 4.0 && product.rating <= 5.0);
        assert!((3..=8).contains(&product.reviews.len()));
    }
}

#[test]
fn test_search_women_shoes_by_price() {
    let results = catalog().search(
        &SearchQuery::new()
            .with_filter(Filter::category("Women"))
            .with_filter(Filter::subcategory("shoes"))
            .with_sort(SortOption::PriceAsc)
            .with_pagination(1, 100)
            .with_facets(),
    );
    let prices: Vec<i64> = results.items.iter().map(|p| p.price.amount_cents).collect();
    let mut sorted = prices.clone();
    sorted.sort_unstable();
    assert_eq!(prices, sorted);
    assert!(results.items.iter().all(|p| p.subcategory == "Shoes"));
}
