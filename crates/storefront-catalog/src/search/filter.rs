//! Search filter types.

use crate::catalog::Product;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A search filter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Filter {
    /// Filter by top-level category (exact match).
    Category(String),
    /// Filter by subcategory (case-insensitive).
    Subcategory(String),
    /// Filter by price range (inclusive).
    PriceRange {
        min: Option<Money>,
        max: Option<Money>,
    },
    /// Only show in-stock items.
    InStock,
    /// Only show discounted items.
    OnSale,
    /// Only show new items.
    New,
    /// Only show best sellers.
    BestSeller,
    /// Filter by color (OR, case-insensitive).
    Colors(Vec<String>),
    /// Filter by offered size (OR, case-insensitive).
    Sizes(Vec<String>),
    /// Filter by minimum rating.
    Rating { min: f64 },
    /// Filter by tag.
    Tag(String),
    /// Substring search in name, description and subcategory.
    Text(String),
}

impl Filter {
    /// Create a category filter.
    pub fn category(category: impl Into<String>) -> Self {
        Filter::Category(category.into())
    }

    /// Create a subcategory filter.
    pub fn subcategory(subcategory: impl Into<String>) -> Self {
        Filter::Subcategory(subcategory.into())
    }

    /// Create a price range filter.
    pub fn price_range(min: Option<Money>, max: Option<Money>) -> Self {
        Filter::PriceRange { min, max }
    }

    /// Create an in-stock filter.
    pub fn in_stock() -> Self {
        Filter::InStock
    }

    /// Create a single-color filter.
    pub fn color(color: impl Into<String>) -> Self {
        Filter::Colors(vec![color.into()])
    }

    /// Create a single-size filter.
    pub fn size(size: impl Into<String>) -> Self {
        Filter::Sizes(vec![size.into()])
    }

    /// Create a tag filter.
    pub fn tag(tag: impl Into<String>) -> Self {
        Filter::Tag(tag.into())
    }

    /// Create a text search filter.
    pub fn text(query: impl Into<String>) -> Self {
        Filter::Text(query.into())
    }

    /// Check whether a product passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Filter::Category(category) => product.category == *category,
            Filter::Subcategory(subcategory) => {
                product.subcategory.eq_ignore_ascii_case(subcategory)
            }
            Filter::PriceRange { min, max } => {
                let above = min.map_or(true, |min| product.price.amount_cents >= min.amount_cents);
                let below = max.map_or(true, |max| product.price.amount_cents <= max.amount_cents);
                above && below
            }
            Filter::InStock => product.in_stock,
            Filter::OnSale => product.is_on_sale(),
            Filter::New => product.is_new,
            Filter::BestSeller => product.is_best_seller,
            Filter::Colors(colors) => colors
                .iter()
                .any(|color| product.color.eq_ignore_ascii_case(color)),
            Filter::Sizes(sizes) => sizes.iter().any(|size| product.has_size(size)),
            Filter::Rating { min } => product.rating >= *min,
            Filter::Tag(tag) => product.has_tag(tag),
            Filter::Text(query) => {
                let needle = query.to_lowercase();
                if needle.is_empty() {
                    return true;
                }
                product.name.to_lowercase().contains(&needle)
                    || product.subcategory.to_lowercase().contains(&needle)
                    || product.short_description.to_lowercase().contains(&needle)
                    || product
                        .description
                        .as_deref()
                        .map_or(false, |d| d.to_lowercase().contains(&needle))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductOptions;
    use crate::generator::{ProductFactory, ProductShell};

    fn product() -> Product {
        let shell = ProductShell {
            base_id: "kids-girls-tops-7".to_string(),
            name: "Striped Shirt".to_string(),
            category: "Kids".to_string(),
            subcategory: "Girls Tops".to_string(),
            price: Money::usd(2990),
            original_price: Some(Money::usd(3887)),
            colors: vec!["Navy".to_string()],
            sizes: vec!["4T".to_string(), "5".to_string()],
        };
        let options = ProductOptions {
            is_new: true,
            tags: vec!["kids".to_string()],
            long_description: Some("Soft cotton jersey".to_string()),
            ..Default::default()
        };
        ProductFactory::default()
            .variants(&shell, &options)
            .remove(0)
    }

    #[test]
    fn test_category_is_exact_subcategory_is_not() {
        let p = product();
        assert!(Filter::category("Kids").matches(&p));
        assert!(!Filter::category("kids").matches(&p));
        assert!(Filter::subcategory("girls tops").matches(&p));
        assert!(!Filter::subcategory("Girls").matches(&p));
    }

    #[test]
    fn test_price_range_inclusive() {
        let p = product();
        assert!(Filter::price_range(Some(Money::usd(2990)), Some(Money::usd(2990))).matches(&p));
        assert!(!Filter::price_range(None, Some(Money::usd(2000))).matches(&p));
        assert!(Filter::price_range(Some(Money::usd(1000)), None).matches(&p));
    }

    #[test]
    fn test_flags() {
        let p = product();
        assert!(Filter::OnSale.matches(&p));
        assert!(Filter::New.matches(&p));
        assert!(!Filter::BestSeller.matches(&p));
        assert_eq!(Filter::in_stock().matches(&p), p.in_stock);
    }

    #[test]
    fn test_color_size_tag() {
        let p = product();
        assert!(Filter::color("navy").matches(&p));
        assert!(!Filter::color("Black").matches(&p));
        assert!(Filter::Sizes(vec!["XL".to_string(), "4t".to_string()]).matches(&p));
        assert!(!Filter::size("XL").matches(&p));
        assert!(Filter::tag("kids").matches(&p));
    }

    #[test]
    fn test_text_search() {
        let p = product();
        assert!(Filter::text("striped").matches(&p));
        assert!(Filter::text("JERSEY").matches(&p));
        assert!(Filter::text("girls").matches(&p));
        assert!(!Filter::text("denim").matches(&p));
        assert!(Filter::text("").matches(&p));
    }
}
