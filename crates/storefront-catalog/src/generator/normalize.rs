//! Color-variant normalization.
//!
//! Selection can drop some colors of a product. Afterwards every variant's
//! `colors` must list exactly the colors that still exist as siblings.

use crate::catalog::Product;
use std::collections::{BTreeSet, HashMap};

/// Rewrite `colors` on multi-color products to the sorted set of colors
/// present among siblings with the same name, category and subcategory.
///
/// Products declaring at most one color are returned unchanged.
pub fn normalize_colors(mut products: Vec<Product>) -> Vec<Product> {
    let mut existing: HashMap<(String, String, String), BTreeSet<String>> = HashMap::new();
    for product in &products {
        if product.color.is_empty() {
            continue;
        }
        let (name, category, subcategory) = product.group_key();
        existing
            .entry((name.to_string(), category.to_string(), subcategory.to_string()))
            .or_default()
            .insert(product.color.clone());
    }

    for product in products.iter_mut() {
        if product.colors.len() <= 1 {
            continue;
        }
        let key = (
            product.name.clone(),
            product.category.clone(),
            product.subcategory.clone(),
        );
        // Declared colors that survived are a subset of the sibling set, so
        // the union is the sibling set itself.
        let colors: Vec<String> = existing
            .get(&key)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default();

        product.colors = if colors.is_empty() {
            vec![product.color.clone()]
        } else {
            colors
        };
    }

    products
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductOptions;
    use crate::generator::expand::{ProductFactory, ProductShell};
    use crate::money::Money;

    fn variants(name: &str, subcategory: &str, colors: &[&str]) -> Vec<Product> {
        let shell = ProductShell {
            base_id: format!("women-{}-1", subcategory.to_lowercase()),
            name: name.to_string(),
            category: "Women".to_string(),
            subcategory: subcategory.to_string(),
            price: Money::usd(4990),
            original_price: None,
            colors: colors.iter().map(|c| c.to_string()).collect(),
            sizes: vec!["M".to_string()],
        };
        ProductFactory::default().variants(&shell, &ProductOptions::default())
    }

    #[test]
    fn test_dropped_colors_removed() {
        let mut products = variants("Wrap Top", "Tops", &["Black", "White", "Navy"]);
        products.remove(1);

        let normalized = normalize_colors(products);
        for product in &normalized {
            assert_eq!(product.colors, vec!["Black".to_string(), "Navy".to_string()]);
        }
    }

    #[test]
    fn test_colors_sorted() {
        let normalized = normalize_colors(variants("Wrap Top", "Tops", &["White", "Black"]));
        assert_eq!(normalized[0].colors, vec!["Black".to_string(), "White".to_string()]);
    }

    #[test]
    fn test_groups_split_by_subcategory() {
        let mut products = variants("Wrap Top", "Tops", &["Black", "White"]);
        let mut other = variants("Wrap Top", "Shirts", &["Navy", "Gray"]);
        other.truncate(1);
        products.extend(other);

        let normalized = normalize_colors(products);
        assert_eq!(normalized[0].colors, vec!["Black".to_string(), "White".to_string()]);
        assert_eq!(normalized[2].colors, vec!["Navy".to_string()]);
    }

    #[test]
    fn test_single_color_untouched() {
        let mut products = variants("Wrap Top", "Tops", &["Black"]);
        products[0].colors = vec!["Black".to_string()];
        let normalized = normalize_colors(products.clone());
        assert_eq!(normalized, products);
    }
}
