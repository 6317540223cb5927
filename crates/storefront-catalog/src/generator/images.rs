//! Image-slug reconciliation.
//!
//! Products with real photography are matched by display name against a
//! curated table. Matching is by name only, so every variant of a name
//! (in any subcategory) shares the photographed slug.

use std::collections::HashMap;

/// Reconciles product names with image directories.
#[derive(Debug, Clone)]
pub struct ImageSlugs {
    by_name: HashMap<&'static str, &'static str>,
}

impl ImageSlugs {
    /// Build the lookup from the curated table.
    ///
    /// A name listed twice keeps its last slug.
    pub fn curated() -> Self {
        Self::from_entries(IMAGE_SLUGS)
    }

    /// Build the lookup from explicit entries.
    pub fn from_entries(entries: &[(&'static str, &'static str)]) -> Self {
        let mut by_name = HashMap::with_capacity(entries.len());
        for (name, slug) in entries.iter().copied() {
            by_name.insert(name, slug);
        }
        Self { by_name }
    }

    /// Check whether a product name has photography.
    pub fn has_images(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Slug for a product, falling back to `default_slug`.
    pub fn resolve(&self, name: &str, default_slug: &str) -> String {
        self.by_name
            .get(name)
            .map(|slug| slug.to_string())
            .unwrap_or_else(|| default_slug.to_string())
    }

    /// Number of distinct photographed names.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl Default for ImageSlugs {
    fn default() -> Self {
        Self::curated()
    }
}

/// Image paths for a slug: `/images/products/{slug}/{n}.jpg`, n from 1.
pub fn image_paths(slug: &str, count: usize) -> Vec<String> {
    (1..=count)
        .map(|n| format!("/images/products/{}/{}.jpg", slug, n))
        .collect()
}

const IMAGE_SLUGS: &[(&str, &str)] = &[
    ("Ribbed Tank Top", "women-ribbed-tank-top-1"),
    ("Oversized Blazer", "women-oversized-blazer-2"),
    ("Wide Leg Trousers", "women-wide-leg-trousers-3"),
    ("Silk Midi Dress", "women-silk-midi-dress-4"),
    ("Cropped Cardigan", "women-cropped-cardigan-5"),
    ("Leather Ankle Boots", "women-leather-ankle-boots-6"),
    ("Oversized T-Shirt", "women-oversized-t-shirt-7"),
    ("High-Waisted Jeans", "women-high-waisted-jeans-8"),
    ("Knit Midi Skirt", "women-knit-midi-skirt-9"),
    ("Structured Handbag", "women-structured-handbag-10"),
    ("Satin Slip Dress", "women-satin-slip-dress-11"),
    ("Wool Blend Scarf", "women-wool-blend-scarf-12"),
    ("Tailored Blazer", "women-tailored-blazer-13"),
    ("Ribbed Knit Sweater", "women-ribbed-knit-sweater-14"),
    ("Pleated Midi Skirt", "women-pleated-midi-skirt-15"),
    ("Leather Crossbody Bag", "women-leather-crossbody-bag-16"),
    ("Oversized Denim Shirt", "women-oversized-denim-shirt-17"),
    ("Wool Blend Coat", "women-wool-blend-coat-18"),
    ("Silk Blouse", "women-silk-blouse-19"),
    ("Wide Leg Jeans", "women-wide-leg-jeans-20"),
    ("Knit Cardigan", "women-knit-cardigan-21"),
    ("Leather Loafers", "women-leather-loafers-22"),
    ("Trench Coat", "women-trench-coat-23"),
    ("Ribbed Bodysuit", "women-ribbed-bodysuit-24"),
    ("Midi Wrap Dress", "women-midi-wrap-dress-25"),
    ("Structured Tote Bag", "women-structured-tote-bag-26"),
    ("Oversized Shirt Dress", "women-oversized-shirt-dress-27"),
    ("Knit Pants", "women-knit-pants-28"),
    ("Leather Belt", "women-leather-belt-29"),
    ("Cashmere Blend Scarf", "women-cashmere-blend-scarf-30"),
    ("Classic Oxford Shirt", "men-classic-oxford-shirt-31"),
    ("Slim Fit Chinos", "men-slim-fit-chinos-32"),
    ("Leather Dress Shoes", "men-leather-dress-shoes-33"),
    ("Wool Blend Suit Jacket", "men-wool-blend-suit-jacket-34"),
    ("Cotton T-Shirt", "men-cotton-t-shirt-35"),
    ("Denim Jeans", "men-denim-jeans-36"),
    ("Leather Belt", "men-leather-belt-37"),
    ("Cashmere Sweater", "men-cashmere-sweater-38"),
    ("Wool Coat", "men-wool-coat-39"),
    ("Leather Boots", "men-leather-boots-40"),
    ("Floral Print Dress", "kids-floral-print-dress-41"),
    ("Classic Polo Shirt", "kids-classic-polo-shirt-42"),
    ("Denim Jeans", "kids-denim-jeans-43"),
    ("Tutu Dress", "kids-tutu-dress-44"),
    ("Hooded Sweatshirt", "kids-hooded-sweatshirt-45"),
    ("Cardigan", "kids-cardigan-46"),
    ("Sneakers", "kids-sneakers-47"),
    ("Party Dress", "kids-party-dress-48"),
    ("Cargo Shorts", "kids-cargo-shorts-49"),
    ("Leggings", "kids-leggings-50"),
    // Second photography batch
    ("Midi Skirt", "women-midi-skirt-51"),
    ("Flared Skirt", "women-flared-skirt-52"),
    ("Long Wide Leg Jeans", "women-long-wide-leg-jeans-53"),
    ("Pea Coat", "women-pea-coat-54"),
    ("Hooded Sweater", "women-hooded-sweater-55"),
    ("Leather Skirt", "women-leather-skirt-56"),
    ("Cotton Blazer", "women-cotton-blazer-57"),
    ("Cropped Blazer", "women-cropped-blazer-58"),
    ("Chiffon Dress", "women-chiffon-dress-59"),
    ("Wool Blend Trench", "women-wool-blend-trench-60"),
    ("Linen Shirt", "women-linen-shirt-61"),
    ("Mom Jeans", "women-mom-jeans-62"),
    ("Merino Wool Sweater", "women-merino-wool-sweater-63"),
    ("Slim Fit Jeans", "women-slim-fit-jeans-64"),
    ("Oversized Sweater", "women-oversized-sweater-65"),
    ("Sundress", "women-sundress-66"),
    ("Pencil Skirt", "women-pencil-skirt-67"),
    ("Chain Bag", "women-chain-bag-68"),
    ("Sweetheart Neck", "women-sweetheart-neck-69"),
    ("Tunic Dress", "women-tunic-dress-70"),
    ("Black Suit", "men-black-suit-71"),
    ("Checked Blazer", "men-checked-blazer-72"),
    ("Classic Fit Sweater", "men-classic-fit-sweater-73"),
    ("Oversized Shirt", "men-oversized-shirt-74"),
    ("Straight Leg Pants", "men-straight-leg-pants-75"),
    ("Leather Jacket", "men-leather-jacket-76"),
    ("Casual Shoes", "men-casual-shoes-77"),
    ("Button-Up Shirt", "men-button-up-shirt-78"),
    ("Formal Shirt", "men-formal-shirt-79"),
    ("Gray T-Shirt", "men-gray-t-shirt-80"),
    ("Chino Pants", "men-chino-pants-81"),
    ("Solid Sweater", "men-solid-sweater-82"),
    ("Derby Shoes", "men-derby-shoes-83"),
    ("Flannel Shirt", "men-flannel-shirt-84"),
    ("Mules", "men-mules-85"),
    ("Two-Piece Suit", "men-two-piece-suit-86"),
    ("Modern Suit", "men-modern-suit-87"),
    ("Smart Pants", "men-smart-pants-88"),
    ("Closed-Toe Shoes", "kids-closed-toe-shoes-89"),
    ("Cotton Shirt", "kids-cotton-shirt-90"),
    ("Casual Shirt", "kids-casual-shirt-91"),
    ("Party Shirt", "kids-party-shirt-92"),
    ("Wallet", "kids-wallet-93"),
    ("Low-Top Shoes", "kids-low-top-shoes-94"),
    ("Relaxed Shirt", "kids-relaxed-shirt-95"),
    ("Tulle Dress", "kids-tulle-dress-96"),
    ("Shoulder Bag", "kids-shoulder-bag-97"),
    ("Flat Shoes", "kids-flat-shoes-98"),
    ("Athletic Clothes", "kids-athletic-clothes-99"),
    ("High-Waisted Pants", "kids-high-waisted-pants-100"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curated_table_size() {
        assert_eq!(IMAGE_SLUGS.len(), 100);
        // "Leather Belt" and "Denim Jeans" are listed twice.
        assert_eq!(ImageSlugs::curated().len(), 98);
    }

    #[test]
    fn test_duplicate_names_keep_last_slug() {
        let slugs = ImageSlugs::curated();
        assert_eq!(slugs.resolve("Leather Belt", "x"), "men-leather-belt-37");
        assert_eq!(slugs.resolve("Denim Jeans", "x"), "kids-denim-jeans-43");
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        let slugs = ImageSlugs::curated();
        assert!(slugs.has_images("Ribbed Tank Top"));
        assert_eq!(
            slugs.resolve("Ribbed Tank Top", "women-new-in-1"),
            "women-ribbed-tank-top-1"
        );
        assert!(!slugs.has_images("Quilted Parka"));
        assert_eq!(
            slugs.resolve("Quilted Parka", "women-outerwear-32"),
            "women-outerwear-32"
        );
    }

    #[test]
    fn test_image_paths() {
        let paths = image_paths("men-wool-coat-39", 4);
        assert_eq!(paths.len(), 4);
        assert_eq!(paths[0], "/images/products/men-wool-coat-39/1.jpg");
        assert_eq!(paths[3], "/images/products/men-wool-coat-39/4.jpg");
        assert!(image_paths("x", 0).is_empty());
    }
}
