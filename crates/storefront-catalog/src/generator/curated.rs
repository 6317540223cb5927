//! Curated, hand-written product templates.
//!
//! When an expanded name matches a curated template in the same category
//! and subcategory, the template's copy replaces the generic copy. Prices,
//! colors and flags drawn from the seeded stream are left alone.

use crate::catalog::ProductOptions;

/// Authored copy for one product name.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductTemplate {
    pub name: &'static str,
    pub category: &'static str,
    pub subcategory: &'static str,
    pub short_description: &'static str,
    pub long_description: &'static str,
    pub materials: &'static [&'static str],
    pub care_instructions: &'static [&'static str],
    pub fit_notes: &'static str,
    pub is_limited_edition: bool,
}

impl ProductTemplate {
    /// Replace descriptive options with this template's copy.
    pub fn apply(&self, options: &mut ProductOptions) {
        options.short_description = Some(self.short_description.to_string());
        options.long_description = Some(self.long_description.to_string());
        options.materials = to_owned(self.materials);
        options.care_instructions = to_owned(self.care_instructions);
        options.fit_notes = Some(self.fit_notes.to_string());
        options.is_limited_edition = self.is_limited_edition;
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Find the curated template for a product, if any.
pub fn find_template(
    name: &str,
    category: &str,
    subcategory: &str,
) -> Option<&'static ProductTemplate> {
    CURATED
        .iter()
        .find(|t| t.name == name && t.category == category && t.subcategory == subcategory)
}

/// All curated templates.
pub fn curated_templates() -> &'static [ProductTemplate] {
    CURATED
}

macro_rules! women_new_in {
    (
        $name:expr,
        $short:expr, $long:expr, $materials:expr, $care:expr, $fit:expr,
        limited: $limited:expr
    ) => {
        ProductTemplate {
            name: $name,
            category: "Women",
            subcategory: "New In",
            short_description: $short,
            long_description: $long,
            materials: $materials,
            care_instructions: $care,
            fit_notes: $fit,
            is_limited_edition: $limited,
        }
    };
}

const CURATED: &[ProductTemplate] = &[
    women_new_in!(
        "Ribbed Tank Top",
        "Essential ribbed tank top with a relaxed fit. Perfect for layering or wearing alone.",
        "This versatile ribbed tank top is crafted from premium cotton blend for ultimate comfort. The relaxed fit allows for easy movement while maintaining a polished silhouette. Perfect as a base layer or worn alone, this piece transitions seamlessly from day to night.",
        &["95% Cotton", "5% Elastane"],
        &["Machine wash cold", "Tumble dry low", "Do not bleach"],
        "Relaxed fit. True to size.",
        limited: false
    ),
    women_new_in!(
        "Oversized Blazer",
        "Modern oversized blazer with structured shoulders. A versatile piece for any wardrobe.",
        "Elevate your look with this contemporary oversized blazer featuring structured shoulders and a relaxed silhouette. Crafted from premium wool blend fabric, this piece offers both sophistication and comfort. The single-button closure and notched lapel create a timeless appeal.",
        &["70% Wool", "25% Polyester", "5% Elastane"],
        &["Dry clean only"],
        "Oversized fit. Size down for a more fitted look.",
        limited: false
    ),
    women_new_in!(
        "Wide Leg Trousers",
        "Flowing wide-leg trousers in premium fabric. Comfortable and elegant.",
        "Make a statement with these elegant wide-leg trousers that combine comfort with sophistication. The flowing silhouette creates a flattering line while the premium fabric ensures all-day comfort. Perfect for both professional and casual settings.",
        &["65% Polyester", "30% Viscose", "5% Elastane"],
        &["Machine wash cold", "Hang dry", "Iron on low heat"],
        "Wide leg fit. High-waisted design.",
        limited: false
    ),
    women_new_in!(
        "Silk Midi Dress",
        "Elegant silk midi dress with a relaxed silhouette. Perfect for special occasions.",
        "Experience luxury with this beautifully crafted silk midi dress. The relaxed silhouette drapes elegantly while the midi length offers timeless sophistication. Perfect for weddings, dinners, or any occasion where you want to feel effortlessly elegant.",
        &["100% Silk"],
        &["Dry clean only", "Store flat or on padded hanger"],
        "Relaxed fit. Flowing silhouette.",
        limited: true
    ),
    women_new_in!(
        "Cropped Cardigan",
        "Soft cropped cardigan in a classic knit. Ideal for transitional weather.",
        "Layer in style with this soft cropped cardigan featuring a classic knit pattern. The cropped length pairs perfectly with high-waisted pieces, while the button-front closure adds versatility. Made from premium yarn for a luxurious feel.",
        &["80% Acrylic", "15% Wool", "5% Nylon"],
        &["Machine wash cold", "Lay flat to dry", "Do not tumble dry"],
        "Cropped fit. True to size.",
        limited: false
    ),
    women_new_in!(
        "Leather Ankle Boots",
        "Classic leather ankle boots with a modern twist. Comfortable and stylish.",
        "Step into timeless style with these premium leather ankle boots. Crafted from genuine leather with a comfortable block heel, these boots offer both style and comfort. The side zip closure ensures easy wear while the durable sole provides excellent traction.",
        &["Genuine Leather Upper", "Leather Lining", "Rubber Sole"],
        &["Clean with leather conditioner", "Protect from water", "Use shoe trees"],
        "True to size. Comfortable block heel.",
        limited: false
    ),
    women_new_in!(
        "Oversized T-Shirt",
        "Comfortable oversized t-shirt in premium cotton. Perfect for casual days.",
        "The perfect everyday t-shirt with an oversized fit that feels effortlessly cool. Made from premium organic cotton, this piece offers exceptional softness and breathability. The relaxed silhouette works for both casual and dressed-up looks.",
        &["100% Organic Cotton"],
        &["Machine wash cold", "Tumble dry low", "Do not bleach"],
        "Oversized fit. Size down for a more fitted look.",
        limited: false
    ),
    women_new_in!(
        "High-Waisted Jeans",
        "Classic high-waisted jeans with a flattering fit. Timeless denim style.",
        "Rediscover the perfect pair of jeans with these high-waisted beauties. The flattering rise elongates your silhouette while the premium denim offers comfort and durability. The straight-leg cut provides a modern, versatile look that works for any occasion.",
        &["98% Cotton", "2% Elastane"],
        &["Machine wash cold", "Inside out", "Hang dry", "Do not bleach"],
        "High-waisted. True to size.",
        limited: false
    ),
    women_new_in!(
        "Knit Midi Skirt",
        "Elegant knit midi skirt with a comfortable fit. Versatile and stylish.",
        "Add sophistication to your wardrobe with this elegant knit midi skirt. The comfortable stretch fabric moves with you while the midi length offers timeless appeal. Perfect for both office and weekend wear, this piece pairs beautifully with everything.",
        &["75% Polyester", "20% Viscose", "5% Elastane"],
        &["Machine wash cold", "Lay flat to dry", "Do not wring"],
        "Fitted at waist, A-line silhouette.",
        limited: false
    ),
    women_new_in!(
        "Structured Handbag",
        "Classic structured handbag in premium leather. Perfect for everyday use.",
        "Carry your essentials in style with this beautifully structured handbag. Crafted from premium genuine leather with reinforced corners and a secure top zip closure. The adjustable shoulder strap and top handles offer versatile carrying options.",
        &["Genuine Leather", "Metal Hardware", "Cotton Lining"],
        &["Clean with leather conditioner", "Store in dust bag", "Avoid direct sunlight"],
        "One size. Dimensions: 12\" x 9\" x 5\"",
        limited: false
    ),
    women_new_in!(
        "Satin Slip Dress",
        "Elegant satin slip dress with adjustable straps. Perfect for evening wear.",
        "Channel timeless elegance with this luxurious satin slip dress. The adjustable straps ensure a perfect fit while the flowing fabric drapes beautifully. The midi length and bias cut create a flattering silhouette that moves gracefully.",
        &["100% Polyester Satin"],
        &["Hand wash cold", "Hang dry", "Do not wring", "Iron on low heat"],
        "Fitted silhouette. Adjustable straps.",
        limited: false
    ),
    women_new_in!(
        "Wool Blend Scarf",
        "Luxurious wool blend scarf in a classic pattern. Warm and stylish.",
        "Wrap yourself in luxury with this premium wool blend scarf featuring a timeless pattern. The generous size allows for multiple styling options while the soft texture feels gentle against the skin. A perfect accessory for transitional weather.",
        &["70% Wool", "30% Acrylic"],
        &["Hand wash cold", "Lay flat to dry", "Do not tumble dry"],
        "One size. 70\" x 12\"",
        limited: false
    ),
    women_new_in!(
        "Tailored Blazer",
        "Classic tailored blazer with a modern fit. Perfect for professional settings.",
        "Command attention with this impeccably tailored blazer featuring a modern silhouette. The structured shoulders and nipped-in waist create a flattering shape while the premium fabric ensures durability. A wardrobe essential for the modern professional.",
        &["65% Polyester", "30% Wool", "5% Elastane"],
        &["Dry clean only"],
        "Tailored fit. True to size.",
        limited: false
    ),
    women_new_in!(
        "Wool Blend Coat",
        "Classic wool blend coat with a tailored fit. Timeless elegance for winter.",
        "Brave the elements in style with this classic wool blend coat. The tailored fit creates a flattering silhouette while the premium fabric offers exceptional warmth. The notched lapel and single-button closure add timeless sophistication.",
        &["70% Wool", "25% Polyester", "5% Other"],
        &["Dry clean only"],
        "Tailored fit. True to size.",
        limited: false
    ),
    women_new_in!(
        "Trench Coat",
        "Iconic trench coat in water-resistant fabric. A wardrobe essential.",
        "Channel timeless sophistication with this iconic trench coat. The water-resistant fabric keeps you protected from the elements while the classic design never goes out of style. The belted waist and double-breasted closure create a flattering silhouette.",
        &["65% Polyester", "35% Cotton"],
        &["Dry clean only"],
        "Classic fit. True to size.",
        limited: false
    ),
    women_new_in!(
        "Leather Belt",
        "Classic leather belt with a modern buckle. Perfect for finishing any look.",
        "Complete your outfit with this classic leather belt featuring a modern buckle design. Crafted from genuine leather, this piece offers durability and style. The adjustable sizing ensures a perfect fit for any waist.",
        &["Genuine Leather", "Metal Buckle"],
        &["Clean with leather conditioner"],
        "Adjustable. Multiple size options.",
        limited: false
    ),
    women_new_in!(
        "Cashmere Blend Scarf",
        "Luxurious cashmere blend scarf with a soft texture. Warm and elegant.",
        "Indulge in luxury with this premium cashmere blend scarf. The soft texture feels gentle against the skin while the generous size allows for multiple styling options. A perfect accessory for cold weather that adds sophistication to any outfit.",
        &["30% Cashmere", "50% Wool", "20% Acrylic"],
        &["Hand wash cold", "Lay flat to dry", "Do not wring"],
        "One size. 72\" x 14\"",
        limited: false
    ),
    women_new_in!(
        "Silk Scarf",
        "Elegant silk scarf with a beautiful print. Perfect for adding a touch of luxury.",
        "Add a touch of luxury to any outfit with this elegant silk scarf featuring a beautiful print. The premium silk fabric offers exceptional softness and drape while the versatile size allows for multiple styling options. A perfect finishing touch.",
        &["100% Silk"],
        &["Dry clean only", "Store flat"],
        "One size. 35\" x 35\"",
        limited: false
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_template_requires_same_subcategory() {
        assert!(find_template("Silk Midi Dress", "Women", "New In").is_some());
        assert!(find_template("Silk Midi Dress", "Women", "Dresses").is_none());
        assert!(find_template("Trench Coat", "Women", "Outerwear").is_none());
    }

    #[test]
    fn test_apply_overlays_copy_only() {
        let template = find_template("Silk Midi Dress", "Women", "New In").unwrap();
        let mut options = ProductOptions {
            is_new: true,
            is_best_seller: true,
            tags: vec!["women".to_string(), "new in".to_string()],
            ..Default::default()
        };
        template.apply(&mut options);

        assert_eq!(options.materials, vec!["100% Silk".to_string()]);
        assert_eq!(options.fit_notes.as_deref(), Some("Relaxed fit. Flowing silhouette."));
        assert!(options.is_limited_edition);
        // Drawn flags survive the overlay.
        assert!(options.is_new);
        assert!(options.is_best_seller);
        assert_eq!(options.tags, vec!["women".to_string(), "new in".to_string()]);
    }

    #[test]
    fn test_curated_names_are_unique() {
        let mut names: Vec<&str> = curated_templates().iter().map(|t| t.name).collect();
        names.sort_unstable();
        let before = names.len();
        names.dedup();
        assert_eq!(before, names.len());
    }
}
