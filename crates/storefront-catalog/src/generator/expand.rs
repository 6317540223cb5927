//! Template expansion: product names into color-variant records.

use super::content;
use super::curated::find_template;
use super::images::{image_paths, ImageSlugs};
use super::templates::{SubcategoryTemplate, PALETTE};
use crate::catalog::{Product, ProductOptions, DEFAULT_BRAND};
use crate::ids::{slugify, ProductId};
use crate::money::{Currency, Money};
use crate::rng::{identifier_hash, SeededRandom, StreamPurpose};
use chrono::NaiveDate;
use tracing::debug;

/// Markup applied to a sale price to recover the original price.
pub const SALE_MARKUP: f64 = 1.3;

/// A product before it is split into color variants.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductShell {
    pub base_id: String,
    pub name: String,
    pub category: String,
    pub subcategory: String,
    pub price: Money,
    pub original_price: Option<Money>,
    pub colors: Vec<String>,
    pub sizes: Vec<String>,
}

/// Builds variant records from shells.
#[derive(Debug, Clone)]
pub struct ProductFactory {
    reference_date: NaiveDate,
    images_per_product: usize,
    default_brand: String,
}

impl ProductFactory {
    pub fn new(reference_date: NaiveDate, images_per_product: usize, default_brand: impl Into<String>) -> Self {
        Self {
            reference_date,
            images_per_product,
            default_brand: default_brand.into(),
        }
    }

    /// One record per declared color.
    ///
    /// The first color keeps the base id; later colors append the slugged
    /// color name.
    pub fn variants(&self, shell: &ProductShell, options: &ProductOptions) -> Vec<Product> {
        shell
            .colors
            .iter()
            .enumerate()
            .map(|(idx, color)| {
                let id = if idx == 0 {
                    shell.base_id.clone()
                } else {
                    format!("{}-{}", shell.base_id, slugify(color))
                };
                self.variant(shell, id, color, options)
            })
            .collect()
    }

    fn variant(&self, shell: &ProductShell, id: String, color: &str, options: &ProductOptions) -> Product {
        let slug = options
            .image_slug
            .clone()
            .unwrap_or_else(|| slugify(&id));
        let images = image_paths(&slug, self.images_per_product);
        let stock = content::stock_level(&id);
        let discount_percentage = shell
            .original_price
            .and_then(|original| shell.price.discount_from(&original));

        Product {
            brand: options
                .brand
                .clone()
                .unwrap_or_else(|| self.default_brand.clone()),
            name: shell.name.clone(),
            category: shell.category.clone(),
            subcategory: shell.subcategory.clone(),
            price: shell.price,
            original_price: shell.original_price,
            discount_percentage,
            image: images.first().cloned().unwrap_or_default(),
            images,
            color: color.to_string(),
            colors: shell.colors.clone(),
            sizes: shell.sizes.clone(),
            in_stock: stock.in_stock,
            stock_quantity: stock.quantity,
            store_available: options
                .store_available
                .unwrap_or_else(|| content::store_available(&id)),
            rating: content::rating(&id),
            review_count: content::review_count(&id),
            reviews: content::reviews(&id, self.reference_date),
            sku: content::sku(&shell.category, &shell.subcategory, &id, color),
            short_description: options.short_description.clone().unwrap_or_else(|| {
                format!(
                    "{} in {}. {} from our {} collection.",
                    shell.name, color, shell.subcategory, shell.category
                )
            }),
            description: options.long_description.clone(),
            materials: options.materials.clone(),
            care_instructions: options.care_instructions.clone(),
            fit_notes: options.fit_notes.clone(),
            is_new: options.is_new,
            is_best_seller: options.is_best_seller,
            is_limited_edition: options.is_limited_edition,
            is_online_only: options.is_online_only,
            promotional_message: options.promotional_message.clone(),
            tags: options.tags.clone(),
            id: ProductId::new(id),
        }
    }
}

impl Default for ProductFactory {
    fn default() -> Self {
        Self::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
            4,
            DEFAULT_BRAND,
        )
    }
}

/// Expand every name in a subcategory into its variants.
///
/// Draw order per name is fixed: price, sale, color count, new, best seller.
pub fn expand_subcategory(
    template: &SubcategoryTemplate,
    slugs: &ImageSlugs,
    factory: &ProductFactory,
) -> Vec<Product> {
    let category = template.department.label();
    let id_prefix = template.id_prefix();
    let mut products = Vec::new();

    for (idx, name) in template.names.iter().copied().enumerate() {
        let base_id = format!("{}-{}", id_prefix, idx + 1);
        let mut rng = SeededRandom::new(
            identifier_hash(&base_id) + StreamPurpose::Expansion.offset() + idx as i64,
        );

        let price = Money::from_decimal(
            template.band.min + rng.next_float(0.0, template.band.span()),
            Currency::USD,
        );
        let on_sale = rng.next() < 0.2;
        let original_price = on_sale.then(|| price.multiply_decimal(SALE_MARKUP));
        let color_count = rng.next_int(2, 5) as usize;

        let shell = ProductShell {
            base_id: base_id.clone(),
            name: name.to_string(),
            category: category.to_string(),
            subcategory: template.label.clone(),
            price,
            original_price,
            colors: PALETTE[..color_count].iter().map(|c| c.to_string()).collect(),
            sizes: template
                .department
                .sizes_for(name)
                .iter()
                .map(|s| s.to_string())
                .collect(),
        };

        let mut options = ProductOptions {
            short_description: Some(format!(
                "{} from our {} collection. Premium quality and timeless design.",
                name, template.label
            )),
            long_description: Some(format!(
                "Discover the perfect {} for your wardrobe. This carefully crafted piece combines quality materials with thoughtful design, ensuring both style and comfort. Perfect for everyday wear or special occasions.",
                name.to_lowercase()
            )),
            materials: vec!["Premium Materials".to_string()],
            care_instructions: vec!["Follow care label instructions".to_string()],
            fit_notes: Some("True to size".to_string()),
            is_new: rng.next() < 0.3,
            is_best_seller: rng.next() < 0.15,
            tags: vec![category.to_lowercase(), slugify(&template.label)],
            image_slug: Some(slugs.resolve(name, &base_id)),
            ..Default::default()
        };
        if let Some(curated) = find_template(name, category, &template.label) {
            curated.apply(&mut options);
        }

        products.extend(factory.variants(&shell, &options));
    }

    debug!(
        category,
        subcategory = %template.label,
        names = template.names.len(),
        variants = products.len(),
        "Expanded subcategory"
    );
    products
}
