//! Product, review and option types.

use crate::ids::{ProductId, ReviewId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Brand used when a template does not name one.
pub const DEFAULT_BRAND: &str = "Market Street";

/// One purchasable color variant in the catalog.
///
/// Records are built once per catalog build and never mutated afterwards;
/// queries only filter and reorder them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Variant identifier (base id for the first color, `{base}-{color}` after).
    pub id: ProductId,
    /// Display name, shared by all variants of a product.
    pub name: String,
    /// Brand name.
    pub brand: String,
    /// Top-level category ("Women", "Men", "Kids").
    pub category: String,
    /// Subcategory label (e.g. "New In", "Girls Tops").
    pub subcategory: String,
    /// Selling price.
    pub price: Money,
    /// Pre-sale price, present only when the product is discounted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Money>,
    /// Rounded percentage off the original price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<u32>,
    /// Primary image path.
    pub image: String,
    /// All image paths, in display order.
    pub images: Vec<String>,
    /// Color this record represents.
    pub color: String,
    /// Colors offered across the variant group.
    pub colors: Vec<String>,
    /// Sizes offered.
    pub sizes: Vec<String>,
    /// Whether any stock is available online.
    pub in_stock: bool,
    /// Units available online.
    pub stock_quantity: u32,
    /// Whether the product can be picked up in store.
    pub store_available: bool,
    /// Average rating, one decimal place.
    pub rating: f64,
    /// Total number of reviews claimed for the product.
    pub review_count: u32,
    /// Sample of generated reviews.
    pub reviews: Vec<Review>,
    /// Stock keeping unit.
    pub sku: String,
    /// Short description for listings.
    pub short_description: String,
    /// Long description for the product detail view.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Fabric composition.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub materials: Vec<String>,
    /// Care instructions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub care_instructions: Vec<String>,
    /// Fit guidance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fit_notes: Option<String>,
    pub is_new: bool,
    pub is_best_seller: bool,
    pub is_limited_edition: bool,
    pub is_online_only: bool,
    /// Banner text shown on the product card.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotional_message: Option<String>,
    /// Tags for filtering/search.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Product {
    /// Check if the product is discounted.
    pub fn is_on_sale(&self) -> bool {
        self.original_price
            .map(|original| original.amount_cents > self.price.amount_cents)
            .unwrap_or(false)
    }

    /// Key identifying the variant group this record belongs to.
    pub fn group_key(&self) -> (&str, &str, &str) {
        (&self.name, &self.category, &self.subcategory)
    }

    /// Check if the product carries a tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Check if the product is offered in a size.
    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s.eq_ignore_ascii_case(size))
    }
}

/// A generated customer review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub id: ReviewId,
    pub author: String,
    /// Star rating, 4 or 5.
    pub rating: u8,
    /// Month and year, e.g. "October 2023".
    pub date: String,
    pub title: String,
    pub content: String,
    /// Whether the reviewer is a verified buyer.
    pub verified: bool,
    /// Number of "helpful" votes.
    pub helpful: u32,
}

/// Optional settings applied when creating a product.
///
/// Every field has a default; unset text fields fall back to generic
/// copy derived from the product name and subcategory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductOptions {
    /// Brand name. Default: [`DEFAULT_BRAND`].
    pub brand: Option<String>,
    /// Short description. Default: "{name} in {color}. {subcategory} from our {category} collection."
    pub short_description: Option<String>,
    /// Long description. Default: none.
    pub long_description: Option<String>,
    /// Default: empty.
    pub materials: Vec<String>,
    /// Default: empty.
    pub care_instructions: Vec<String>,
    /// Default: none.
    pub fit_notes: Option<String>,
    /// Default: false.
    pub is_new: bool,
    /// Default: false.
    pub is_best_seller: bool,
    /// Default: false.
    pub is_limited_edition: bool,
    /// Default: false.
    pub is_online_only: bool,
    /// Default: none.
    pub promotional_message: Option<String>,
    /// Fixed store availability. Default: drawn from the product's own stream.
    pub store_available: Option<bool>,
    /// Default: empty.
    pub tags: Vec<String>,
    /// Image directory override. Default: the slugged product id.
    pub image_slug: Option<String>,
}
