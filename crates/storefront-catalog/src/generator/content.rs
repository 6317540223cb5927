//! Per-product derived content.
//!
//! Each attribute reads from its own stream keyed by the variant id, so
//! these functions are pure: the same id always yields the same values.

use crate::catalog::Review;
use crate::ids::ReviewId;
use crate::rng::{SeededRandom, StreamPurpose};
use chrono::{Duration, NaiveDate};

/// Online stock for a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockLevel {
    pub in_stock: bool,
    pub quantity: u32,
}

impl StockLevel {
    pub const OUT_OF_STOCK: StockLevel = StockLevel {
        in_stock: false,
        quantity: 0,
    };

    fn available(quantity: i64) -> Self {
        Self {
            in_stock: true,
            quantity: quantity as u32,
        }
    }
}

/// Stock tier: 10% out, 20% low, 40% medium, 30% high.
pub fn stock_level(product_id: &str) -> StockLevel {
    let mut rng = SeededRandom::for_purpose(product_id, StreamPurpose::Stock);
    let roll = rng.next();
    if roll < 0.1 {
        StockLevel::OUT_OF_STOCK
    } else if roll < 0.3 {
        StockLevel::available(rng.next_int(1, 6))
    } else if roll < 0.7 {
        StockLevel::available(rng.next_int(10, 30))
    } else {
        StockLevel::available(rng.next_int(30, 60))
    }
}

/// Rating between 4.0 and 5.0, one decimal place.
pub fn rating(product_id: &str) -> f64 {
    let mut rng = SeededRandom::for_purpose(product_id, StreamPurpose::Rating);
    ((4.0 + rng.next_float(0.0, 1.0)) * 10.0).round() / 10.0
}

/// Claimed review count in `[10, 210)`.
pub fn review_count(product_id: &str) -> u32 {
    let mut rng = SeededRandom::for_purpose(product_id, StreamPurpose::ReviewCount);
    rng.next_int(10, 210) as u32
}

/// Whether the variant can be picked up in store (about 70%).
pub fn store_available(product_id: &str) -> bool {
    let mut rng = SeededRandom::for_purpose(product_id, StreamPurpose::StoreAvailability);
    rng.next() > 0.3
}

const REVIEW_TITLES: &[&str] = &[
    "Great quality!",
    "Perfect fit",
    "Love it!",
    "Exactly as described",
    "Highly recommend",
    "Beautiful design",
    "Worth every penny",
    "Fast shipping",
    "Great value",
    "Exceeded expectations",
    "Very comfortable",
    "Stylish and modern",
    "Good material",
    "Perfect for the price",
    "Will buy again",
];

const REVIEW_BODIES: &[&str] = &[
    "This product exceeded my expectations. The quality is outstanding and it looks even better in person.",
    "Perfect fit and great quality. I'm very happy with this purchase and would definitely recommend it.",
    "Love the design and the material feels premium. Shipping was fast and packaging was excellent.",
    "Exactly as described in the photos. The fit is perfect and the quality is great for the price.",
    "Highly recommend this product. It's well-made, stylish, and comfortable to wear.",
    "Beautiful design and excellent craftsmanship. This is definitely worth the investment.",
    "Great value for money. The quality is much better than I expected at this price point.",
    "Very satisfied with this purchase. The product arrived quickly and in perfect condition.",
    "Comfortable, stylish, and well-made. I've already received several compliments on it.",
    "The material is high quality and the fit is perfect. I'm very happy with this purchase.",
    "This is exactly what I was looking for. Great quality and fast shipping.",
    "Beautiful piece that adds a modern touch to my wardrobe. Highly recommend!",
    "Excellent product with great attention to detail. Worth every penny.",
    "Very happy with the quality and fit. This is a great addition to my collection.",
    "Perfect for everyday wear. Comfortable, stylish, and well-made.",
];

const REVIEW_AUTHORS: &[&str] = &[
    "Sarah M.",
    "John D.",
    "Emily R.",
    "Michael T.",
    "Lisa K.",
    "David P.",
    "Jessica L.",
    "Chris W.",
    "Amanda B.",
    "Ryan S.",
    "Nicole H.",
    "Kevin M.",
    "Rachel T.",
    "Brian F.",
    "Michelle C.",
    "Daniel R.",
    "Ashley N.",
    "James K.",
    "Lauren G.",
    "Matthew D.",
];

/// Three to eight reviews dated within 180 days before `reference`.
///
/// Review `i` draws from its own stream seeded at `reviews_seed + i * 100`
/// in a fixed order: rating, title, body, author, age, verified, helpful.
pub fn reviews(product_id: &str, reference: NaiveDate) -> Vec<Review> {
    let mut rng = SeededRandom::for_purpose(product_id, StreamPurpose::Reviews);
    let base_seed = rng.seed();
    let count = rng.next_int(3, 9);

    (0..count)
        .map(|i| {
            let mut review_rng = SeededRandom::new(base_seed + i * 100);
            let rating = review_rng.next_int(4, 6) as u8;
            let title = REVIEW_TITLES[review_rng.next_index(REVIEW_TITLES.len())];
            let body = REVIEW_BODIES[review_rng.next_index(REVIEW_BODIES.len())];
            let author = REVIEW_AUTHORS[review_rng.next_index(REVIEW_AUTHORS.len())];
            let days_ago = review_rng.next_int(0, 180);

            Review {
                id: ReviewId::new(format!("{}-review-{}", product_id, i + 1)),
                author: author.to_string(),
                rating,
                date: month_year(reference - Duration::days(days_ago)),
                title: title.to_string(),
                content: body.to_string(),
                verified: review_rng.next() > 0.3,
                helpful: review_rng.next_int(0, 50) as u32,
            }
        })
        .collect()
}

/// Format a date as "{Month} {Year}".
pub fn month_year(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Build a variant SKU.
///
/// `{CA}-{SUB}-{last 6 of id}-{COL}`, upper-cased; whitespace is stripped
/// from the id and color parts.
pub fn sku(category: &str, subcategory: &str, product_id: &str, color: &str) -> String {
    let id_chars: Vec<char> = product_id.chars().collect();
    let id_tail: String = id_chars[id_chars.len().saturating_sub(6)..].iter().collect();
    format!(
        "{}-{}-{}-{}",
        prefix(category, 2).to_uppercase(),
        prefix(subcategory, 3).to_uppercase(),
        strip_whitespace(&id_tail).to_uppercase(),
        strip_whitespace(&prefix(color, 3)).to_uppercase(),
    )
}

fn prefix(value: &str, len: usize) -> String {
    value.chars().take(len).collect()
}

fn strip_whitespace(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}
