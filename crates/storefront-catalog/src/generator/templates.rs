//! Static product name tables and the rules attached to them.
//!
//! Names are listed per (category, subcategory) in catalog order. The
//! position of a name inside its list is part of the product id, so these
//! lists are append-only.

use crate::ids::slugify;
use serde::{Deserialize, Serialize};

/// Apparel sizes.
pub const APPAREL_SIZES: &[&str] = &["XS", "S", "M", "L", "XL", "XXL"];

/// Shoe sizes.
pub const SHOE_SIZES: &[&str] = &[
    "6", "6.5", "7", "7.5", "8", "8.5", "9", "9.5", "10", "10.5", "11",
];

/// Kids sizes.
pub const KIDS_SIZES: &[&str] = &["2T", "3T", "4T", "5", "6", "7", "8", "10", "12", "14"];

/// Color palette; a product takes a prefix of this list.
pub const PALETTE: &[&str] = &["Black", "White", "Navy", "Beige", "Gray"];

/// Kids subcategories, shared by both genders.
const KIDS_SUBCATEGORIES: &[&str] = &[
    "New In",
    "Outerwear",
    "Dresses",
    "Tops",
    "Bottoms",
    "Shoes",
    "Accessories",
];

/// Kids genders, in catalog order.
const KIDS_GENDERS: &[&str] = &["Girls", "Boys"];

/// Top-level catalog departments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    Women,
    Men,
    Kids,
}

impl Department {
    /// All departments in catalog order.
    pub const ALL: [Department; 3] = [Department::Women, Department::Men, Department::Kids];

    /// Category label as it appears on products.
    pub fn label(&self) -> &'static str {
        match self {
            Department::Women => "Women",
            Department::Men => "Men",
            Department::Kids => "Kids",
        }
    }

    /// Parse a category label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.label() == label)
    }

    /// Price range for a subcategory of this department.
    ///
    /// `subcategory` is the plain subcategory name, without the Kids gender
    /// prefix.
    pub fn price_band(&self, subcategory: &str) -> PriceBand {
        match (self, subcategory) {
            (Department::Women | Department::Men, "Shoes" | "Bags") => PriceBand::new(79.90, 249.90),
            (Department::Women, "Outerwear") => PriceBand::new(99.90, 299.90),
            (Department::Men, "Outerwear" | "Suits") => PriceBand::new(99.90, 399.90),
            (Department::Women | Department::Men, "Accessories") => PriceBand::new(29.90, 149.90),
            (Department::Women | Department::Men, _) => PriceBand::new(29.90, 199.90),
            (Department::Kids, "Shoes") => PriceBand::new(39.90, 99.90),
            (Department::Kids, "Accessories") => PriceBand::new(9.90, 49.90),
            (Department::Kids, _) => PriceBand::new(19.90, 79.90),
        }
    }

    /// Size run for a product name in this department.
    pub fn sizes_for(&self, name: &str) -> &'static [&'static str] {
        let lower = name.to_lowercase();
        if lower.contains("shoe") || lower.contains("boot") {
            SHOE_SIZES
        } else if *self == Department::Kids {
            KIDS_SIZES
        } else {
            APPAREL_SIZES
        }
    }
}

/// Inclusive-exclusive price range in decimal currency units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBand {
    pub min: f64,
    pub max: f64,
}

impl PriceBand {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Width of the band.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// One (category, subcategory) entry ready for expansion.
#[derive(Debug, Clone, PartialEq)]
pub struct SubcategoryTemplate {
    pub department: Department,
    /// Label written to products, e.g. "Girls Tops".
    pub label: String,
    pub band: PriceBand,
    pub names: &'static [&'static str],
}

impl SubcategoryTemplate {
    /// Prefix shared by every base id in this subcategory.
    pub fn id_prefix(&self) -> String {
        format!(
            "{}-{}",
            self.department.label().to_lowercase(),
            slugify(&self.label)
        )
    }
}

/// Every non-empty subcategory in catalog order.
///
/// Women and Men follow their table order. Kids walks Girls then Boys over
/// the shared subcategory list; Boys never get a Dresses entry.
pub fn subcategory_templates() -> Vec<SubcategoryTemplate> {
    let mut out = Vec::new();

    for (department, table) in [(Department::Women, WOMEN), (Department::Men, MEN)] {
        for (subcategory, names) in table.iter().copied() {
            if names.is_empty() {
                continue;
            }
            out.push(SubcategoryTemplate {
                department,
                label: subcategory.to_string(),
                band: department.price_band(subcategory),
                names,
            });
        }
    }

    for gender in KIDS_GENDERS.iter().copied() {
        let table = if gender == "Girls" { GIRLS } else { BOYS };
        for subcategory in KIDS_SUBCATEGORIES.iter().copied() {
            if gender == "Boys" && subcategory == "Dresses" {
                continue;
            }
            let names = match lookup(table, subcategory) {
                Some(names) if !names.is_empty() => names,
                _ => continue,
            };
            out.push(SubcategoryTemplate {
                department: Department::Kids,
                label: format!("{} {}", gender, subcategory),
                band: Department::Kids.price_band(subcategory),
                names,
            });
        }
    }

    out
}

fn lookup(
    table: &'static [(&'static str, &'static [&'static str])],
    subcategory: &str,
) -> Option<&'static [&'static str]> {
    table
        .iter()
        .find(|(key, _)| *key == subcategory)
        .map(|(_, names)| *names)
}

const WOMEN: &[(&str, &[&str])] = &[
    (
        "New In",
        &[
            "Ribbed Tank Top", "Oversized Blazer", "Wide Leg Trousers", "Silk Midi Dress", "Cropped Cardigan",
            "Leather Ankle Boots", "Oversized T-Shirt", "High-Waisted Jeans", "Knit Midi Skirt", "Structured Handbag",
            "Satin Slip Dress", "Wool Blend Scarf", "Tailored Blazer", "Ribbed Knit Sweater", "Pleated Midi Skirt",
            "Leather Crossbody Bag", "Oversized Denim Shirt", "Wool Blend Coat", "Silk Blouse", "Wide Leg Jeans",
            "Knit Cardigan", "Leather Loafers", "Trench Coat", "Ribbed Bodysuit", "Midi Wrap Dress",
            "Structured Tote Bag", "Oversized Shirt Dress", "Knit Pants", "Leather Belt", "Cashmere Blend Scarf",
            "Denim Jacket", "Silk Scarf", "Wool Blend Blazer", "Cropped Sweater", "A-Line Skirt",
        ],
    ),
    (
        "Outerwear",
        &[
            "Wool Coat", "Trench Coat", "Puffer Jacket", "Leather Jacket", "Denim Jacket",
            "Wool Blend Coat", "Quilted Jacket", "Faux Fur Coat", "Parka", "Bomber Jacket",
            "Pea Coat", "Duffle Coat", "Windbreaker", "Fleece Jacket", "Cropped Puffer",
            "Long Wool Coat", "Cropped Leather Jacket", "Hooded Parka", "Wool Blazer Coat", "Puffer Vest",
            "Trench Coat", "Wool Blend Trench", "Quilted Vest", "Faux Leather Jacket", "Cropped Denim Jacket",
            "Long Puffer Coat", "Wool Pea Coat", "Bomber Jacket", "Hooded Windbreaker", "Fleece-Lined Jacket",
            "Cropped Wool Coat", "Quilted Parka", "Faux Fur Vest", "Leather Moto Jacket", "Denim Trucker Jacket",
        ],
    ),
    (
        "Dresses",
        &[
            "Midi Wrap Dress", "Silk Slip Dress", "A-Line Dress", "Shirt Dress", "Maxi Dress",
            "Bodycon Dress", "Shift Dress", "Floral Print Dress", "Pleated Dress", "Linen Dress",
            "Knit Dress", "Satin Dress", "Denim Dress", "Tunic Dress", "Sundress",
            "Cocktail Dress", "Casual Dress", "Formal Dress", "Wrap Dress", "Fit and Flare Dress",
            "Sheath Dress", "Empire Waist Dress", "Belted Dress", "Off-Shoulder Dress", "V-Neck Dress",
            "Long Sleeve Dress", "Sleeveless Dress", "Short Sleeve Dress", "Asymmetric Dress", "Tiered Dress",
            "Ruffled Dress", "Lace Dress", "Chiffon Dress", "Cotton Dress", "Jersey Dress",
        ],
    ),
    (
        "Tops",
        &[
            "Ribbed Tank Top", "Oversized T-Shirt", "Crop Top", "Blouse", "Tunic Top",
            "Peplum Top", "Off-Shoulder Top", "Bardot Top", "Halter Top", "Tie-Front Top",
            "Wrap Top", "Button-Down Shirt", "Oversized Shirt", "T-Shirt", "Long Sleeve Top",
            "Short Sleeve Top", "Sleeveless Top", "V-Neck Top", "Round Neck Top", "Square Neck Top",
            "Ribbed Top", "Knit Top", "Silk Top", "Cotton Top", "Linen Top",
            "Blouse", "Shirt", "Tank", "Camisole", "Bodysuit",
            "Turtleneck", "Mock Neck", "Cowl Neck", "Boat Neck", "Sweetheart Neck",
        ],
    ),
    (
        "Knitwear",
        &[
            "Ribbed Knit Sweater", "Cropped Cardigan", "Knit Cardigan", "Cable Knit Sweater", "Turtleneck Sweater",
            "V-Neck Sweater", "Crew Neck Sweater", "Oversized Sweater", "Cropped Sweater", "Knit Dress",
            "Knit Vest", "Knit Pants", "Knit Skirt", "Knit Top", "Knit Blazer",
            "Chunky Knit Sweater", "Fine Gauge Sweater", "Striped Sweater", "Solid Sweater", "Textured Sweater",
            "Merino Wool Sweater", "Cashmere Sweater", "Cotton Sweater", "Acrylic Sweater", "Wool Blend Sweater",
            "Hooded Sweater", "Zip-Up Sweater", "Button-Up Cardigan", "Open Cardigan", "Long Cardigan",
            "Short Cardigan", "Cropped Cardigan", "Oversized Cardigan", "Fitted Cardigan", "Chunky Cardigan",
        ],
    ),
    (
        "Shirts",
        &[
            "Classic Shirt", "Oversized Shirt", "Denim Shirt", "Flannel Shirt", "Chambray Shirt",
            "Oxford Shirt", "Poplin Shirt", "Linen Shirt", "Silk Shirt", "Cotton Shirt",
            "Button-Down Shirt", "Button-Up Shirt", "Long Sleeve Shirt", "Short Sleeve Shirt", "Sleeveless Shirt",
            "Tie-Front Shirt", "Wrap Shirt", "Peplum Shirt", "Tunic Shirt", "Oversized Shirt",
            "Fitted Shirt", "Relaxed Shirt", "Tailored Shirt", "Casual Shirt", "Formal Shirt",
            "Striped Shirt", "Solid Shirt", "Patterned Shirt", "Checked Shirt", "Plaid Shirt",
            "White Shirt", "Blue Shirt", "Black Shirt", "Navy Shirt", "Striped Shirt",
        ],
    ),
    (
        "Jeans",
        &[
            "High-Waisted Jeans", "Wide Leg Jeans", "Straight Leg Jeans", "Skinny Jeans", "Bootcut Jeans",
            "Flare Jeans", "Boyfriend Jeans", "Mom Jeans", "Cropped Jeans", "Ankle Jeans",
            "Distressed Jeans", "Ripped Jeans", "Raw Denim Jeans", "Stretch Jeans", "Non-Stretch Jeans",
            "Dark Wash Jeans", "Light Wash Jeans", "Medium Wash Jeans", "Black Jeans", "White Jeans",
            "Colored Jeans", "High-Rise Jeans", "Mid-Rise Jeans", "Low-Rise Jeans", "Super High-Rise Jeans",
            "Relaxed Fit Jeans", "Slim Fit Jeans", "Regular Fit Jeans", "Loose Fit Jeans", "Tapered Jeans",
            "Cropped Wide Leg Jeans", "Cropped Straight Jeans", "Cropped Skinny Jeans", "Long Wide Leg Jeans", "Long Straight Jeans",
        ],
    ),
    (
        "Trousers",
        &[
            "Wide Leg Trousers", "Tailored Pants", "Knit Pants", "Cargo Pants", "Chino Pants",
            "Pleated Pants", "Flat Front Pants", "High-Waisted Pants", "Mid-Rise Pants", "Low-Rise Pants",
            "Cropped Pants", "Full Length Pants", "Ankle Pants", "Flare Pants", "Straight Leg Pants",
            "Tapered Pants", "Relaxed Fit Pants", "Slim Fit Pants", "Regular Fit Pants", "Loose Fit Pants",
            "Linen Pants", "Cotton Pants", "Wool Pants", "Polyester Pants", "Viscose Pants",
            "Formal Pants", "Casual Pants", "Work Pants", "Dress Pants", "Smart Pants",
            "Culottes", "Palazzo Pants", "Gaucho Pants", "Harem Pants", "Jogger Pants",
        ],
    ),
    (
        "Skirts",
        &[
            "Knit Midi Skirt", "Pleated Midi Skirt", "A-Line Skirt", "Pencil Skirt", "Wrap Skirt",
            "Maxi Skirt", "Mini Skirt", "Midi Skirt", "A-Line Skirt", "Pleated Skirt",
            "Flared Skirt", "Straight Skirt", "Tiered Skirt", "Ruffled Skirt", "Asymmetric Skirt",
            "High-Waisted Skirt", "Mid-Rise Skirt", "Low-Rise Skirt", "Elastic Waist Skirt", "Zipper Skirt",
            "Button Skirt", "Tie Skirt", "Wrap Skirt", "Pull-On Skirt", "Side Slit Skirt",
            "Front Slit Skirt", "Back Slit Skirt", "No Slit Skirt", "Linen Skirt", "Cotton Skirt",
            "Denim Skirt", "Leather Skirt", "Suede Skirt", "Silk Skirt", "Wool Skirt",
        ],
    ),
    (
        "Blazers",
        &[
            "Oversized Blazer", "Tailored Blazer", "Wool Blend Blazer", "Cropped Blazer", "Long Blazer",
            "Single-Breasted Blazer", "Double-Breasted Blazer", "Unstructured Blazer", "Structured Blazer", "Relaxed Blazer",
            "Fitted Blazer", "Oversized Blazer", "Classic Blazer", "Modern Blazer", "Vintage Blazer",
            "Black Blazer", "Navy Blazer", "Gray Blazer", "Beige Blazer", "White Blazer",
            "Striped Blazer", "Solid Blazer", "Patterned Blazer", "Checked Blazer", "Plaid Blazer",
            "Linen Blazer", "Cotton Blazer", "Wool Blazer", "Polyester Blazer", "Blend Blazer",
            "Casual Blazer", "Formal Blazer", "Work Blazer", "Dress Blazer", "Smart Blazer",
        ],
    ),
    (
        "Activewear",
        &[
            "Yoga Pants", "Leggings", "Sports Bra", "Athletic Top", "Running Shorts",
            "Workout Tank", "Athletic Dress", "Sports Jacket", "Athletic Skirt", "Gym Shorts",
            "Compression Leggings", "High-Waisted Leggings", "Cropped Leggings", "Full Length Leggings", "Capri Leggings",
            "Athletic T-Shirt", "Athletic Tank", "Athletic Long Sleeve", "Athletic Hoodie", "Athletic Jacket",
            "Yoga Top", "Pilates Top", "Running Top", "Training Top", "Fitness Top",
            "Athletic Pants", "Jogger Pants", "Track Pants", "Sweatpants", "Athletic Shorts",
            "Sports Bra", "High-Support Bra", "Medium-Support Bra", "Low-Support Bra", "Racerback Bra",
        ],
    ),
    (
        "Shoes",
        &[
            "Leather Ankle Boots", "Leather Loafers", "Sneakers", "Heeled Boots", "Flat Boots",
            "Ankle Boots", "Knee-High Boots", "Over-The-Knee Boots", "Chelsea Boots", "Combat Boots",
            "Heeled Sandals", "Flat Sandals", "Platform Sandals", "Wedge Sandals", "Slide Sandals",
            "Pumps", "Heels", "Flats", "Loafers", "Mules",
            "Oxfords", "Derby Shoes", "Brogues", "Monk Straps", "Espadrilles",
            "Sneakers", "Running Shoes", "Training Shoes", "Casual Sneakers", "Fashion Sneakers",
            "Ballet Flats", "Mary Janes", "T-Strap Shoes", "Slingback Shoes", "Pointed Toe Shoes",
        ],
    ),
    (
        "Bags",
        &[
            "Structured Handbag", "Leather Crossbody Bag", "Structured Tote Bag", "Shoulder Bag", "Clutch Bag",
            "Backpack", "Messenger Bag", "Satchel Bag", "Hobo Bag", "Bucket Bag",
            "Tote Bag", "Shopping Bag", "Beach Bag", "Gym Bag", "Travel Bag",
            "Crossbody Bag", "Shoulder Bag", "Handbag", "Clutch", "Evening Bag",
            "Leather Bag", "Canvas Bag", "Nylon Bag", "Straw Bag", "Fabric Bag",
            "Small Bag", "Medium Bag", "Large Bag", "Mini Bag", "Oversized Bag",
            "Chain Bag", "Strap Bag", "Handle Bag", "Top Handle Bag", "Double Handle Bag",
        ],
    ),
    (
        "Accessories",
        &[
            "Wool Blend Scarf", "Cashmere Blend Scarf", "Silk Scarf", "Leather Belt", "Chain Belt",
            "Wide Belt", "Narrow Belt", "Chain Belt", "Leather Belt", "Fabric Belt",
            "Hat", "Cap", "Beanie", "Beret", "Fedora",
            "Sunglasses", "Eyeglasses", "Reading Glasses", "Sunglasses", "Prescription Glasses",
            "Jewelry", "Necklace", "Earrings", "Bracelet", "Ring",
            "Watch", "Smartwatch", "Fitness Tracker", "Watch", "Timepiece",
            "Gloves", "Mittens", "Fingerless Gloves", "Leather Gloves", "Wool Gloves",
        ],
    ),
];

const MEN: &[(&str, &[&str])] = &[
    (
        "New In",
        &[
            "Classic Oxford Shirt", "Slim Fit Jeans", "Cotton T-Shirt", "Chino Pants", "Hooded Sweatshirt",
            "Leather Sneakers", "Denim Jacket", "Knit Sweater", "Cargo Pants", "Leather Boots",
            "Button-Down Shirt", "Jogger Pants", "Polo Shirt", "Wool Coat", "Canvas Sneakers",
            "Bomber Jacket", "Corduroy Pants", "Henley Shirt", "Leather Jacket", "Track Pants",
            "Oxford Shoes", "Quilted Jacket", "Cargo Shorts", "Turtleneck Sweater", "Parka",
            "Sneakers", "Chore Jacket", "Cargo Pants", "Flannel Shirt", "Wool Blazer",
            "Leather Loafers", "Puffer Vest", "Cargo Shorts", "Hoodie", "Trench Coat",
        ],
    ),
    (
        "Outerwear",
        &[
            "Wool Coat", "Trench Coat", "Puffer Jacket", "Leather Jacket", "Denim Jacket",
            "Bomber Jacket", "Parka", "Quilted Jacket", "Windbreaker", "Fleece Jacket",
            "Pea Coat", "Duffle Coat", "Hooded Jacket", "Varsity Jacket", "Track Jacket",
            "Long Wool Coat", "Cropped Leather Jacket", "Hooded Parka", "Wool Blazer Coat", "Puffer Vest",
            "Trench Coat", "Wool Blend Trench", "Quilted Vest", "Faux Leather Jacket", "Cropped Denim Jacket",
            "Long Puffer Coat", "Wool Pea Coat", "Bomber Jacket", "Hooded Windbreaker", "Fleece-Lined Jacket",
            "Cropped Wool Coat", "Quilted Parka", "Faux Fur Vest", "Leather Moto Jacket", "Denim Trucker Jacket",
        ],
    ),
    (
        "Jackets & Blazers",
        &[
            "Suit Jacket", "Blazer", "Sports Jacket", "Tuxedo Jacket", "Dinner Jacket",
            "Single-Breasted Blazer", "Double-Breasted Blazer", "Unstructured Blazer", "Structured Blazer", "Relaxed Blazer",
            "Fitted Blazer", "Oversized Blazer", "Classic Blazer", "Modern Blazer", "Vintage Blazer",
            "Black Blazer", "Navy Blazer", "Gray Blazer", "Beige Blazer", "Brown Blazer",
            "Striped Blazer", "Solid Blazer", "Patterned Blazer", "Checked Blazer", "Plaid Blazer",
            "Linen Blazer", "Cotton Blazer", "Wool Blazer", "Polyester Blazer", "Blend Blazer",
            "Casual Blazer", "Formal Blazer", "Work Blazer", "Dress Blazer", "Smart Blazer",
        ],
    ),
    (
        "Shirts",
        &[
            "Classic Shirt", "Oversized Shirt", "Denim Shirt", "Flannel Shirt", "Chambray Shirt",
            "Oxford Shirt", "Poplin Shirt", "Linen Shirt", "Cotton Shirt", "Button-Down Shirt",
            "Button-Up Shirt", "Long Sleeve Shirt", "Short Sleeve Shirt", "Sleeveless Shirt", "Dress Shirt",
            "Casual Shirt", "Formal Shirt", "Work Shirt", "Dress Shirt", "Smart Shirt",
            "Striped Shirt", "Solid Shirt", "Patterned Shirt", "Checked Shirt", "Plaid Shirt",
            "White Shirt", "Blue Shirt", "Black Shirt", "Navy Shirt", "Gray Shirt",
            "Fitted Shirt", "Relaxed Shirt", "Tailored Shirt", "Oversized Shirt", "Classic Fit Shirt",
        ],
    ),
    (
        "T-Shirts",
        &[
            "Cotton T-Shirt", "V-Neck T-Shirt", "Crew Neck T-Shirt", "Henley Shirt", "Pocket T-Shirt",
            "Long Sleeve T-Shirt", "Short Sleeve T-Shirt", "Sleeveless T-Shirt", "Tank Top", "A-Shirt",
            "Oversized T-Shirt", "Fitted T-Shirt", "Relaxed T-Shirt", "Classic Fit T-Shirt", "Slim Fit T-Shirt",
            "Basic T-Shirt", "Graphic T-Shirt", "Plain T-Shirt", "Striped T-Shirt", "Solid T-Shirt",
            "White T-Shirt", "Black T-Shirt", "Gray T-Shirt", "Navy T-Shirt", "White T-Shirt",
            "Cotton T-Shirt", "Polyester T-Shirt", "Blend T-Shirt", "Organic Cotton T-Shirt", "Premium T-Shirt",
            "Casual T-Shirt", "Athletic T-Shirt", "Workout T-Shirt", "Everyday T-Shirt", "Essential T-Shirt",
        ],
    ),
    (
        "Knitwear",
        &[
            "Knit Sweater", "Turtleneck Sweater", "V-Neck Sweater", "Crew Neck Sweater", "Cardigan",
            "Hoodie", "Sweatshirt", "Pullover", "Zip-Up Sweater", "Cable Knit Sweater",
            "Chunky Knit Sweater", "Fine Gauge Sweater", "Striped Sweater", "Solid Sweater", "Textured Sweater",
            "Merino Wool Sweater", "Cashmere Sweater", "Cotton Sweater", "Acrylic Sweater", "Wool Blend Sweater",
            "Oversized Sweater", "Fitted Sweater", "Relaxed Sweater", "Classic Fit Sweater", "Slim Fit Sweater",
            "Long Sleeve Sweater", "Short Sleeve Sweater", "Sleeveless Sweater", "Cropped Sweater", "Full Length Sweater",
            "Casual Sweater", "Formal Sweater", "Work Sweater", "Dress Sweater", "Smart Sweater",
        ],
    ),
    (
        "Jeans",
        &[
            "Slim Fit Jeans", "Straight Leg Jeans", "Skinny Jeans", "Relaxed Fit Jeans", "Bootcut Jeans",
            "Tapered Jeans", "Wide Leg Jeans", "Cropped Jeans", "Ankle Jeans", "Full Length Jeans",
            "Distressed Jeans", "Ripped Jeans", "Raw Denim Jeans", "Stretch Jeans", "Non-Stretch Jeans",
            "Dark Wash Jeans", "Light Wash Jeans", "Medium Wash Jeans", "Black Jeans", "Indigo Jeans",
            "High-Rise Jeans", "Mid-Rise Jeans", "Low-Rise Jeans", "Regular Rise Jeans", "Super High-Rise Jeans",
            "Regular Fit Jeans", "Slim Fit Jeans", "Loose Fit Jeans", "Tight Fit Jeans", "Comfortable Fit Jeans",
            "Classic Jeans", "Modern Jeans", "Vintage Jeans", "Contemporary Jeans", "Timeless Jeans",
        ],
    ),
    (
        "Trousers",
        &[
            "Chino Pants", "Cargo Pants", "Jogger Pants", "Track Pants", "Dress Pants",
            "Pleated Pants", "Flat Front Pants", "High-Waisted Pants", "Mid-Rise Pants", "Low-Rise Pants",
            "Cropped Pants", "Full Length Pants", "Ankle Pants", "Flare Pants", "Straight Leg Pants",
            "Tapered Pants", "Relaxed Fit Pants", "Slim Fit Pants", "Regular Fit Pants", "Loose Fit Pants",
            "Linen Pants", "Cotton Pants", "Wool Pants", "Polyester Pants", "Viscose Pants",
            "Formal Pants", "Casual Pants", "Work Pants", "Dress Pants", "Smart Pants",
            "Cargo Pants", "Jogger Pants", "Track Pants", "Sweatpants", "Athletic Pants",
        ],
    ),
    (
        "Suits",
        &[
            "Suit", "Two-Piece Suit", "Three-Piece Suit", "Suit Jacket", "Suit Pants",
            "Single-Breasted Suit", "Double-Breasted Suit", "Unstructured Suit", "Structured Suit", "Relaxed Suit",
            "Fitted Suit", "Classic Suit", "Modern Suit", "Vintage Suit", "Contemporary Suit",
            "Black Suit", "Navy Suit", "Gray Suit", "Charcoal Suit", "Blue Suit",
            "Striped Suit", "Solid Suit", "Patterned Suit", "Checked Suit", "Pinstripe Suit",
            "Wool Suit", "Cotton Suit", "Linen Suit", "Polyester Suit", "Blend Suit",
            "Formal Suit", "Business Suit", "Wedding Suit", "Dress Suit", "Smart Suit",
        ],
    ),
    (
        "Shoes",
        &[
            "Leather Sneakers", "Canvas Sneakers", "Oxford Shoes", "Leather Loafers", "Leather Boots",
            "Dress Shoes", "Casual Shoes", "Athletic Shoes", "Running Shoes", "Training Shoes",
            "Chelsea Boots", "Combat Boots", "Ankle Boots", "Knee-High Boots", "Work Boots",
            "Sneakers", "Running Shoes", "Training Shoes", "Casual Sneakers", "Fashion Sneakers",
            "Oxfords", "Derby Shoes", "Brogues", "Monk Straps", "Loafers",
            "Mules", "Espadrilles", "Boat Shoes", "Driving Shoes", "Slippers",
            "Formal Shoes", "Business Shoes", "Dress Shoes", "Casual Shoes", "Smart Shoes",
        ],
    ),
    (
        "Bags",
        &[
            "Backpack", "Messenger Bag", "Satchel Bag", "Briefcase", "Duffel Bag",
            "Tote Bag", "Shopping Bag", "Gym Bag", "Travel Bag", "Weekend Bag",
            "Crossbody Bag", "Shoulder Bag", "Handbag", "Clutch", "Wallet",
            "Leather Bag", "Canvas Bag", "Nylon Bag", "Synthetic Bag", "Fabric Bag",
            "Small Bag", "Medium Bag", "Large Bag", "Mini Bag", "Oversized Bag",
            "Work Bag", "Gym Bag", "Travel Bag", "Everyday Bag", "Weekend Bag",
            "Formal Bag", "Casual Bag", "Business Bag", "Dress Bag", "Smart Bag",
        ],
    ),
    (
        "Accessories",
        &[
            "Leather Belt", "Chain Belt", "Wide Belt", "Narrow Belt", "Fabric Belt",
            "Hat", "Cap", "Beanie", "Fedora", "Baseball Cap",
            "Sunglasses", "Eyeglasses", "Reading Glasses", "Prescription Glasses", "Safety Glasses",
            "Watch", "Smartwatch", "Fitness Tracker", "Timepiece", "Chronograph",
            "Tie", "Bow Tie", "Pocket Square", "Cufflinks", "Suspenders",
            "Gloves", "Mittens", "Leather Gloves", "Wool Gloves", "Fingerless Gloves",
            "Scarf", "Neck Scarf", "Pocket Square", "Bandana", "Hanky",
        ],
    ),
];

const GIRLS: &[(&str, &[&str])] = &[
    (
        "New In",
        &[
            "Floral Print Dress", "Ruffled Top", "Denim Skirt", "Knit Cardigan", "Leather Mary Janes",
            "Plaid Shirt", "Corduroy Pants", "Knit Sweater", "Tulle Skirt", "Sparkly Sneakers",
            "Polo Dress", "Leggings", "Hoodie", "Jeans", "T-Shirt",
            "Sundress", "Shorts", "Tank Top", "Sweater", "Boots",
            "Party Dress", "Play Dress", "School Dress", "Casual Dress", "Formal Dress",
            "Play Clothes", "Everyday Clothes", "School Clothes", "Party Clothes", "Holiday Clothes",
        ],
    ),
    (
        "Outerwear",
        &[
            "Winter Coat", "Rain Jacket", "Puffer Jacket", "Denim Jacket", "Hooded Jacket",
            "Wool Coat", "Trench Coat", "Bomber Jacket", "Fleece Jacket", "Windbreaker",
            "Parka", "Quilted Jacket", "Puffer Vest", "Fleece Vest", "Denim Vest",
            "Long Coat", "Short Coat", "Cropped Coat", "Full Length Coat", "Mid-Length Coat",
            "Warm Coat", "Light Jacket", "Heavy Jacket", "All-Weather Jacket", "Seasonal Jacket",
            "Play Jacket", "School Jacket", "Party Jacket", "Casual Jacket", "Formal Jacket",
        ],
    ),
    (
        "Dresses",
        &[
            "Floral Print Dress", "Party Dress", "Play Dress", "School Dress", "Sundress",
            "A-Line Dress", "Fit and Flare Dress", "Shift Dress", "Tunic Dress", "Maxi Dress",
            "Midi Dress", "Mini Dress", "Long Dress", "Short Dress", "Knee-Length Dress",
            "Ruffled Dress", "Lace Dress", "Tulle Dress", "Cotton Dress", "Polyester Dress",
            "Casual Dress", "Formal Dress", "Party Dress", "Everyday Dress", "Special Occasion Dress",
            "Print Dress", "Solid Dress", "Striped Dress", "Polka Dot Dress", "Floral Dress",
        ],
    ),
    (
        "Tops",
        &[
            "Ruffled Top", "T-Shirt", "Tank Top", "Blouse", "Shirt",
            "Long Sleeve Top", "Short Sleeve Top", "Sleeveless Top", "Crop Top", "Tunic Top",
            "Polo Shirt", "Button-Down Shirt", "Oversized Shirt", "Fitted Shirt", "Relaxed Shirt",
            "Cotton Top", "Polyester Top", "Blend Top", "Knit Top", "Woven Top",
            "Casual Top", "Formal Top", "School Top", "Party Top", "Play Top",
            "Print Top", "Solid Top", "Striped Top", "Polka Dot Top", "Floral Top",
        ],
    ),
    (
        "Bottoms",
        &[
            "Denim Skirt", "Corduroy Pants", "Leggings", "Jeans", "Shorts",
            "Skirt", "Pants", "Trousers", "Capris", "Bermuda Shorts",
            "High-Waisted Pants", "Mid-Rise Pants", "Low-Rise Pants", "Elastic Waist Pants", "Button Pants",
            "Cotton Pants", "Polyester Pants", "Denim Pants", "Knit Pants", "Woven Pants",
            "Casual Pants", "Formal Pants", "School Pants", "Party Pants", "Play Pants",
            "Print Pants", "Solid Pants", "Striped Pants", "Polka Dot Pants", "Floral Pants",
        ],
    ),
    (
        "Shoes",
        &[
            "Leather Mary Janes", "Sparkly Sneakers", "Boots", "Sandals", "Sneakers",
            "Dress Shoes", "Casual Shoes", "Athletic Shoes", "Play Shoes", "School Shoes",
            "Heeled Shoes", "Flat Shoes", "Platform Shoes", "Wedge Shoes", "Slide Shoes",
            "Leather Shoes", "Canvas Shoes", "Synthetic Shoes", "Rubber Shoes", "Fabric Shoes",
            "Closed-Toe Shoes", "Open-Toe Shoes", "Strap Shoes", "Lace-Up Shoes", "Slip-On Shoes",
            "Formal Shoes", "Casual Shoes", "Party Shoes", "Everyday Shoes", "Special Occasion Shoes",
        ],
    ),
    (
        "Accessories",
        &[
            "Hair Accessories", "Hair Bows", "Hair Clips", "Headbands", "Hair Ties",
            "Jewelry", "Necklace", "Earrings", "Bracelet", "Ring",
            "Hat", "Cap", "Beanie", "Beret", "Sun Hat",
            "Bag", "Backpack", "Tote Bag", "Crossbody Bag", "Shoulder Bag",
            "Belt", "Scarf", "Gloves", "Mittens", "Sunglasses",
            "Watch", "Hair Accessories", "Jewelry Set", "Accessory Set", "Complete Set",
        ],
    ),
];

const BOYS: &[(&str, &[&str])] = &[
    (
        "New In",
        &[
            "Classic Polo Shirt", "Cargo Pants", "Denim Jeans", "Hoodie", "Sneakers",
            "T-Shirt", "Shorts", "Pants", "Shirt", "Sweater",
            "Jeans", "Cargo Shorts", "Athletic Shorts", "Swim Trunks", "Board Shorts",
            "Polo Shirt", "Button-Down Shirt", "Henley Shirt", "Tank Top", "Long Sleeve Shirt",
            "Play Clothes", "School Clothes", "Party Clothes", "Everyday Clothes", "Holiday Clothes",
            "Casual Clothes", "Formal Clothes", "Athletic Clothes", "Outdoor Clothes", "Indoor Clothes",
        ],
    ),
    (
        "Outerwear",
        &[
            "Winter Coat", "Rain Jacket", "Puffer Jacket", "Denim Jacket", "Hooded Jacket",
            "Wool Coat", "Trench Coat", "Bomber Jacket", "Fleece Jacket", "Windbreaker",
            "Parka", "Quilted Jacket", "Puffer Vest", "Fleece Vest", "Denim Vest",
            "Long Coat", "Short Coat", "Cropped Coat", "Full Length Coat", "Mid-Length Coat",
            "Warm Coat", "Light Jacket", "Heavy Jacket", "All-Weather Jacket", "Seasonal Jacket",
            "Play Jacket", "School Jacket", "Party Jacket", "Casual Jacket", "Formal Jacket",
        ],
    ),
    (
        "Tops",
        &[
            "Classic Polo Shirt", "T-Shirt", "Tank Top", "Shirt", "Hoodie",
            "Long Sleeve Shirt", "Short Sleeve Shirt", "Sleeveless Shirt", "Henley Shirt", "Polo Shirt",
            "Button-Down Shirt", "Oversized Shirt", "Fitted Shirt", "Relaxed Shirt", "Classic Fit Shirt",
            "Cotton Shirt", "Polyester Shirt", "Blend Shirt", "Knit Shirt", "Woven Shirt",
            "Casual Shirt", "Formal Shirt", "School Shirt", "Party Shirt", "Play Shirt",
            "Print Shirt", "Solid Shirt", "Striped Shirt", "Polka Dot Shirt", "Graphic Shirt",
        ],
    ),
    (
        "Bottoms",
        &[
            "Cargo Pants", "Denim Jeans", "Shorts", "Pants", "Trousers",
            "Jeans", "Cargo Shorts", "Athletic Shorts", "Swim Trunks", "Board Shorts",
            "High-Waisted Pants", "Mid-Rise Pants", "Low-Rise Pants", "Elastic Waist Pants", "Button Pants",
            "Cotton Pants", "Polyester Pants", "Denim Pants", "Knit Pants", "Woven Pants",
            "Casual Pants", "Formal Pants", "School Pants", "Party Pants", "Play Pants",
            "Print Pants", "Solid Pants", "Striped Pants", "Polka Dot Pants", "Graphic Pants",
        ],
    ),
    (
        "Shoes",
        &[
            "Sneakers", "Boots", "Sandals", "Dress Shoes", "Athletic Shoes",
            "Running Shoes", "Training Shoes", "Casual Sneakers", "Fashion Sneakers", "Play Shoes",
            "School Shoes", "Party Shoes", "Everyday Shoes", "Special Occasion Shoes", "Formal Shoes",
            "Leather Shoes", "Canvas Shoes", "Synthetic Shoes", "Rubber Shoes", "Fabric Shoes",
            "Closed-Toe Shoes", "Open-Toe Shoes", "Strap Shoes", "Lace-Up Shoes", "Slip-On Shoes",
            "High-Top Shoes", "Low-Top Shoes", "Mid-Top Shoes", "Ankle Shoes", "Full Height Shoes",
        ],
    ),
    (
        "Accessories",
        &[
            "Hat", "Cap", "Beanie", "Baseball Cap", "Sun Hat",
            "Belt", "Scarf", "Gloves", "Mittens", "Sunglasses",
            "Watch", "Backpack", "Tote Bag", "Crossbody Bag", "Shoulder Bag",
            "Wallet", "Keychain", "Lanyard", "ID Holder", "Badge Holder",
            "Tie", "Bow Tie", "Suspenders", "Cufflinks", "Pocket Square",
            "Jewelry", "Necklace", "Bracelet", "Ring", "Earrings",
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subcategory_order() {
        let labels: Vec<String> = subcategory_templates()
            .into_iter()
            .map(|t| format!("{}/{}", t.department.label(), t.label))
            .collect();
        assert_eq!(labels.first().map(String::as_str), Some("Women/New In"));
        assert_eq!(labels[14], "Men/New In");
        assert_eq!(labels[26], "Kids/Girls New In");
        assert_eq!(labels.last().map(String::as_str), Some("Kids/Boys Accessories"));
        assert!(!labels.iter().any(|l| l == "Kids/Boys Dresses"));
        assert_eq!(labels.len(), 14 + 12 + 7 + 6);
    }

    #[test]
    fn test_price_bands() {
        assert_eq!(Department::Women.price_band("Bags"), PriceBand::new(79.90, 249.90));
        assert_eq!(Department::Women.price_band("Outerwear"), PriceBand::new(99.90, 299.90));
        assert_eq!(Department::Women.price_band("Suits"), PriceBand::new(29.90, 199.90));
        assert_eq!(Department::Men.price_band("Suits"), PriceBand::new(99.90, 399.90));
        assert_eq!(Department::Men.price_band("Accessories"), PriceBand::new(29.90, 149.90));
        assert_eq!(Department::Kids.price_band("Shoes"), PriceBand::new(39.90, 99.90));
        assert_eq!(Department::Kids.price_band("Accessories"), PriceBand::new(9.90, 49.90));
        assert_eq!(Department::Kids.price_band("Tops"), PriceBand::new(19.90, 79.90));
    }

    #[test]
    fn test_sizes_for() {
        assert_eq!(Department::Women.sizes_for("Leather Ankle Boots"), SHOE_SIZES);
        assert_eq!(Department::Kids.sizes_for("Play Shoes"), SHOE_SIZES);
        assert_eq!(Department::Kids.sizes_for("Party Dress"), KIDS_SIZES);
        assert_eq!(Department::Men.sizes_for("Oxford Shirt"), APPAREL_SIZES);
    }

    #[test]
    fn test_id_prefix() {
        let templates = subcategory_templates();
        let jackets = templates
            .iter()
            .find(|t| t.label == "Jackets & Blazers")
            .unwrap();
        assert_eq!(jackets.id_prefix(), "men-jackets-&-blazers");
        let girls = templates.iter().find(|t| t.label == "Girls Tops").unwrap();
        assert_eq!(girls.id_prefix(), "kids-girls-tops");
    }

    #[test]
    fn test_department_labels() {
        assert_eq!(Department::from_label("Kids"), Some(Department::Kids));
        assert_eq!(Department::from_label("kids"), None);
    }
}
