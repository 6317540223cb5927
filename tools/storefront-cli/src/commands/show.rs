//! Product detail command.

use anyhow::Result;

use super::ShowArgs;
use crate::context::Context;
use crate::output::product_flags;

/// Run the show command.
pub fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let product = catalog.require_product(&args.id)?;

    if ctx.output.is_json() {
        ctx.output.json(product);
        return Ok(());
    }

    ctx.output.header(&format!("{} ({})", product.name, product.id));
    ctx.output.kv("Brand", &product.brand);
    ctx.output.kv(
        "Category",
        &format!("{} / {}", product.category, product.subcategory),
    );

    let price = match (&product.original_price, product.discount_percentage) {
        (Some(original), Some(pct)) => {
            format!("{} (was {}, {}% off)", product.price, original, pct)
        }
        _ => product.price.to_string(),
    };
    ctx.output.kv("Price", &price);
    ctx.output.kv("Color", &product.color);
    ctx.output.kv("Colors", &product.colors.join(", "));
    ctx.output.kv("Sizes", &product.sizes.join(", "));
    ctx.output.kv(
        "Stock",
        &if product.in_stock {
            format!("{} in stock", product.stock_quantity)
        } else {
            "out of stock".to_string()
        },
    );
    ctx.output.kv("In stores", &product.store_available.to_string());
    ctx.output.kv(
        "Rating",
        &format!("{:.1} ({} reviews)", product.rating, product.review_count),
    );
    ctx.output.kv("SKU", &product.sku);
    ctx.output.kv("Image", &product.image);

    let flags = product_flags(product);
    if !flags.is_empty() {
        ctx.output.kv("Flags", &flags);
    }

    ctx.output.header("Description");
    ctx.output.info(&product.short_description);
    if let Some(description) = &product.description {
        ctx.output.info(description);
    }

    if !product.materials.is_empty() {
        ctx.output.header("Materials");
        for material in &product.materials {
            ctx.output.list_item(material);
        }
    }

    if !product.reviews.is_empty() {
        ctx.output.header("Reviews");
        for review in &product.reviews {
            ctx.output.list_item(&format!(
                "{}/5 {} - {} ({})",
                review.rating, review.title, review.author, review.date
            ));
        }
    }

    Ok(())
}
