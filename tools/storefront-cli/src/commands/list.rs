//! Category listing command.

use anyhow::Result;
use storefront_catalog::catalog::Product;

use super::ListArgs;
use crate::context::Context;

/// Run the list command.
pub fn run(args: ListArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;

    let products: Vec<&Product> = match &args.category {
        Some(category) => catalog.by_category(category, args.subcategory.as_deref()),
        None => match &args.subcategory {
            Some(sub) => catalog
                .all()
                .iter()
                .filter(|p| p.subcategory.eq_ignore_ascii_case(sub))
                .collect(),
            None => catalog.all().iter().collect(),
        },
    };

    let title = match (&args.category, &args.subcategory) {
        (Some(c), Some(s)) => format!("{} / {}", c, s),
        (Some(c), None) => c.clone(),
        (None, Some(s)) => s.clone(),
        (None, None) => "All products".to_string(),
    };
    ctx.output.header(&title);

    if products.is_empty() {
        ctx.output.info("No products found.");
        if ctx.output.is_json() {
            ctx.output.json(&products);
        }
        return Ok(());
    }

    ctx.output.products(&products);
    ctx.output.info("");
    ctx.output.info(&format!("Total: {} product(s)", products.len()));

    Ok(())
}
