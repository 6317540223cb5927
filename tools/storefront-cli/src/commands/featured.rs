//! Curated view commands.

use anyhow::Result;
use storefront_catalog::catalog::Product;

use crate::context::Context;

/// Run the featured command.
pub fn run(ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let featured: Vec<&Product> = catalog.featured().iter().collect();

    ctx.output.header("Featured");
    ctx.output.products(&featured);
    Ok(())
}

/// Run the new-arrivals command.
pub fn run_new_arrivals(ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let arrivals = catalog.new_arrivals();

    ctx.output.header("New arrivals");
    if arrivals.is_empty() {
        ctx.output.info("No new arrivals outside the featured selection.");
    }
    ctx.output.products(&arrivals);
    Ok(())
}
