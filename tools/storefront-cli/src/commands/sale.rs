//! Sale listing command.

use anyhow::Result;

use super::SaleArgs;
use crate::context::Context;

/// Run the sale command.
pub fn run(args: SaleArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let mut sale = catalog.sale();
    let total = sale.len();

    if let Some(limit) = args.limit {
        sale.truncate(limit);
    }

    ctx.output.header("On sale");
    ctx.output.products(&sale);
    ctx.output.info("");
    ctx.output.info(&format!("Showing {} of {} product(s)", sale.len(), total));
    Ok(())
}
