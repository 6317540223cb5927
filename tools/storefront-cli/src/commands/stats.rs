//! Catalog summary command.

use anyhow::Result;

use crate::context::Context;
use crate::output::format_percent;

/// Run the stats command.
pub fn run(ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let stats = catalog.stats();

    if ctx.output.is_json() {
        ctx.output.json(&stats);
        return Ok(());
    }

    ctx.output.header("Catalog");
    ctx.output.kv("Products", &stats.total.to_string());
    ctx.output.kv("Unique names", &stats.unique_names.to_string());
    ctx.output.kv(
        "With photography",
        &format!("{} ({})", stats.imaged, format_percent(stats.imaged, stats.total)),
    );
    ctx.output.kv(
        "On sale",
        &format!("{} ({})", stats.on_sale, format_percent(stats.on_sale, stats.total)),
    );
    ctx.output.kv(
        "Out of stock",
        &format!(
            "{} ({})",
            stats.out_of_stock,
            format_percent(stats.out_of_stock, stats.total)
        ),
    );
    ctx.output.kv("New", &stats.new.to_string());
    ctx.output.kv("Best sellers", &stats.best_sellers.to_string());

    ctx.output.header("By category");
    for entry in &stats.by_category {
        ctx.output.kv(&entry.category, &entry.count.to_string());
    }

    if let Some(report) = catalog.report() {
        if report.imaged > catalog.config().target_count {
            ctx.output.warn(&format!(
                "{} photographed variants exceed the target of {}; all were kept",
                report.imaged,
                catalog.config().target_count
            ));
        }
    }

    Ok(())
}
