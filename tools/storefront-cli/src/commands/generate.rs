//! Catalog generation command.

use std::fs;

use anyhow::{Context as _, Result};
use storefront_catalog::generator::CatalogGenerator;

use super::GenerateArgs;
use crate::context::Context;

/// Run the generate command.
pub fn run(args: GenerateArgs, ctx: &Context) -> Result<()> {
    let generator = CatalogGenerator::new(ctx.config.catalog.clone());
    let (products, report) = generator.build().context("Failed to build catalog")?;

    let pretty = args.pretty || ctx.config.output.pretty;
    let json = if pretty {
        serde_json::to_string_pretty(&products)?
    } else {
        serde_json::to_string(&products)?
    };

    let Some(output) = args.output else {
        println!("{}", json);
        return Ok(());
    };

    let path = ctx.resolve_path(&output);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;

    ctx.output.success(&format!(
        "Wrote {} products to {}",
        report.total,
        path.display()
    ));
    ctx.output.debug(&format!(
        "expanded {}, imaged {}, sampled {}",
        report.expanded, report.imaged, report.sampled
    ));

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "path": path.display().to_string(),
            "total": report.total,
            "expanded": report.expanded,
            "imaged": report.imaged,
            "sampled": report.sampled,
        }));
    }

    Ok(())
}
