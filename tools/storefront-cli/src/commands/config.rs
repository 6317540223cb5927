//! Configuration management commands.

use std::fs;

use anyhow::{bail, Context as _, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::{Context, CONFIG_NAMES};

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");

    let catalog = &ctx.config.catalog;
    ctx.output.info("[catalog]");
    ctx.output.kv("target_count", &catalog.target_count.to_string());
    ctx.output.kv("selection_seed", &catalog.selection_seed.to_string());
    ctx.output.kv("reference_date", &catalog.reference_date);
    ctx.output
        .kv("images_per_product", &catalog.images_per_product.to_string());
    ctx.output.kv("brand", &catalog.brand);
    ctx.output.kv("featured_limit", &catalog.featured_limit.to_string());
    ctx.output
        .kv("new_arrivals_limit", &catalog.new_arrivals_limit.to_string());

    ctx.output.info("");
    ctx.output.info("[output]");
    ctx.output.kv("pretty", &ctx.config.output.pretty.to_string());
    ctx.output.kv(
        "default_per_page",
        &ctx.config.output.default_per_page.to_string(),
    );

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}
