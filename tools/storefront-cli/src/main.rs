//! Storefront CLI - Build and query the Market Street catalog.
//!
//! Commands:
//! - `storefront generate` - Build the catalog and write it as JSON
//! - `storefront stats` - Summarize the catalog
//! - `storefront show` - Show one product
//! - `storefront list` - List products by category
//! - `storefront featured` - Show the featured selection
//! - `storefront new-arrivals` - Show new arrivals
//! - `storefront sale` - Show products on sale
//! - `storefront search` - Filter, sort and paginate products
//! - `storefront config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ConfigArgs, GenerateArgs, ListArgs, SaleArgs, SearchArgs, ShowArgs};

/// Storefront CLI - Build and query the Market Street catalog
#[derive(Parser)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the catalog and write it as JSON
    Generate(GenerateArgs),

    /// Summarize the catalog
    Stats,

    /// Show one product
    Show(ShowArgs),

    /// List products in a category
    List(ListArgs),

    /// Show the featured selection
    Featured,

    /// Show new arrivals
    NewArrivals,

    /// Show products on sale
    Sale(SaleArgs),

    /// Filter, sort and paginate products
    Search(SearchArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    // Execute command
    let result = match cli.command {
        Commands::Generate(args) => commands::generate::run(args, &ctx),
        Commands::Stats => commands::stats::run(&ctx),
        Commands::Show(args) => commands::show::run(args, &ctx),
        Commands::List(args) => commands::list::run(args, &ctx),
        Commands::Featured => commands::featured::run(&ctx),
        Commands::NewArrivals => commands::featured::run_new_arrivals(&ctx),
        Commands::Sale(args) => commands::sale::run(args, &ctx),
        Commands::Search(args) => commands::search::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
