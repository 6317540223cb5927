//! CLI command implementations.

pub mod config;
pub mod featured;
pub mod generate;
pub mod list;
pub mod sale;
pub mod search;
pub mod show;
pub mod stats;

use clap::{Args, Subcommand};

/// Arguments for the generate command.
#[derive(Args)]
pub struct GenerateArgs {
    /// Output file (default: stdout).
    #[arg(short, long)]
    pub output: Option<String>,

    /// Pretty-print the JSON.
    #[arg(long)]
    pub pretty: bool,
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Product id, e.g. `women-new-in-1`.
    pub id: String,
}

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Category (Women, Men or Kids).
    #[arg(short, long)]
    pub category: Option<String>,

    /// Subcategory, matched without regard to case.
    #[arg(short, long)]
    pub subcategory: Option<String>,
}

/// Arguments for the sale command.
#[derive(Args)]
pub struct SaleArgs {
    /// Show only the first N products.
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Text to look for in name, description and subcategory.
    #[arg(short, long)]
    pub query: Option<String>,

    /// Category.
    #[arg(long)]
    pub category: Option<String>,

    /// Color (repeatable).
    #[arg(long)]
    pub color: Vec<String>,

    /// Size (repeatable).
    #[arg(long)]
    pub size: Vec<String>,

    /// Minimum price in dollars.
    #[arg(long)]
    pub min_price: Option<f64>,

    /// Maximum price in dollars.
    #[arg(long)]
    pub max_price: Option<f64>,

    /// Only products in stock.
    #[arg(long)]
    pub in_stock: bool,

    /// Sort order: featured, price-asc, price-desc, name-asc, name-desc,
    /// newest, rating, best-selling.
    #[arg(long, default_value = "featured")]
    pub sort: String,

    /// Page number (1-indexed).
    #[arg(long, default_value = "1")]
    pub page: i64,

    /// Results per page.
    #[arg(long)]
    pub per_page: Option<i64>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
