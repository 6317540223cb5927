//! Output formatting for the CLI.

use console::style;
use storefront_catalog::catalog::Product;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize + ?Sized>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Print products as a table, or as JSON in JSON mode.
    pub fn products(&self, products: &[&Product]) {
        if self.json {
            self.json(products);
            return;
        }

        const WIDTHS: [usize; 5] = [32, 28, 10, 10, 12];
        self.table_row(&["ID", "NAME", "CATEGORY", "PRICE", "FLAGS"], &WIDTHS);
        self.info(&"-".repeat(100));

        for product in products {
            let price = product.price.display();
            let flags = product_flags(product);
            self.table_row(
                &[
                    product.id.as_str(),
                    &product.name,
                    &product.category,
                    &price,
                    &flags,
                ],
                &WIDTHS,
            );
        }
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Short badges for a product's merchandising flags.
pub fn product_flags(product: &Product) -> String {
    let mut flags = Vec::new();
    if product.is_new {
        flags.push(style("new").cyan().to_string());
    }
    if product.is_best_seller {
        flags.push(style("best").magenta().to_string());
    }
    if product.is_on_sale() {
        flags.push(style("sale").green().to_string());
    }
    if !product.in_stock {
        flags.push(style("oos").red().to_string());
    }
    flags.join(" ")
}

/// Format a share as a percentage with one decimal.
pub fn format_percent(part: usize, total: usize) -> String {
    if total == 0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", part as f64 * 100.0 / total as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(1, 8), "12.5%");
        assert_eq!(format_percent(0, 0), "0.0%");
        assert_eq!(format_percent(645, 645), "100.0%");
    }
}
