//! Output formatting for the CLI.

use console::style;
use shoecart::{Cart, Notifier, Toast};

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
    pub fn json<T: serde::Serialize>(&self, value: &T) {
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

    /// Print the cart as a table, or as JSON in JSON mode.
    pub fn cart(&self, cart: &Cart) {
        if self.json {
            self.json(&serde_json::json!({
                "items": cart,
                "item_count": cart.item_count(),
                "total": cart.total(),
            }));
            return;
        }

        self.header("Cart");
        if cart.is_empty() {
            self.info("Your cart is empty");
            return;
        }

        let widths = [6, 32, 10, 6, 12];
        self.table_row(&["ID", "PRODUCT", "PRICE", "QTY", "SUBTOTAL"], &widths);
        for item in cart {
            let id = item.id.to_string();
            let price = format_price(item.price);
            let amount = item.amount.to_string();
            let subtotal = format_price(item.subtotal());
            self.table_row(
                &[
                    id.as_str(),
                    item.title.as_str(),
                    price.as_str(),
                    amount.as_str(),
                    subtotal.as_str(),
                ],
                &widths,
            );
        }
        println!();
        self.kv("items", &cart.item_count().to_string());
        self.kv("total", &format_price(cart.total()));
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Shows cart failures as terminal toasts.
pub struct ToastPrinter {
    output: Output,
}

impl ToastPrinter {
    pub fn new(output: Output) -> Self {
        Self { output }
    }
}

impl Notifier for ToastPrinter {
    fn error(&self, toast: Toast) {
        self.output.error(toast.message());
    }
}

/// Format a price with two decimals.
pub fn format_price(value: f64) -> String {
    format!("$ {:.2}", value)
}
