//! Terminal output for the storefront.
//!
//! Human-readable lines are suppressed under `--json`; only JSON documents
//! (and errors, as `{"error": ...}` on stderr) are printed then.

use std::fmt::Display;

use amrong_commerce::{Notification, NotificationSink, Severity};
use console::{style, StyledObject};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Neutral status line.
    pub fn info(&self, msg: &str) {
        self.out(format!("{} {}", style("ℹ").blue(), msg));
    }

    /// Something worked; storefront success notifications land here.
    pub fn success(&self, msg: &str) {
        self.out(format!("{} {}", style("✓").green(), msg));
    }

    pub fn warn(&self, msg: &str) {
        self.err(format!("{} {}", style("⚠").yellow(), msg));
    }

    /// Failures are the one thing still printed in JSON mode.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        } else {
            eprintln!("{} {}", style("✗").red(), style(msg).red());
        }
    }

    /// Only with `--verbose`.
    pub fn debug(&self, msg: &str) {
        if self.verbose {
            self.err(format!("{} {}", style("→").dim(), dim(msg)));
        }
    }

    pub fn header(&self, title: &str) {
        self.out(format!("\n{}", style(title).bold().underlined()));
    }

    pub fn text(&self, msg: &str) {
        self.out(msg);
    }

    /// Pretty-printed JSON document on stdout.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Indented `label: value` line.
    pub fn kv(&self, label: &str, value: &str) {
        self.out(format!("  {}: {}", dim(label), value));
    }

    pub fn list_item(&self, item: &str) {
        self.out(format!("  {} {}", dim("•"), item));
    }

    /// Fixed-width columns, e.g. a menu or cart row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        self.out(format!("  {}", format_row(cols, widths)));
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    fn out(&self, line: impl Display) {
        if !self.json {
            println!("{}", line);
        }
    }

    fn err(&self, line: impl Display) {
        if !self.json {
            eprintln!("{}", line);
        }
    }
}

fn dim(s: &str) -> StyledObject<&str> {
    style(s).dim()
}

/// Pad each column to its width. Trailing padding is dropped.
fn format_row(cols: &[&str], widths: &[usize]) -> String {
    let padded: Vec<String> = cols
        .iter()
        .zip(widths)
        .map(|(col, width)| format!("{:width$}", col, width = *width))
        .collect();
    padded.join("  ").trim_end().to_string()
}

/// Shows storefront notifications on the terminal.
#[derive(Clone)]
pub struct OutputSink {
    output: Output,
}

impl OutputSink {
    pub fn new(output: Output) -> Self {
        Self { output }
    }
}

impl NotificationSink for OutputSink {
    fn notify(&mut self, notification: Notification) {
        match notification.severity {
            Severity::Success => self.output.success(&notification.message),
            Severity::Error => self.output.error(&notification.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_row_pads_columns() {
        let row = format_row(&["cola-drink", "Cola Drink", "$2.99"], &[12, 12, 8]);
        assert_eq!(row, "cola-drink    Cola Drink    $2.99");
    }

    #[test]
    fn test_format_row_keeps_long_values() {
        let row = format_row(&["garlic-chicken", "x"], &[4, 4]);
        assert_eq!(row, "garlic-chicken  x");
    }
}
