//! CSV report output and shared presentation formatting
//!
//! Result tables are emitted as CSV with RFC-4180 field escaping. The
//! p-value rendering rule is presentation-only and must be identical in
//! both pipelines, so it lives here rather than in the statistics engine.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// CSV report table: one header row plus formatted data rows
#[derive(Debug)]
pub struct CsvTable {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Create a table with the given column headers
    pub fn new<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header: header.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Add a formatted data row
    pub fn add_row(&mut self, row: Vec<String>) {
        debug_assert_eq!(row.len(), self.header.len());
        self.rows.push(row);
    }

    /// Escape CSV field (handle commas, quotes, newlines)
    fn escape_field(field: &str) -> String {
        if field.contains(',') || field.contains('"') || field.contains('\n') {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    /// Generate CSV output as string
    pub fn to_csv(&self) -> String {
        let mut output = String::new();

        let header: Vec<String> = self.header.iter().map(|h| Self::escape_field(h)).collect();
        output.push_str(&header.join(","));
        output.push('\n');

        for row in &self.rows {
            let fields: Vec<String> = row.iter().map(|f| Self::escape_field(f)).collect();
            output.push_str(&fields.join(","));
            output.push('\n');
        }

        output
    }

    /// Write the table to a file
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path_ref = path.as_ref();
        fs::write(path_ref, self.to_csv())
            .with_context(|| format!("Failed to write report {}", path_ref.display()))
    }
}

/// Missing-value marker: statistics of an unanalyzable class group render
/// as empty cells, never as an error.
pub fn cell(value: Option<String>) -> String {
    value.unwrap_or_default()
}

/// Round to 3 decimal places.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Render a float the way the report expects rounded values: shortest
/// decimal form with at least one fractional digit ("0.05", "0.123", "1.0").
pub fn format_float(value: f64) -> String {
    let s = value.to_string();
    if s.contains('.') || s.contains('e') || s.contains("inf") || s.contains("NaN") {
        s
    } else {
        format!("{s}.0")
    }
}

/// Format a p-value for the report.
///
/// Values below 0.001 use scientific notation with 2 fractional digits and
/// a signed, zero-padded exponent; everything else is rounded to 3
/// decimals:
///
/// ```
/// use cotejar::report::format_p_value;
///
/// assert_eq!(format_p_value(0.0009), "9.00e-04");
/// assert_eq!(format_p_value(0.05), "0.05");
/// ```
pub fn format_p_value(p: f64) -> String {
    if p < 0.001 {
        format_scientific(p)
    } else {
        format_float(round3(p))
    }
}

/// Scientific notation with 2-digit mantissa precision and a 2-digit
/// exponent ("1.23e-05").
fn format_scientific(value: f64) -> String {
    if value == 0.0 {
        return "0.00e+00".to_string();
    }

    let mut exponent = value.abs().log10().floor() as i32;
    let mut mantissa = value / 10f64.powi(exponent);

    // Rounding the mantissa to 2 digits can carry over (9.996 -> "10.00")
    if format!("{mantissa:.2}") == "10.00" {
        mantissa /= 10.0;
        exponent += 1;
    }

    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa:.2}e{sign}{:02}", exponent.abs())
}
