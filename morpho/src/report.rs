//! Tabular measurement output.

use std::fmt::Write;

use serde::Serialize;

/// Header row plus one row of values per particle.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MeasurementTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<f64>>,
}

impl MeasurementTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<f64>>) -> Self {
        Self { headers, rows }
    }

    /// Comma separated values, one `\r\n` terminated line per row, headers first.
    ///
    /// Fields are not quoted.
    pub fn to_csv(&self) -> String {
        let mut csv = String::new();
        csv.push_str(&self.headers.join(","));
        csv.push_str("\r\n");
        for row in &self.rows {
            for (i, value) in row.iter().enumerate() {
                if i > 0 {
                    csv.push(',');
                }
                // writing into a String cannot fail
                let _ = write!(csv, "{value}");
            }
            csv.push_str("\r\n");
        }
        csv
    }
}
