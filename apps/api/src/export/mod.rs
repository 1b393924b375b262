//! Report export: arbitrary JSON → PDF table or XLSX sheet.

pub mod handlers;
pub mod pdf;
pub mod xlsx;

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("PDF rendering failed: {0}")]
    Pdf(String),

    #[error("XLSX rendering failed: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

/// `"Resume Analysis  Report"` + `pdf` → `"resume-analysis-report.pdf"`.
pub fn slug_filename(title: &str, extension: &str) -> String {
    let slug = title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    format!("{slug}.{extension}")
}

/// Cell text for a JSON value. Strings are unquoted, nested values are compact JSON,
/// null is empty.
pub fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}
