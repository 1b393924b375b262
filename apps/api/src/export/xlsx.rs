//! JSON → single-sheet workbook.

use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use serde_json::{Map, Value};

use super::{value_to_cell, ExportError};

pub const SHEET_NAME: &str = "Data";
const SCALAR_COLUMN: &str = "value";
/// Excel rejects cell strings longer than this.
pub const MAX_CELL_CHARS: usize = 32_767;

/// An array becomes one row per element, anything else a single row. Columns are the
/// union of object keys in first-seen order.
pub fn render_xlsx(data: &Value) -> Result<Vec<u8>, ExportError> {
    let rows = to_rows(data);
    let headers = collect_headers(&rows);

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    let header_format = Format::new().set_bold();
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, fit_cell(header.clone()), &header_format)?;
    }

    for (row_index, row) in rows.iter().enumerate() {
        let row_num = row_index as u32 + 1;
        for (col, header) in headers.iter().enumerate() {
            if let Some(value) = row.get(header) {
                write_cell(sheet, row_num, col as u16, value)?;
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}

fn to_rows(data: &Value) -> Vec<Map<String, Value>> {
    let items: Vec<&Value> = match data {
        Value::Array(items) => items.iter().collect(),
        other => vec![other],
    };

    items
        .into_iter()
        .map(|item| match item {
            Value::Object(map) => map.clone(),
            scalar => {
                let mut map = Map::new();
                map.insert(SCALAR_COLUMN.to_string(), scalar.clone());
                map
            }
        })
        .collect()
}

pub fn collect_headers(rows: &[Map<String, Value>]) -> Vec<String> {
    let mut headers: Vec<String> = Vec::new();
    for key in rows.iter().flat_map(|row| row.keys()) {
        if !headers.contains(key) {
            headers.push(key.clone());
        }
    }
    headers
}

fn write_cell(sheet: &mut Worksheet, row: u32, col: u16, value: &Value) -> Result<(), XlsxError> {
    match value {
        Value::Null => {}
        Value::Bool(b) => {
            sheet.write_boolean(row, col, *b)?;
        }
        Value::Number(n) => match n.as_f64() {
            Some(f) => {
                sheet.write_number(row, col, f)?;
            }
            None => {
                sheet.write_string(row, col, fit_cell(n.to_string()))?;
            }
        },
        other => {
            sheet.write_string(row, col, fit_cell(value_to_cell(other)))?;
        }
    }
    Ok(())
}

/// Cuts `text` to the cell limit on a char boundary.
fn fit_cell(text: String) -> String {
    match text.char_indices().nth(MAX_CELL_CHARS) {
        Some((cut, _)) => text[..cut].to_string(),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use serde_json::json;

    use super::*;

    fn zip_entry(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
        let mut entry = archive.by_name(name).unwrap();
        let mut out = String::new();
        entry.read_to_string(&mut out).unwrap();
        out
    }

    #[test]
    fn test_headers_are_union_in_first_seen_order() {
        let rows = to_rows(&json!([
            {"name": "Rust", "demand": 9},
            {"name": "Go", "trend": "up", "demand": 7}
        ]));
        assert_eq!(collect_headers(&rows), vec!["name", "demand", "trend"]);
    }

    #[test]
    fn test_single_object_is_one_row() {
        let rows = to_rows(&json!({"score": 82}));
        assert_eq!(rows.len(), 1);
        assert_eq!(collect_headers(&rows), vec!["score"]);
    }

    #[test]
    fn test_scalar_elements_use_value_column() {
        let rows = to_rows(&json!(["a", "b"]));
        assert_eq!(collect_headers(&rows), vec!["value"]);
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_long_text_is_cut_to_cell_limit() {
        assert_eq!(fit_cell("é".repeat(40_000)).chars().count(), MAX_CELL_CHARS);
        assert_eq!(fit_cell("short".to_string()), "short");
        assert_eq!(fit_cell("x".repeat(MAX_CELL_CHARS)).len(), MAX_CELL_CHARS);
    }

    #[test]
    fn test_oversized_values_still_render() {
        let long = "x".repeat(40_000);
        assert!(render_xlsx(&json!({"notes": long})).is_ok());
        assert!(render_xlsx(&json!({"insights": {"summary": long}})).is_ok());
        assert!(render_xlsx(&json!({ long.clone(): 1 })).is_ok());
    }

    #[test]
    fn test_workbook_has_data_sheet_and_nested_json_cells() {
        let bytes = render_xlsx(&json!([
            {"skill": "Rust", "roles": ["Backend", "Systems"]},
            {"skill": "SQL", "score": 7}
        ]))
        .unwrap();

        assert!(zip_entry(&bytes, "xl/workbook.xml").contains(r#"name="Data""#));
        let strings = zip_entry(&bytes, "xl/sharedStrings.xml");
        assert!(strings.contains("skill"));
        assert!(strings.contains("score"));
        assert!(strings.contains(r#"["Backend","Systems"]"#) || strings.contains("[&quot;Backend&quot;,&quot;Systems&quot;]"));
    }
}
