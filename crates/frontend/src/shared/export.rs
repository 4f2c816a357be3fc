//! CSV export of the records and columns a list screen shows
use crate::shared::data_table::{Column, TableRecord};
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

const SEPARATOR: &str = ";";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExportError {
    #[error("nothing to export")]
    NoData,
    #[error("failed to create file: {0}")]
    Blob(String),
    #[error("failed to start download: {0}")]
    Download(String),
}

/// Builds the CSV text: UTF-8 BOM so spreadsheet apps pick the encoding,
/// `;` separated, one header row. View-only columns export as empty cells.
pub fn build_csv<T: TableRecord>(records: &[T], columns: &[Column<T>]) -> Result<String, ExportError> {
    if records.is_empty() {
        return Err(ExportError::NoData);
    }

    let mut csv_content = String::new();
    csv_content.push('\u{FEFF}');

    let headers: Vec<String> = columns.iter().map(|c| escape_csv_cell(&c.header)).collect();
    csv_content.push_str(&headers.join(SEPARATOR));
    csv_content.push('\n');

    for record in records {
        let row: Vec<String> = columns
            .iter()
            .map(|c| escape_csv_cell(&c.cell_text(record).unwrap_or_default()))
            .collect();
        csv_content.push_str(&row.join(SEPARATOR));
        csv_content.push('\n');
    }

    Ok(csv_content)
}

/// Builds the CSV and hands it to the browser as a download
pub fn export_csv<T: TableRecord>(
    records: &[T],
    columns: &[Column<T>],
    filename: &str,
) -> Result<(), ExportError> {
    let content = build_csv(records, columns)?;
    let blob = create_csv_blob(&content)?;
    download_blob(&blob, filename)?;
    log::info!("exported {} rows to {}", records.len(), filename);
    Ok(())
}

fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(';') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

fn create_csv_blob(content: &str) -> Result<Blob, ExportError> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| ExportError::Blob(format!("{:?}", e)))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), ExportError> {
    let fail = |e: wasm_bindgen::JsValue| ExportError::Download(format!("{:?}", e));

    let window = web_sys::window().ok_or_else(|| ExportError::Download("no window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| ExportError::Download("no document".into()))?;
    let body = document
        .body()
        .ok_or_else(|| ExportError::Download("no body".into()))?;

    let url = Url::create_object_url_with_blob(blob).map_err(fail)?;

    let anchor = document
        .create_element("a")
        .map_err(fail)?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| ExportError::Download("element is not an anchor".into()))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.style().set_property("display", "none").map_err(fail)?;

    body.append_child(&anchor).map_err(fail)?;
    anchor.click();
    body.remove_child(&anchor).map_err(fail)?;

    Url::revoke_object_url(&url).map_err(fail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn columns() -> Vec<Column<Value>> {
        vec![
            Column::field("Rider", "rider"),
            Column::text("Route", |r: &Value| {
                format!(
                    "{} → {}",
                    r.field_value("from").unwrap_or_default(),
                    r.field_value("to").unwrap_or_default()
                )
            }),
            Column::field("Note", "note"),
        ]
    }

    #[test]
    fn test_build_csv() {
        let records = vec![
            json!({"rider": "Amit", "from": "Airport", "to": "MG Road", "note": "AC; sedan"}),
            json!({"rider": "Sneha \"S\"", "from": "Whitefield", "to": "HSR"}),
        ];
        let csv = build_csv(&records, &columns()).unwrap();
        let lines: Vec<&str> = csv.trim_start_matches('\u{FEFF}').lines().collect();
        assert!(csv.starts_with('\u{FEFF}'));
        assert_eq!(lines[0], "Rider;Route;Note");
        assert_eq!(lines[1], "Amit;Airport → MG Road;\"AC; sedan\"");
        assert_eq!(lines[2], "\"Sneha \"\"S\"\"\";Whitefield → HSR;");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_view_columns_export_empty() {
        let cols: Vec<Column<Value>> = vec![
            Column::field("Name", "name"),
            Column::view("Action", |_| "button"),
        ];
        let csv = build_csv(&[json!({"name": "Kiran"})], &cols).unwrap();
        assert!(csv.ends_with("Name;Action\nKiran;\n"));
    }

    #[test]
    fn test_empty_records_is_an_error() {
        let records: Vec<Value> = Vec::new();
        assert_eq!(build_csv(&records, &columns()), Err(ExportError::NoData));
    }

    #[test]
    fn test_escape_multiline() {
        assert_eq!(escape_csv_cell("a\nb"), "\"a\nb\"");
        assert_eq!(escape_csv_cell("plain"), "plain");
    }
}
