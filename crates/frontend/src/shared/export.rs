/// CSV export of the rows currently shown in a table
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

const DELIMITER: char = ',';

/// Row types that can be written to CSV
pub trait CsvExportable {
    /// Column headers, in the same order as `to_csv_row`
    fn headers() -> Vec<&'static str>;

    fn to_csv_row(&self) -> Vec<String>;
}

/// Builds the CSV document (UTF-8 BOM, header line, one line per row).
pub fn rows_to_csv<T: CsvExportable>(rows: &[T]) -> String {
    let mut csv = String::from('\u{FEFF}');
    push_line(&mut csv, T::headers().into_iter().map(str::to_string));
    for row in rows {
        push_line(&mut csv, row.to_csv_row().into_iter());
    }
    csv
}

fn push_line(csv: &mut String, cells: impl Iterator<Item = String>) {
    let line: Vec<String> = cells.map(|cell| escape_csv_cell(&cell)).collect();
    csv.push_str(&line.join(&DELIMITER.to_string()));
    csv.push('\n');
}

/// Quotes a cell containing the delimiter, a quote or a line break.
pub fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(DELIMITER) || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

/// Writes `rows` to a CSV file and starts a browser download
pub fn export_to_csv<T: CsvExportable>(rows: &[T], filename: &str) -> Result<(), String> {
    if rows.is_empty() {
        return Err("Nothing to export".to_string());
    }
    let blob = create_csv_blob(&rows_to_csv(rows))?;
    download_blob(&blob, filename)
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Line {
        name: &'static str,
        amount: f64,
    }

    impl CsvExportable for Line {
        fn headers() -> Vec<&'static str> {
            vec!["Name", "Amount"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![self.name.to_string(), format!("{:.2}", self.amount)]
        }
    }

    #[test]
    fn test_escape_csv_cell() {
        assert_eq!(escape_csv_cell("plain"), "plain");
        assert_eq!(escape_csv_cell("a,b"), "\"a,b\"");
        assert_eq!(escape_csv_cell("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv_cell("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn test_rows_to_csv() {
        let rows = [
            Line { name: "Flood, Bangladesh", amount: 1500.0 },
            Line { name: "Cyclone", amount: 0.5 },
        ];
        assert_eq!(
            rows_to_csv(&rows),
            "\u{FEFF}Name,Amount\n\"Flood, Bangladesh\",1500.00\nCyclone,0.50\n"
        );
    }
}
