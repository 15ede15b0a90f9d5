//! CSV table reader

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::Result;
use crate::model::{Table, Value};

use super::TableReader;

/// Reader for CSV files: headers from the first record, rows positional
pub struct CsvReader;

impl TableReader for CsvReader {
    fn read(&self, path: &Path) -> Result<Table> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let mut table = Table::new(headers.iter());

        for record in csv_reader.records() {
            let record = record?;
            let mut cells: Vec<Value> = record.iter().map(parse_value).collect();

            // Pad short records with empty cells
            if cells.len() < table.header_count() {
                cells.resize(table.header_count(), Value::default());
            }
            table.add_row(cells)?;
        }

        Ok(table)
    }

    fn supports_extension(&self, ext: &str) -> bool {
        matches!(ext.to_lowercase().as_str(), "csv" | "txt")
    }
}

/// Parse a raw CSV field into a typed cell value
fn parse_value(s: &str) -> Value {
    let trimmed = s.trim();

    if trimmed.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if trimmed.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }

    if let Ok(i) = trimmed.parse::<i64>() {
        return Value::Int(i);
    }

    if let Ok(f) = trimmed.parse::<f64>() {
        return Value::Float(f);
    }

    Value::Text(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("true"), Value::Bool(true));
        assert_eq!(parse_value("False"), Value::Bool(false));
        assert_eq!(parse_value("42"), Value::Int(42));
        assert_eq!(parse_value("3.14"), Value::Float(3.14));
        assert_eq!(parse_value("hello"), Value::from("hello"));
        assert_eq!(parse_value(""), Value::default());
    }

    #[test]
    fn test_read_pads_short_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        std::fs::write(&path, "a,b,c\n1,2,3\n4,5\n").unwrap();

        let table = CsvReader.read(&path).unwrap();
        assert_eq!(table.headers, vec!["a", "b", "c"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows[1].get("c"), Some(&Value::default()));
    }
}
