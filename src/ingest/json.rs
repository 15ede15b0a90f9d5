//! JSON array reader

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde_json::Value as Json;

use crate::config::TableOptions;
use crate::error::{Error, Result};
use crate::model::{Row, Table, Value};

use super::TableReader;

/// Reader for JSON files holding an array of objects
pub struct JsonReader;

impl TableReader for JsonReader {
    fn read(&self, path: &Path) -> Result<Table> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let value: Json = serde_json::from_reader(reader)?;
        table_from_json(&value)
    }

    fn supports_extension(&self, ext: &str) -> bool {
        matches!(ext.to_lowercase().as_str(), "json")
    }
}

/// Build a table from a JSON array of objects (or a single object).
///
/// Columns appear in first-seen key order across all objects; objects
/// missing a key leave that cell empty. Nested arrays or objects cannot
/// become cells and are rejected.
pub fn table_from_json(value: &Json) -> Result<Table> {
    let items: Vec<&Json> = match value {
        Json::Array(items) => items.iter().collect(),
        Json::Object(_) => vec![value],
        _ => {
            return Err(Error::UnsupportedValue(
                "JSON input must be an array or object".to_string(),
            ))
        }
    };

    let mut table = Table::with_options(
        Vec::<String>::new(),
        TableOptions::default().with_flexible_headers(true),
    );

    for item in items {
        let object = match item {
            Json::Object(object) => object,
            _ => {
                return Err(Error::UnsupportedValue(format!(
                    "JSON row is not an object: {}",
                    item
                )))
            }
        };
        let mut row = Row::new();
        for (key, value) in object {
            row.set(key.clone(), cell_from_json(value)?);
        }
        table.add_row(row)?;
    }

    Ok(table)
}

fn cell_from_json(value: &Json) -> Result<Value> {
    match value {
        Json::Null => Ok(Value::default()),
        Json::Bool(b) => Ok(Value::Bool(*b)),
        Json::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Int(i))
            } else if let Some(f) = n.as_f64() {
                Ok(Value::Float(f))
            } else {
                Ok(Value::Text(n.to_string()))
            }
        }
        Json::String(s) => Ok(Value::Text(s.clone())),
        Json::Array(_) | Json::Object(_) => Err(Error::UnsupportedValue(format!(
            "nested JSON value cannot become a table cell: {}",
            value
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_columns_grow_in_first_seen_order() {
        let table = table_from_json(&json!([
            {"a": 1},
            {"a": 2, "b": "x"}
        ]))
        .unwrap();
        assert_eq!(table.headers, vec!["a", "b"]);
        // the first row's missing column is backfilled as empty
        assert_eq!(table.rows[0].get("b"), Some(&Value::default()));
    }

    #[test]
    fn test_scalar_cells() {
        let table = table_from_json(&json!([
            {"n": 3, "f": 2.5, "t": "x", "b": true, "missing": null}
        ]))
        .unwrap();
        let row = &table.rows[0];
        assert_eq!(row.get("n"), Some(&Value::Int(3)));
        assert_eq!(row.get("f"), Some(&Value::Float(2.5)));
        assert_eq!(row.get("t"), Some(&Value::from("x")));
        assert_eq!(row.get("b"), Some(&Value::Bool(true)));
        assert_eq!(row.get("missing"), Some(&Value::default()));
    }

    #[test]
    fn test_nested_value_rejected() {
        let err = table_from_json(&json!([{"a": [1, 2]}])).unwrap_err();
        assert!(matches!(err, Error::UnsupportedValue(_)));
    }

    #[test]
    fn test_non_object_row_rejected() {
        let err = table_from_json(&json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, Error::UnsupportedValue(_)));
    }

    #[test]
    fn test_scalar_input_rejected() {
        let err = table_from_json(&json!("just text")).unwrap_err();
        assert!(matches!(err, Error::UnsupportedValue(_)));
    }
}
