//! Table construction, row normalization, and the sort engine

use std::cmp::Ordering;

use crate::config::TableOptions;
use crate::error::{Error, Result};

use super::{Row, Value};

/// Input shapes accepted by [`Table::add_row`]: positional cells in header
/// order, or a header-keyed map.
#[derive(Debug, Clone)]
pub enum RowInput {
    Values(Vec<Value>),
    Cells(Row),
}

impl From<Vec<Value>> for RowInput {
    fn from(values: Vec<Value>) -> Self {
        RowInput::Values(values)
    }
}

impl From<Row> for RowInput {
    fn from(row: Row) -> Self {
        RowInput::Cells(row)
    }
}

/// A Markdown table: ordered headers, rows of typed cells, and rendering
/// configuration.
///
/// Every stored row carries a cell for every current header; [`Table::add_row`]
/// backfills missing cells with empty text, retroactively when
/// `flexible_headers` grows the header list.
#[derive(Debug, Clone, Default)]
pub struct Table {
    /// Column names, in rendering order
    pub headers: Vec<String>,
    /// Rows in insertion order, mutated by sorting
    pub rows: Vec<Row>,
    pub options: TableOptions,
}

impl Table {
    /// Create a table with the given headers and default options
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_options(headers, TableOptions::default())
    }

    /// Create a table with the given headers and options
    pub fn with_options<I, S>(headers: I, options: TableOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            options,
        }
    }

    /// Index of a header by name
    pub fn header_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of headers
    pub fn header_count(&self) -> usize {
        self.headers.len()
    }

    /// Add a row to the table.
    ///
    /// Positional input must match the current header count exactly. Mapped
    /// input may only use known headers, unless `flexible_headers` is set,
    /// in which case unseen keys are appended to the header list in
    /// first-seen order.
    pub fn add_row(&mut self, row: impl Into<RowInput>) -> Result<()> {
        let row = match row.into() {
            RowInput::Values(values) => {
                if values.len() != self.headers.len() {
                    return Err(Error::ShapeMismatch {
                        row_len: values.len(),
                        header_len: self.headers.len(),
                    });
                }
                self.headers.iter().cloned().zip(values).collect()
            }
            RowInput::Cells(row) => {
                for key in row.keys() {
                    if !self.headers.iter().any(|h| h == key) {
                        if self.options.flexible_headers {
                            self.headers.push(key.clone());
                        } else {
                            return Err(Error::UnknownKey(key.clone()));
                        }
                    }
                }
                row
            }
        };
        self.rows.push(row);

        // Invariant: every stored row has a cell for every current header.
        // Header growth from this row backfills earlier rows too.
        for row in &mut self.rows {
            for header in &self.headers {
                if !row.contains_key(header) {
                    row.set(header.clone(), Value::default());
                }
            }
        }
        Ok(())
    }

    /// Add rows in order; the first failure aborts the rest. Rows added
    /// before the failing one stay added.
    pub fn add_rows<I, R>(&mut self, rows: I) -> Result<()>
    where
        I: IntoIterator<Item = R>,
        R: Into<RowInput>,
    {
        for row in rows {
            self.add_row(row)?;
        }
        Ok(())
    }

    /// Sort rows by the configured sort key.
    ///
    /// `sort_key` may name several headers joined by commas, but only the
    /// first one drives the sort. With `disable_convert` the raw values are
    /// compared under a fixed total order. Otherwise coercion is attempted
    /// in stages: a column made entirely of boolean-like literals is
    /// coerced to booleans in place and sorted; a column uniform in its
    /// natural type sorts by that type; a column whose every value coerces
    /// to an integer sorts by those integers (stored values untouched);
    /// anything else sorts by display text.
    pub fn sort(&mut self, disable_convert: bool) -> Result<()> {
        let key_spec = match self.options.sort_key.as_deref() {
            Some(spec) if !spec.is_empty() => spec,
            _ => return Err(Error::MissingSortKey),
        };
        let key = key_spec.split(',').next().unwrap_or(key_spec).to_string();
        if !self.headers.iter().any(|h| h == &key) {
            return Err(Error::UnknownKey(key));
        }
        let reverse = self.options.sort_reverse;

        if disable_convert {
            let empty = Value::default();
            sort_rows(&mut self.rows, reverse, |a, b| {
                raw_cmp(a.get(&key).unwrap_or(&empty), b.get(&key).unwrap_or(&empty))
            });
            return Ok(());
        }

        // Boolean-literal columns coerce in place: the stored values become
        // Bool, not just the sort order.
        let all_bool_literals = self
            .rows
            .iter()
            .all(|row| row.get(&key).and_then(Value::bool_literal).is_some());
        if all_bool_literals {
            for row in &mut self.rows {
                if let Some(value) = row.get_mut(&key) {
                    let flag = value.bool_literal().unwrap_or(false);
                    *value = Value::Bool(flag);
                }
            }
            sort_rows(&mut self.rows, reverse, |a, b| {
                bool_key(a, &key).cmp(&bool_key(b, &key))
            });
            return Ok(());
        }

        // A column uniform in its natural type compares directly
        let mut classes = self
            .rows
            .iter()
            .map(|row| row.get(&key).map_or(Class::Numeric, class_of));
        if let Some(first) = classes.next() {
            if classes.all(|c| c == first) {
                let empty = Value::default();
                sort_rows(&mut self.rows, reverse, |a, b| {
                    natural_cmp(
                        first,
                        a.get(&key).unwrap_or(&empty),
                        b.get(&key).unwrap_or(&empty),
                    )
                });
                return Ok(());
            }
        }

        // Mixed columns: integer coercion for comparison only
        let all_ints = self
            .rows
            .iter()
            .all(|row| row.get(&key).map_or(true, |v| v.as_i64().is_some()));
        if all_ints {
            sort_rows(&mut self.rows, reverse, |a, b| {
                int_key(a, &key).cmp(&int_key(b, &key))
            });
            return Ok(());
        }

        // Last resort: display text
        sort_rows(&mut self.rows, reverse, |a, b| {
            text_key(a, &key).cmp(&text_key(b, &key))
        });
        Ok(())
    }

    /// Apply the configured `custom_map`: for each mapped header, every
    /// row value that matches a map key is replaced; everything else is
    /// left untouched.
    pub fn remap(&mut self) {
        for (header, value_map) in &self.options.custom_map {
            for row in &mut self.rows {
                if let Some(current) = row.get_mut(header) {
                    if let Some(replacement) = value_map.get(&*current) {
                        *current = replacement.clone();
                    }
                }
            }
        }
    }

    /// Render the table as a Markdown pipe table.
    ///
    /// Sorts first when a sort key is configured (mutating row order, and
    /// stored values in the boolean-coercion case), then applies the custom
    /// map. Cells absent from a row render as empty text.
    pub fn render(&mut self) -> Result<String> {
        if self.options.sort_key.as_deref().is_some_and(|k| !k.is_empty()) {
            self.sort(false)?;
        }
        if !self.options.custom_map.is_empty() {
            self.remap();
        }

        let mut out = String::new();
        if let Some(title) = &self.options.title {
            out.push_str(&format!("### {}\n", title));
        }
        out.push_str(&format!("| {} |\n", self.headers.join(" | ")));
        out.push_str(&format!(
            "| {} |\n",
            vec!["---"; self.headers.len()].join(" | ")
        ));
        for row in &self.rows {
            let cells: Vec<String> = self
                .headers
                .iter()
                .map(|header| row.get(header).map(ToString::to_string).unwrap_or_default())
                .collect();
            out.push_str(&format!("| {} |\n", cells.join(" | ")));
        }
        Ok(out)
    }
}

/// Natural comparison classes for uniform columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
    Numeric,
    Text,
    Bool,
}

fn class_of(value: &Value) -> Class {
    match value {
        Value::Int(_) | Value::Float(_) => Class::Numeric,
        Value::Text(_) => Class::Text,
        Value::Bool(_) => Class::Bool,
    }
}

fn natural_cmp(class: Class, a: &Value, b: &Value) -> Ordering {
    match class {
        Class::Numeric => numeric_cmp(a, b),
        Class::Text => a.to_string().cmp(&b.to_string()),
        Class::Bool => bool_value(a).cmp(&bool_value(b)),
    }
}

fn numeric_cmp(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => x.cmp(y),
        _ => {
            let x = a.as_f64().unwrap_or(0.0);
            let y = b.as_f64().unwrap_or(0.0);
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
    }
}

/// Total order over raw values: natural ordering within a type, Int/Float
/// compared numerically, otherwise booleans before numbers before text.
fn raw_cmp(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Int(x), Value::Int(y)) => x.cmp(y),
        (Value::Text(x), Value::Text(y)) => x.cmp(y),
        (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => numeric_cmp(a, b),
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Bool(_) => 0,
        Value::Int(_) | Value::Float(_) => 1,
        Value::Text(_) => 2,
    }
}

fn bool_value(value: &Value) -> bool {
    matches!(value, Value::Bool(true))
}

fn bool_key(row: &Row, key: &str) -> bool {
    row.get(key).map_or(false, bool_value)
}

fn int_key(row: &Row, key: &str) -> i64 {
    row.get(key).and_then(Value::as_i64).unwrap_or(0)
}

fn text_key(row: &Row, key: &str) -> String {
    row.get(key).map(ToString::to_string).unwrap_or_default()
}

fn sort_rows<F>(rows: &mut [Row], reverse: bool, cmp: F)
where
    F: Fn(&Row, &Row) -> Ordering,
{
    // Stable in both directions: ties keep their original relative order
    // even when reversed.
    if reverse {
        rows.sort_by(|a, b| cmp(b, a));
    } else {
        rows.sort_by(|a, b| cmp(a, b));
    }
}
