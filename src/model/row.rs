//! Table rows: header name to cell value, insertion ordered

use indexmap::IndexMap;

use super::Value;

/// A single table row.
///
/// Cell order is insertion order, but rendering always follows the table's
/// header order, so the internal ordering is cosmetic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    pub cells: IndexMap<String, Value>,
}

impl Row {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a cell, builder style
    pub fn with(mut self, header: impl Into<String>, value: impl Into<Value>) -> Self {
        self.cells.insert(header.into(), value.into());
        self
    }

    /// Insert or replace a cell
    pub fn set(&mut self, header: impl Into<String>, value: impl Into<Value>) {
        self.cells.insert(header.into(), value.into());
    }

    /// Get a cell value by header name
    pub fn get(&self, header: &str) -> Option<&Value> {
        self.cells.get(header)
    }

    /// Get a mutable cell value by header name
    pub fn get_mut(&mut self, header: &str) -> Option<&mut Value> {
        self.cells.get_mut(header)
    }

    pub fn contains_key(&self, header: &str) -> bool {
        self.cells.contains_key(header)
    }

    /// Header names present in this row
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.cells.keys()
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl FromIterator<(String, Value)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}
