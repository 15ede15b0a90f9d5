//! Readers that build tables from structured data files

mod csv;
mod json;

use std::path::Path;

use crate::error::{Error, Result};
use crate::model::Table;

pub use self::csv::CsvReader;
pub use self::json::{table_from_json, JsonReader};

/// Trait for building a [`Table`] from a data file
pub trait TableReader {
    /// Read a file and return a Table
    fn read(&self, path: &Path) -> Result<Table>;

    /// Check if this reader handles the given file extension
    fn supports_extension(&self, ext: &str) -> bool;
}

/// Factory for picking a reader based on file extension
pub struct ReaderFactory {
    readers: Vec<Box<dyn TableReader>>,
}

impl Default for ReaderFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ReaderFactory {
    /// Create a factory with all supported readers
    pub fn new() -> Self {
        Self {
            readers: vec![Box::new(CsvReader), Box::new(JsonReader)],
        }
    }

    /// Get a reader for the given file path
    pub fn get_reader(&self, path: &Path) -> Result<&dyn TableReader> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        for reader in &self.readers {
            if reader.supports_extension(&ext) {
                return Ok(reader.as_ref());
            }
        }

        Err(Error::UnsupportedFormat(if ext.is_empty() {
            "unknown".to_string()
        } else {
            ext
        }))
    }

    /// Read a file using the appropriate reader
    pub fn read(&self, path: &Path) -> Result<Table> {
        self.get_reader(path)?.read(path)
    }
}
