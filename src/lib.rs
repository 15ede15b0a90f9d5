//! mdforge - Programmatic Markdown document generation
//!
//! Build Markdown documents from structured data: typed tables with row
//! normalization, coercing sorts, and value remapping; headings, images,
//! links, and lists; sections; and a document container with optional
//! table of contents and file persistence.
//!
//! ```
//! use mdforge::{Document, DocumentOptions, Row, Section, Table, TableOptions};
//!
//! let mut table = Table::with_options(
//!     ["Name", "Score"],
//!     TableOptions::default().with_sort_key("Score"),
//! );
//! table.add_row(Row::new().with("Name", "Alice").with("Score", 10)).unwrap();
//! table.add_row(Row::new().with("Name", "Bob").with("Score", 9)).unwrap();
//!
//! let mut section = Section::new("Scores");
//! section.add_table(&mut table).unwrap();
//!
//! let mut document = Document::new(
//!     "Report",
//!     "report.md",
//!     DocumentOptions::new().with_overwrite(true),
//! ).unwrap();
//! document.add_section(section);
//! assert!(document.render().contains("| Bob | 9 |"));
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod fragment;
pub mod ingest;
pub mod model;

pub use config::{DocumentOptions, ImageOptions, LinkOptions, ListOptions, TableOptions};
pub use document::{Content, Document, Section};
pub use error::{Error, Result};
pub use fragment::{Fragment, Heading, Image, Link, List};
pub use model::{Row, RowInput, Table, Value};
