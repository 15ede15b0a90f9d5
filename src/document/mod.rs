//! Document assembly and persistence

mod section;

pub use section::{Content, Section};

use std::fs;
use std::path::PathBuf;

use indexmap::map::Entry;
use indexmap::IndexMap;

use crate::config::DocumentOptions;
use crate::error::{Error, Result};
use crate::fragment::Fragment;

/// A full Markdown document: a title, an ordered map of sections keyed by
/// their heading text, and a destination file.
#[derive(Debug, Clone)]
pub struct Document {
    pub title: String,
    /// Destination path; `.md` is appended at construction when absent
    pub path: PathBuf,
    /// Sections in insertion order; re-adding a title replaces the section
    /// in place
    pub sections: IndexMap<String, Section>,
    pub table_of_contents: bool,
}

impl Document {
    /// Create a document targeting `path`.
    ///
    /// Unless `overwrite` is set, fails when the destination already
    /// exists. `save` itself always overwrites; the refusal happens here.
    pub fn new(
        title: impl Into<String>,
        path: impl Into<PathBuf>,
        options: DocumentOptions,
    ) -> Result<Self> {
        let path = path.into();
        let path = if path.to_string_lossy().ends_with(".md") {
            path
        } else {
            PathBuf::from(format!("{}.md", path.display()))
        };
        if !options.overwrite && path.exists() {
            return Err(Error::DestinationExists(path));
        }
        Ok(Self {
            title: title.into(),
            path,
            sections: IndexMap::new(),
            table_of_contents: options.table_of_contents,
        })
    }

    /// Insert a section keyed by its heading text, replacing any existing
    /// section with that title (which keeps its original position). A plain
    /// string becomes an empty level-1 section.
    pub fn add_section(&mut self, section: impl Into<Section>) -> &mut Section {
        let section = section.into();
        let key = section.title_text().to_string();
        match self.sections.entry(key) {
            Entry::Occupied(mut slot) => {
                slot.insert(section);
                slot.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(section),
        }
    }

    /// Look up a section by its title text
    pub fn section_mut(&mut self, title: &str) -> Option<&mut Section> {
        self.sections.get_mut(title)
    }

    /// Render the whole document: title, optional table of contents, then
    /// every section in insertion order.
    pub fn render(&self) -> String {
        let mut out = format!("# {}\n", self.title);
        if self.table_of_contents {
            out.push_str("## Table of Contents\n");
            for section in self.sections.values() {
                let text = section.title_text();
                out.push_str(&format!("* [{}](#{})\n", text, slug(text)));
            }
        }
        for section in self.sections.values() {
            out.push_str(&section.render());
        }
        out
    }

    /// Write the rendered document to the configured path as UTF-8,
    /// overwriting whatever is there.
    pub fn save(&self) -> Result<()> {
        fs::write(&self.path, self.render())?;
        Ok(())
    }

    /// Retarget the document and save
    pub fn save_as(&mut self, path: impl Into<PathBuf>) -> Result<()> {
        self.path = path.into();
        self.save()
    }
}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}

/// URL-fragment identifier for a heading: lower-cased, spaces to hyphens
fn slug(text: &str) -> String {
    text.to_lowercase().replace(' ', "-")
}
