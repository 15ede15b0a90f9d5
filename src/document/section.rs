//! Document sections

use crate::error::Result;
use crate::fragment::{Fragment, Heading};
use crate::model::Table;

/// Content accepted by [`Section::add`].
///
/// Raw text gets the two-trailing-space Markdown hard line break;
/// pre-rendered fragments are appended as-is.
#[derive(Debug, Clone)]
pub enum Content {
    Text(String),
    Rendered(String),
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Text(text)
    }
}

impl<F: Fragment> From<&F> for Content {
    fn from(fragment: &F) -> Self {
        Content::Rendered(fragment.render())
    }
}

/// A titled block of accumulated content.
#[derive(Debug, Clone)]
pub struct Section {
    pub heading: Heading,
    pub content: String,
}

impl Section {
    /// Create an empty section; a plain string title becomes a level-1
    /// heading.
    pub fn new(heading: impl Into<Heading>) -> Self {
        Self {
            heading: heading.into(),
            content: String::new(),
        }
    }

    /// Create a section with initial content (no hard break appended)
    pub fn with_content(heading: impl Into<Heading>, content: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            content: content.into(),
        }
    }

    /// The heading text, used as the section's key in a document
    pub fn title_text(&self) -> &str {
        &self.heading.text
    }

    /// Append content, separated from what came before by a newline.
    ///
    /// Content is stringified at this point; raw text additionally gets two
    /// trailing spaces.
    pub fn add(&mut self, content: impl Into<Content>) {
        if !self.content.is_empty() {
            self.content.push('\n');
        }
        match content.into() {
            Content::Text(text) => {
                self.content.push_str(&text);
                self.content.push_str("  ");
            }
            Content::Rendered(rendered) => self.content.push_str(&rendered),
        }
    }

    /// Render a table (sorting and remapping as configured) into the
    /// section.
    pub fn add_table(&mut self, table: &mut Table) -> Result<()> {
        let rendered = table.render()?;
        self.add(Content::Rendered(rendered));
        Ok(())
    }
}

impl Fragment for Section {
    fn render(&self) -> String {
        format!("{}\n{}\n", self.heading.render(), self.content)
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl From<&str> for Section {
    fn from(title: &str) -> Self {
        Section::new(title)
    }
}

impl From<String> for Section {
    fn from(title: String) -> Self {
        Section::new(title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TableOptions;
    use crate::fragment::List;
    use crate::model::Row;

    #[test]
    fn test_empty_section() {
        let section = Section::new("Section 1");
        assert_eq!(section.render(), "# Section 1\n\n");
        assert_eq!(section.title_text(), "Section 1");
    }

    #[test]
    fn test_add_text_gets_hard_break() {
        let mut section = Section::new("Section 1");
        section.add("This is a paragraph.");
        assert_eq!(section.render(), "# Section 1\nThis is a paragraph.  \n");
    }

    #[test]
    fn test_add_two_paragraphs() {
        let mut section = Section::new("Section 1");
        section.add("This is a paragraph.");
        section.add("This is another paragraph.");
        assert_eq!(
            section.render(),
            "# Section 1\nThis is a paragraph.  \nThis is another paragraph.  \n"
        );
    }

    #[test]
    fn test_add_fragment_no_hard_break() {
        let mut section = Section::new("Section 1");
        let list = List::new(["a", "b"]);
        section.add(&list);
        assert_eq!(section.render(), "# Section 1\n- a\n- b\n\n");
    }

    #[test]
    fn test_add_table() {
        let mut section = Section::new(Heading::with_level("Data", 2));
        let mut table = Table::with_options(
            ["Name", "Value"],
            TableOptions::default().with_sort_key("Value"),
        );
        table
            .add_rows(vec![
                Row::new().with("Name", "Second").with("Value", 2),
                Row::new().with("Name", "First").with("Value", 1),
            ])
            .unwrap();
        section.add_table(&mut table).unwrap();
        assert_eq!(
            section.render(),
            "## Data\n| Name | Value |\n| --- | --- |\n| First | 1 |\n| Second | 2 |\n\n"
        );
    }
}
