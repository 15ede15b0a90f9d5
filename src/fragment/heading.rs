//! Markdown headings

use super::Fragment;

/// A heading line: `#` characters for the level, then the text.
///
/// Renders without a trailing newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub text: String,
    /// Heading level, at least 1
    pub level: usize,
}

impl Heading {
    /// Create a level-1 heading
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_level(text, 1)
    }

    /// Create a heading at the given level (clamped to at least 1)
    pub fn with_level(text: impl Into<String>, level: usize) -> Self {
        Self {
            text: text.into(),
            level: level.max(1),
        }
    }
}

impl Fragment for Heading {
    fn render(&self) -> String {
        format!("{} {}", "#".repeat(self.level), self.text)
    }
}

impl std::fmt::Display for Heading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl From<&str> for Heading {
    fn from(text: &str) -> Self {
        Heading::new(text)
    }
}

impl From<String> for Heading {
    fn from(text: String) -> Self {
        Heading::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        assert_eq!(Heading::with_level("Header 1", 2).render(), "## Header 1");
        assert_eq!(Heading::new("Title").render(), "# Title");
    }

    #[test]
    fn test_level_floor() {
        assert_eq!(Heading::with_level("x", 0).render(), "# x");
    }
}
