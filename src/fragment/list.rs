//! Markdown lists

use crate::config::ListOptions;

use super::Fragment;

/// An ordered or bulleted list.
///
/// Items are stored as text: anything pushed is stringified immediately,
/// so later changes to a pushed fragment do not show up here.
#[derive(Debug, Clone, Default)]
pub struct List {
    pub items: Vec<String>,
    pub options: ListOptions,
}

impl List {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_options(items, ListOptions::default())
    }

    pub fn with_options<I, S>(items: I, options: ListOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            options,
        }
    }

    /// Append an item, stringifying it now
    pub fn push(&mut self, item: impl ToString) {
        self.items.push(item.to_string());
    }
}

impl Fragment for List {
    fn render(&self) -> String {
        let mut out = String::new();
        if let Some(title) = &self.options.title {
            out.push_str(&format!("### {}\n", title));
        }
        if self.options.ordered {
            for (i, item) in self.items.iter().enumerate() {
                out.push_str(&format!("{}. {}\n", i + 1, item));
            }
        } else {
            for item in &self.items {
                out.push_str(&format!("- {}\n", item));
            }
        }
        out
    }
}

impl std::fmt::Display for List {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragment::Link;

    #[test]
    fn test_ordered() {
        let list = List::with_options(
            ["item 1", "item 2", "item 3"],
            ListOptions::new().with_ordered(true),
        );
        assert_eq!(list.render(), "1. item 1\n2. item 2\n3. item 3\n");
    }

    #[test]
    fn test_empty() {
        let list = List::with_options(Vec::<String>::new(), ListOptions::new().with_ordered(true));
        assert_eq!(list.render(), "");
    }

    #[test]
    fn test_push() {
        let mut list = List::with_options(
            ["item 1", "item 2", "item 3"],
            ListOptions::new().with_ordered(true),
        );
        list.push("item 4");
        assert_eq!(list.render(), "1. item 1\n2. item 2\n3. item 3\n4. item 4\n");
    }

    #[test]
    fn test_unordered() {
        let list = List::new(["item 1", "item 2", "item 3"]);
        assert_eq!(list.render(), "- item 1\n- item 2\n- item 3\n");
    }

    #[test]
    fn test_titled() {
        let list = List::with_options(
            ["item 1", "item 2", "item 3"],
            ListOptions::new().with_title("my_list"),
        );
        assert_eq!(list.render(), "### my_list\n- item 1\n- item 2\n- item 3\n");
    }

    #[test]
    fn test_pushed_fragment_is_stringified() {
        let mut list = List::new(Vec::<String>::new());
        let link = Link::with_text("http://example.com", "Example");
        list.push(&link);
        assert_eq!(list.items, vec!["[Example](http://example.com)\n"]);
    }
}
