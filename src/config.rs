//! Per-type configuration options

use indexmap::IndexMap;

use crate::model::Value;

/// Options controlling table behavior and rendering
#[derive(Debug, Clone, Default)]
pub struct TableOptions {
    /// Optional `###` heading rendered above the table
    pub title: Option<String>,
    /// Allow unseen row keys to become new columns
    pub flexible_headers: bool,
    /// Sort descending instead of ascending
    pub sort_reverse: bool,
    /// Comma-joined header names; only the first drives the sort
    pub sort_key: Option<String>,
    /// Per-header value substitution applied at render time
    pub custom_map: IndexMap<String, IndexMap<Value, Value>>,
}

impl TableOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the table title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Allow rows to introduce new columns
    pub fn with_flexible_headers(mut self, flexible: bool) -> Self {
        self.flexible_headers = flexible;
        self
    }

    /// Sort in reverse order
    pub fn with_sort_reverse(mut self, reverse: bool) -> Self {
        self.sort_reverse = reverse;
        self
    }

    /// Set the sort key (comma-joined for multiple names)
    pub fn with_sort_key(mut self, key: impl Into<String>) -> Self {
        self.sort_key = Some(key.into());
        self
    }

    /// Replace the whole custom value map
    pub fn with_custom_map(mut self, map: IndexMap<String, IndexMap<Value, Value>>) -> Self {
        self.custom_map = map;
        self
    }

    /// Add a single value substitution for a header
    pub fn with_mapping(
        mut self,
        header: impl Into<String>,
        from: impl Into<Value>,
        to: impl Into<Value>,
    ) -> Self {
        self.custom_map
            .entry(header.into())
            .or_default()
            .insert(from.into(), to.into());
        self
    }
}

/// Options for [`crate::fragment::Image`]
#[derive(Debug, Clone, Default)]
pub struct ImageOptions {
    /// Optional `###` heading above the Markdown form
    pub title: Option<String>,
    /// Alt text; the URL when unset
    pub alt: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub align: Option<String>,
    pub caption: Option<String>,
}

impl ImageOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_align(mut self, align: impl Into<String>) -> Self {
        self.align = Some(align.into());
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

/// Options for [`crate::fragment::Link`]
#[derive(Debug, Clone)]
pub struct LinkOptions {
    /// Optional `###` heading above the link
    pub title: Option<String>,
    /// Append a ` target=_blank` token
    pub new_tab: bool,
    /// End the rendering with a newline
    pub trailing: bool,
}

impl Default for LinkOptions {
    fn default() -> Self {
        Self {
            title: None,
            new_tab: false,
            trailing: true,
        }
    }
}

impl LinkOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_new_tab(mut self, new_tab: bool) -> Self {
        self.new_tab = new_tab;
        self
    }

    pub fn with_trailing(mut self, trailing: bool) -> Self {
        self.trailing = trailing;
        self
    }
}

/// Options for [`crate::fragment::List`]
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Optional `###` heading above the list
    pub title: Option<String>,
    /// Number the items instead of bulleting them
    pub ordered: bool,
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_ordered(mut self, ordered: bool) -> Self {
        self.ordered = ordered;
        self
    }
}

/// Options for [`crate::document::Document`]
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentOptions {
    /// Allow the destination file to exist at construction time
    pub overwrite: bool,
    /// Generate a table of contents when rendering
    pub table_of_contents: bool,
}

impl DocumentOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn with_table_of_contents(mut self, toc: bool) -> Self {
        self.table_of_contents = toc;
        self
    }
}
