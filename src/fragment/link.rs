//! Markdown links

use crate::config::LinkOptions;

use super::Fragment;

/// A link with display text (the URL itself when no text is given).
#[derive(Debug, Clone, Default)]
pub struct Link {
    pub url: String,
    pub text: String,
    pub options: LinkOptions,
}

impl Link {
    /// Create a link whose text is the URL
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            text: url.clone(),
            url,
            options: LinkOptions::default(),
        }
    }

    /// Create a link with display text
    pub fn with_text(url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            text: text.into(),
            options: LinkOptions::default(),
        }
    }

    pub fn with_options(
        url: impl Into<String>,
        text: impl Into<String>,
        options: LinkOptions,
    ) -> Self {
        Self {
            url: url.into(),
            text: text.into(),
            options,
        }
    }
}

impl Fragment for Link {
    fn render(&self) -> String {
        let mut out = String::new();
        if let Some(title) = &self.options.title {
            out.push_str(&format!("### {}\n", title));
        }
        out.push_str(&format!("[{}]({}", self.text, self.url));
        if self.options.new_tab {
            out.push_str(" target=_blank");
        }
        out.push(')');
        if self.options.trailing {
            out.push('\n');
        }
        out
    }
}

impl std::fmt::Display for Link {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}
