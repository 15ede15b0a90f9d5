//! Markdown and inline-HTML images

use crate::config::ImageOptions;

use super::Fragment;

/// An image reference.
///
/// Renders as Markdown image syntax unless a width, height, or alignment
/// is configured, in which case the inline HTML `<img>` form is used
/// (Markdown has no syntax for sizing).
#[derive(Debug, Clone, Default)]
pub struct Image {
    pub url: String,
    pub options: ImageOptions,
}

impl Image {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            options: ImageOptions::default(),
        }
    }

    pub fn with_options(url: impl Into<String>, options: ImageOptions) -> Self {
        Self {
            url: url.into(),
            options,
        }
    }

    fn alt(&self) -> &str {
        self.options.alt.as_deref().unwrap_or(&self.url)
    }

    /// The inline HTML form, carrying size and alignment attributes
    pub fn html(&self) -> String {
        let mut out = format!("<img src=\"{}\" alt=\"{}\"", self.url, self.alt());
        if let Some(width) = self.options.width {
            out.push_str(&format!(" width=\"{}\"", width));
        }
        if let Some(height) = self.options.height {
            out.push_str(&format!(" height=\"{}\"", height));
        }
        if let Some(align) = &self.options.align {
            out.push_str(&format!(" align=\"{}\"", align));
        }
        out.push('>');
        if let Some(caption) = &self.options.caption {
            out.push_str(&format!("<br><i>{}</i>", caption));
        }
        out
    }

    /// The plain Markdown form
    pub fn markdown(&self) -> String {
        let mut out = String::new();
        if let Some(title) = &self.options.title {
            out.push_str(&format!("### {}\n", title));
        }
        out.push_str(&format!("![{}]({})\n", self.alt(), self.url));
        if let Some(caption) = &self.options.caption {
            out.push_str(&format!("_{}_\n", caption));
        }
        out
    }
}

impl Fragment for Image {
    fn render(&self) -> String {
        let sized = self.options.width.is_some()
            || self.options.height.is_some()
            || self.options.align.is_some();
        if sized {
            self.html()
        } else {
            self.markdown()
        }
    }
}

impl std::fmt::Display for Image {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_form() {
        let image = Image::with_options(
            "http://www.google.com",
            ImageOptions::new().with_alt("Google"),
        );
        assert_eq!(image.render(), "![Google](http://www.google.com)\n");
    }

    #[test]
    fn test_alt_defaults_to_url() {
        let image = Image::new("http://www.google.com");
        assert_eq!(
            image.render(),
            "![http://www.google.com](http://www.google.com)\n"
        );
    }

    #[test]
    fn test_title_and_caption() {
        let image = Image::with_options(
            "http://www.google.com",
            ImageOptions::new()
                .with_alt("Google")
                .with_title("Title")
                .with_caption("Caption"),
        );
        assert_eq!(
            image.markdown(),
            "### Title\n![Google](http://www.google.com)\n_Caption_\n"
        );
    }

    #[test]
    fn test_sized_image_uses_html() {
        let image = Image::with_options(
            "http://www.google.com",
            ImageOptions::new().with_alt("Google").with_width(100).with_height(100),
        );
        assert_eq!(
            image.render(),
            "<img src=\"http://www.google.com\" alt=\"Google\" width=\"100\" height=\"100\">"
        );
    }

    #[test]
    fn test_aligned_image_with_caption() {
        let image = Image::with_options(
            "x.png",
            ImageOptions::new().with_align("center").with_caption("A caption"),
        );
        assert_eq!(
            image.render(),
            "<img src=\"x.png\" alt=\"x.png\" align=\"center\"><br><i>A caption</i>"
        );
    }
}
