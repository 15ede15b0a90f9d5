//! Renderable Markdown fragments

mod heading;
mod image;
mod link;
mod list;

pub use heading::Heading;
pub use image::Image;
pub use link::Link;
pub use list::List;

/// A self-contained piece of a document, convertible to its Markdown form.
pub trait Fragment {
    /// Render this fragment as Markdown text
    fn render(&self) -> String;
}
