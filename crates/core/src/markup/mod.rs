//! The layout markup format: one `Layout` element wrapping the root node.
//!
//! Node kinds become element names and props become attributes. The style
//! map is written as a single inline CSS string and text content as text
//! nodes with `<br/>` between lines.

pub mod export;
pub mod import;

pub use export::export_markup;
pub use import::import_markup;

/// Element that stands for a line feed inside text content.
pub const LINE_BREAK_ELEMENT: &str = "br";
