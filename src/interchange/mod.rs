//! One-stop conversions between the editor graph, layout files and
//! permalinks.
//!
//! ```ignore
//! use flexlayout::InterchangeBuilder;
//!
//! let interchange = InterchangeBuilder::new().with_compression(9).build()?;
//! let graph = interchange.markup_to_graph(&xml)?;
//! let link = interchange.share(&project).await?;
//! ```

mod api;
mod builder;

pub use api::Interchange;
pub use builder::InterchangeBuilder;
