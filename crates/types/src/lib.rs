pub mod geometry;
pub mod ids;
pub mod tree;

pub use geometry::CanvasSize;
pub use ids::{NodeId, ROOT_NODE};
pub use tree::{Props, SerializedTree, STYLE_PROP, TEXT_PROP};
