//! Conversion between the editor's native node graph and the neutral tree.

pub mod deserialize;
pub mod graph;
pub mod serialize;

pub use deserialize::deserialize_tree;
pub use graph::{NativeNode, NodeGraph, NodeType};
pub use serialize::{serialize_graph, serialize_root};
