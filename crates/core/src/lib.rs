//! # flexlayout-core
//!
//! Tree interchange for the FlexLayout editor.
//!
//! - **bridge**: the editor's native node graph to and from the neutral tree
//! - **markup**: the neutral tree to and from the `Layout` XML document
//! - **permalink**: a whole project to and from compact URL-safe text
//! - **config**: writer options and format constants
//! - **error**: error types for all of the above
//!
//! Nothing in here touches the filesystem. Compression is injected through
//! [`ByteTransport`](traits::ByteTransport).

// Re-export foundation crates
pub use flexlayout_style as style;
pub use flexlayout_traits as traits;
pub use flexlayout_transport as transport;
pub use flexlayout_types as types;

pub mod bridge;
pub mod config;
pub mod error;
pub mod markup;
pub mod permalink;

pub use bridge::{NativeNode, NodeGraph, NodeType, deserialize_tree, serialize_graph, serialize_root};
pub use config::{LAYOUT_ELEMENT, MAX_PERMALINK_NESTING, MarkupOptions, PERMALINK_VERSION, PermalinkOptions};
pub use error::{BridgeError, MarkupError, PermalinkError};
pub use markup::{export_markup, import_markup};
pub use permalink::{ProjectData, decode_permalink, encode_permalink};

pub use types::{CanvasSize, NodeId, Props, ROOT_NODE, SerializedTree};
