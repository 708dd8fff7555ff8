//! # flexlayout
//!
//! Tree interchange for the FlexLayout GUI designer: save editor graphs as
//! `Layout` XML files, load them back, and pack whole projects into
//! shareable `#pj:` permalinks.
//!
//! Most callers want [`InterchangeBuilder`]. The individual codecs live in
//! [`flexlayout_core`] and are re-exported here.

pub mod error;
pub mod fragment;
pub mod interchange;
pub mod project;

pub use error::InterchangeError;
pub use fragment::{PERMALINK_FRAGMENT_PREFIX, permalink_from_fragment, permalink_url};
pub use interchange::{Interchange, InterchangeBuilder};
pub use project::{
    DEFAULT_PROJECT_NAME, normalize_project_name, project_name_from_path, read_layout_file,
    with_xml_extension, write_layout_file,
};

// Re-export the core library
pub use flexlayout_core::{
    BridgeError, CanvasSize, MarkupError, MarkupOptions, NativeNode, NodeGraph, NodeId, NodeType,
    PermalinkError, PermalinkOptions, ProjectData, ROOT_NODE, SerializedTree, decode_permalink,
    deserialize_tree, encode_permalink, export_markup, import_markup, serialize_graph,
    serialize_root,
};
pub use flexlayout_core::{style, traits, transport, types};
