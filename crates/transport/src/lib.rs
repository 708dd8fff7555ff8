//! Byte transport implementations for FlexLayout permalinks.
//!
//! ## Available Transports
//!
//! - [`DeflateTransport`]: zlib-wrapped deflate, the format browsers produce
//!   for `CompressionStream("deflate")`
//! - [`PassthroughTransport`]: identity (re-exported from flexlayout-traits)
//!
//! The [`base64url`] module holds the text armor applied after compression.

pub mod base64url;
mod deflate;

pub use deflate::{DEFAULT_MAX_INFLATED_BYTES, DeflateTransport};

// Re-export from flexlayout-traits
pub use flexlayout_traits::{ByteTransport, PassthroughTransport, TransportError};
