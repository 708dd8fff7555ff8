//! Error types for the graph bridge and both codecs.

use flexlayout_traits::TransportError;
use flexlayout_transport::base64url::DecodeError;
use thiserror::Error;

/// Markup that cannot be turned into a tree, or a tree that cannot be written.
#[derive(Error, Debug)]
pub enum MarkupError {
    #[error("Invalid layout document: {0}")]
    InvalidFormat(String),

    #[error("XML parse error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("XML write error: {0}")]
    Write(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    #[error("Unknown component type: {0}")]
    UnknownComponentType(String),

    #[error("Node '{0}' is referenced but not present in the graph")]
    MissingNode(String),

    #[error("Node '{0}' is its own ancestor")]
    Cycle(String),
}

#[derive(Error, Debug)]
pub enum PermalinkError {
    #[error("Unsupported permalink version: {found} (expected {expected})")]
    UnsupportedVersion { found: String, expected: u64 },

    #[error("Permalink is not valid base64: {0}")]
    Base64(#[from] DecodeError),

    #[error("CBOR error: {0}")]
    Cbor(String),

    #[error("Invalid permalink data: {0}")]
    InvalidPayload(String),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl PermalinkError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        PermalinkError::InvalidPayload(message.into())
    }
}
