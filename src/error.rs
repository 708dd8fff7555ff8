// src/error.rs
use flexlayout_core::traits::RegistryError;
use flexlayout_core::{BridgeError, MarkupError, PermalinkError};
use thiserror::Error;

/// The error type for everything the facade and the CLI do.
#[derive(Error, Debug)]
pub enum InterchangeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Markup error: {0}")]
    Markup(#[from] MarkupError),

    #[error(transparent)]
    Bridge(#[from] BridgeError),

    #[error("Permalink error: {0}")]
    Permalink(#[from] PermalinkError),

    #[error("Component registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
