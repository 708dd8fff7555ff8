// src/interchange/builder.rs
use super::api::Interchange;
use crate::error::InterchangeError;
use flexlayout_core::traits::ComponentRegistry;
use flexlayout_core::{MarkupOptions, PermalinkOptions};
use std::fs;
use std::path::Path;

/// A builder for creating an [`Interchange`].
#[derive(Debug, Clone, Default)]
pub struct InterchangeBuilder {
    registry: Option<ComponentRegistry>,
    markup: MarkupOptions,
    permalink: PermalinkOptions,
}

impl InterchangeBuilder {
    /// Creates a builder with the built-in FlexLayout components, pretty
    /// printed markup and the default compression level.
    pub fn new() -> Self {
        Default::default()
    }

    /// Replaces the built-in component kinds.
    pub fn with_registry(mut self, registry: ComponentRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Loads component kinds from a JSON file of `name -> descriptor`.
    pub fn with_registry_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, InterchangeError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            InterchangeError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read component table from '{}': {}", path.display(), e),
            ))
        })?;
        self.registry = Some(ComponentRegistry::from_json(&json)?);
        Ok(self)
    }

    pub fn with_markup_options(mut self, options: MarkupOptions) -> Self {
        self.markup = options;
        self
    }

    /// Turns markup pretty printing on or off.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.markup.pretty = pretty;
        self
    }

    /// Sets the deflate level used for permalinks (0-9).
    pub fn with_compression(mut self, level: u32) -> Self {
        self.permalink.compression = level;
        self
    }

    pub fn build(self) -> Result<Interchange, InterchangeError> {
        if self.permalink.compression > 9 {
            return Err(InterchangeError::Config(format!(
                "Compression level must be between 0 and 9, got {}",
                self.permalink.compression
            )));
        }
        let registry = match self.registry {
            Some(registry) if registry.is_empty() => {
                return Err(InterchangeError::Config(
                    "Component registry is empty".to_string(),
                ));
            }
            Some(registry) => registry,
            None => ComponentRegistry::flex_layout(),
        };
        log::debug!(
            "Building interchange with {} component kinds, compression level {}",
            registry.len(),
            self.permalink.compression
        );
        Ok(Interchange::new(
            registry,
            self.markup,
            self.permalink.transport(),
        ))
    }
}
