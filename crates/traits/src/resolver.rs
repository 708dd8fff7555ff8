//! ComponentResolver trait for looking up node kinds by name.
//!
//! The editor owns the set of component kinds. Import only needs three facts
//! about each one, so the contract is a name-to-descriptor mapping validated
//! once when it is built and matched case-insensitively afterwards.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Debug;
use thiserror::Error;

/// Error type for building a component registry.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Component name must not be empty")]
    EmptyName,

    #[error("Component '{name}' conflicts with already registered '{existing}'")]
    Duplicate { name: String, existing: String },

    #[error("Invalid component table: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ComponentInfo {
    /// The kind owns raw text (`props.children`) instead of child nodes.
    #[serde(default)]
    pub has_text_child: bool,
}

/// What import needs to know about a component kind.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDescriptor {
    #[serde(default)]
    pub is_canvas: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default)]
    pub info: ComponentInfo,
}

impl ComponentDescriptor {
    /// A container that accepts dropped child nodes.
    pub fn canvas() -> Self {
        Self {
            is_canvas: true,
            ..Default::default()
        }
    }

    /// A leaf whose content is literal text.
    pub fn text() -> Self {
        Self {
            info: ComponentInfo {
                has_text_child: true,
            },
            ..Default::default()
        }
    }

    /// A leaf with neither children nor text.
    pub fn leaf() -> Self {
        Self::default()
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn has_text_child(&self) -> bool {
        self.info.has_text_child
    }
}

/// A successful lookup: the canonical (registered) name and its descriptor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedComponent<'a> {
    pub name: &'a str,
    pub descriptor: &'a ComponentDescriptor,
}

impl ResolvedComponent<'_> {
    /// The descriptor's display name, falling back to the canonical name.
    pub fn display_name(&self) -> &str {
        self.descriptor.display_name.as_deref().unwrap_or(self.name)
    }
}

/// A trait for resolving node type names to component descriptors.
pub trait ComponentResolver: Send + Sync + Debug {
    /// Looks up `type_name` ignoring ASCII case.
    fn resolve(&self, type_name: &str) -> Option<ResolvedComponent<'_>>;

    /// Returns a human-readable name for this resolver (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// A validated table of component kinds.
#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
    entries: Vec<(String, ComponentDescriptor)>,
    by_folded_name: HashMap<String, usize>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The component kinds shipped with the FlexLayout editor.
    pub fn flex_layout() -> Self {
        let mut registry = Self::new();
        for (name, descriptor) in [
            ("Box", ComponentDescriptor::canvas()),
            ("Label", ComponentDescriptor::text()),
            ("SimpleGUI.Button", ComponentDescriptor::text()),
            ("SimpleGUI.CheckBox", ComponentDescriptor::text()),
            ("SimpleGUI.RadioButtons", ComponentDescriptor::text()),
            ("SimpleGUI.HorizontalRadioButtons", ComponentDescriptor::text()),
            ("SimpleGUI.ColorPicker", ComponentDescriptor::leaf()),
            ("SimpleGUI.ListBox", ComponentDescriptor::text()),
            ("SimpleGUI.Slider", ComponentDescriptor::leaf()),
            ("SimpleGUI.VerticalSlider", ComponentDescriptor::leaf()),
            ("SimpleGUI.TextArea", ComponentDescriptor::text()),
            ("SimpleGUI.TextBox", ComponentDescriptor::text()),
        ] {
            registry.insert(name.to_string(), descriptor);
        }
        registry
    }

    /// Builds a registry from a JSON object of `name -> descriptor`, in the
    /// shape `{ "isCanvas": bool, "displayName"?: str, "info"?: { "hasTextChild"?: bool } }`.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let table: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;
        let mut registry = Self::new();
        for (name, value) in table {
            let descriptor: ComponentDescriptor = serde_json::from_value(value)?;
            registry.register(name, descriptor)?;
        }
        Ok(registry)
    }

    /// Adds a component kind.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::EmptyName` for an empty name and
    /// `RegistryError::Duplicate` if a name equal ignoring ASCII case is
    /// already registered.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        descriptor: ComponentDescriptor,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if let Some(&index) = self.by_folded_name.get(&name.to_ascii_lowercase()) {
            return Err(RegistryError::Duplicate {
                name,
                existing: self.entries[index].0.clone(),
            });
        }
        self.insert(name, descriptor);
        Ok(())
    }

    /// Builder-style [`register`](Self::register).
    pub fn with(
        mut self,
        name: impl Into<String>,
        descriptor: ComponentDescriptor,
    ) -> Result<Self, RegistryError> {
        self.register(name, descriptor)?;
        Ok(self)
    }

    fn insert(&mut self, name: String, descriptor: ComponentDescriptor) {
        self.by_folded_name
            .insert(name.to_ascii_lowercase(), self.entries.len());
        self.entries.push((name, descriptor));
    }

    /// Canonical names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ComponentResolver for ComponentRegistry {
    fn resolve(&self, type_name: &str) -> Option<ResolvedComponent<'_>> {
        let index = *self.by_folded_name.get(&type_name.to_ascii_lowercase())?;
        let (name, descriptor) = &self.entries[index];
        Some(ResolvedComponent { name, descriptor })
    }

    fn name(&self) -> &'static str {
        "ComponentRegistry"
    }
}
