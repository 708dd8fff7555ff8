//! The neutral tree: the interchange representation of one layout node and
//! its descendants, independent of any editor runtime.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Loosely typed node properties.
///
/// Two keys are reserved: [`STYLE_PROP`] holds a style map object and
/// [`TEXT_PROP`] holds literal text content.
pub type Props = Map<String, Value>;

pub const STYLE_PROP: &str = "style";
pub const TEXT_PROP: &str = "children";

/// One node of the neutral tree.
///
/// Child order is render order. A node kind that owns raw text keeps it in
/// `props.children`; every other kind uses the structural `children` list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SerializedTree {
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<Props>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<SerializedTree>>,
}

impl SerializedTree {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            ..Default::default()
        }
    }

    pub fn with_internal_id(mut self, id: impl Into<String>) -> Self {
        self.internal_id = Some(id.into());
        self
    }

    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: SerializedTree) -> Self {
        self.children.get_or_insert_with(Vec::new).push(child);
        self
    }

    pub fn prop(&self, key: &str) -> Option<&Value> {
        self.props.as_ref().and_then(|props| props.get(key))
    }

    /// The style map, if `props.style` is present and is an object.
    pub fn style(&self) -> Option<&Map<String, Value>> {
        self.prop(STYLE_PROP).and_then(Value::as_object)
    }

    /// The literal text content, if `props.children` is a string.
    pub fn text(&self) -> Option<&str> {
        self.prop(TEXT_PROP).and_then(Value::as_str)
    }

    /// Structural children; empty when the node has none.
    pub fn children(&self) -> &[SerializedTree] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(SerializedTree::node_count).sum::<usize>()
    }
}
