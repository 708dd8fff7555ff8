use super::graph::{NativeNode, NodeGraph};
use crate::error::BridgeError;
use flexlayout_types::{Props, ROOT_NODE, STYLE_PROP, SerializedTree, TEXT_PROP};
use serde_json::Value;
use std::collections::HashSet;

/// Serializes the subtree rooted at the editor's root node.
pub fn serialize_root(graph: &NodeGraph) -> Result<SerializedTree, BridgeError> {
    serialize_graph(graph, ROOT_NODE)
}

/// Serializes the subtree rooted at `root_id`.
///
/// Every node carries its graph id as `internalId`. Child order follows the
/// native `nodes` list. A malformed `children` or `style` prop is logged and
/// left out; the rest of the tree is still produced.
pub fn serialize_graph(graph: &NodeGraph, root_id: &str) -> Result<SerializedTree, BridgeError> {
    let mut ancestors = HashSet::new();
    serialize_node(graph, root_id, &mut ancestors)
}

fn serialize_node<'g>(
    graph: &'g NodeGraph,
    id: &'g str,
    ancestors: &mut HashSet<&'g str>,
) -> Result<SerializedTree, BridgeError> {
    let node = graph
        .get(id)
        .ok_or_else(|| BridgeError::MissingNode(id.to_string()))?;
    if !ancestors.insert(id) {
        return Err(BridgeError::Cycle(id.to_string()));
    }

    let mut subtree = SerializedTree::new(node.type_name()).with_internal_id(id);
    let props = convert_props(id, node);
    if !props.is_empty() {
        subtree.props = Some(props);
    }

    for child_id in &node.nodes {
        let child = serialize_node(graph, child_id.as_str(), ancestors)?;
        subtree = subtree.with_child(child);
    }

    ancestors.remove(id);
    Ok(subtree)
}

fn convert_props(id: &str, node: &NativeNode) -> Props {
    let mut props = Props::new();
    for (key, value) in &node.props {
        match key.as_str() {
            TEXT_PROP => {
                if !value.is_string() {
                    log::warn!("Node '{}': unexpected 'children' value {}, skipping", id, value);
                    continue;
                }
                props.insert(key.clone(), value.clone());
            }
            STYLE_PROP => {
                let Some(style) = value.as_object() else {
                    log::warn!("Node '{}': style is not an object ({}), skipping", id, value);
                    continue;
                };
                let mut style = style.clone();
                if node.hidden {
                    style.insert("display".to_string(), Value::from("none"));
                }
                if !style.is_empty() {
                    props.insert(key.clone(), Value::Object(style));
                }
            }
            _ => {
                props.insert(key.clone(), value.clone());
            }
        }
    }
    props
}
