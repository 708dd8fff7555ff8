use super::graph::{NativeNode, NodeGraph, NodeType};
use crate::error::BridgeError;
use flexlayout_traits::ComponentResolver;
use flexlayout_types::{NodeId, Props, STYLE_PROP, SerializedTree, TEXT_PROP};
use serde_json::Value;

/// Rebuilds a native node graph from a neutral tree.
///
/// The tree root becomes `ROOT`. Other nodes keep their `internalId` unless
/// it is missing or already taken, in which case a random id is generated.
/// A `display: none` style entry turns into the native `hidden` flag.
///
/// # Errors
///
/// Returns `BridgeError::UnknownComponentType` if any node's type does not
/// resolve, ignoring case.
pub fn deserialize_tree<R>(tree: &SerializedTree, resolver: &R) -> Result<NodeGraph, BridgeError>
where
    R: ComponentResolver + ?Sized,
{
    let mut graph = NodeGraph::new();
    parse_node(tree, None, resolver, &mut graph)?;
    Ok(graph)
}

fn parse_node<R>(
    subtree: &SerializedTree,
    parent: Option<&NodeId>,
    resolver: &R,
    graph: &mut NodeGraph,
) -> Result<NodeId, BridgeError>
where
    R: ComponentResolver + ?Sized,
{
    let component = resolver
        .resolve(&subtree.type_name)
        .ok_or_else(|| BridgeError::UnknownComponentType(subtree.type_name.clone()))?;

    let id = match parent {
        None => NodeId::root(),
        Some(_) => assign_id(subtree.internal_id.as_deref(), graph),
    };

    let mut style = subtree.style().cloned().unwrap_or_default();
    let hidden = style.get("display").and_then(Value::as_str) == Some("none");
    if hidden {
        style.shift_remove("display");
    }

    let mut props = Props::new();
    if let Some(source) = &subtree.props {
        for (key, value) in source {
            if key != STYLE_PROP && key != TEXT_PROP {
                props.insert(key.clone(), value.clone());
            }
        }
    }
    props.insert(STYLE_PROP.to_string(), Value::Object(style));

    let has_text_child = component.descriptor.has_text_child();
    if has_text_child {
        let text = subtree
            .prop(TEXT_PROP)
            .filter(|value| !value.is_null())
            .cloned()
            .unwrap_or_else(|| Value::String(String::new()));
        props.insert(TEXT_PROP.to_string(), text);
    }

    let node = NativeNode {
        node_type: NodeType::resolved(component.name),
        is_canvas: component.descriptor.is_canvas,
        props,
        display_name: component.display_name().to_string(),
        custom: Props::new(),
        parent: parent.cloned(),
        hidden,
        nodes: Vec::new(),
        linked_nodes: Default::default(),
    };
    // Reserve the slot first so the graph lists parents before children.
    graph.insert(id.clone(), node);

    if !has_text_child {
        let mut child_ids = Vec::with_capacity(subtree.children().len());
        for child in subtree.children() {
            child_ids.push(parse_node(child, Some(&id), resolver, graph)?);
        }
        if let Some(node) = graph.get_mut(id.as_str()) {
            node.nodes = child_ids;
        }
    }

    Ok(id)
}

fn assign_id(internal_id: Option<&str>, graph: &NodeGraph) -> NodeId {
    match internal_id.filter(|id| !id.is_empty()) {
        Some(id) if !graph.contains(id) => NodeId::new(id),
        Some(id) => {
            log::warn!("Node id '{}' is already in use, generating a new one", id);
            fresh_id(graph)
        }
        None => fresh_id(graph),
    }
}

fn fresh_id(graph: &NodeGraph) -> NodeId {
    loop {
        let id = NodeId::random();
        if !graph.contains(id.as_str()) {
            return id;
        }
    }
}
