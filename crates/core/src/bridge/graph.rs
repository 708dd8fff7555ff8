//! The editor's native node graph, in the shape the editor saves it.

use flexlayout_types::{NodeId, Props, ROOT_NODE};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A node's kind: either a bare name or the `{ resolvedName }` form the
/// editor writes for user components.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum NodeType {
    Resolved {
        #[serde(rename = "resolvedName")]
        resolved_name: String,
    },
    Name(String),
}

impl NodeType {
    pub fn resolved(name: impl Into<String>) -> Self {
        NodeType::Resolved {
            resolved_name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            NodeType::Resolved { resolved_name } => resolved_name,
            NodeType::Name(name) => name,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NativeNode {
    #[serde(rename = "type")]
    pub node_type: NodeType,
    #[serde(default)]
    pub is_canvas: bool,
    #[serde(default)]
    pub props: Props,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub custom: Props,
    #[serde(default)]
    pub parent: Option<NodeId>,
    #[serde(default)]
    pub hidden: bool,
    /// Ordered child ids.
    #[serde(default)]
    pub nodes: Vec<NodeId>,
    #[serde(default)]
    pub linked_nodes: IndexMap<String, NodeId>,
}

impl NativeNode {
    pub fn new(type_name: impl Into<String>) -> Self {
        let type_name = type_name.into();
        Self {
            node_type: NodeType::resolved(type_name.clone()),
            is_canvas: false,
            props: Props::new(),
            display_name: type_name,
            custom: Props::new(),
            parent: None,
            hidden: false,
            nodes: Vec::new(),
            linked_nodes: IndexMap::new(),
        }
    }

    pub fn type_name(&self) -> &str {
        self.node_type.name()
    }
}

/// Flat id-to-node storage. Insertion order is kept so that saved graphs
/// re-serialize in the order they were read.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct NodeGraph {
    nodes: IndexMap<NodeId, NativeNode>,
}

impl NodeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn get(&self, id: &str) -> Option<&NativeNode> {
        self.nodes.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut NativeNode> {
        self.nodes.get_mut(id)
    }

    pub fn root(&self) -> Option<&NativeNode> {
        self.get(ROOT_NODE)
    }

    /// Inserts or replaces a node, returning the previous one.
    pub fn insert(&mut self, id: NodeId, node: NativeNode) -> Option<NativeNode> {
        self.nodes.insert(id, node)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, &NativeNode)> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reads_editor_json() {
        let graph = NodeGraph::from_json(
            r#"{
                "ROOT": {
                    "type": { "resolvedName": "Box" },
                    "isCanvas": true,
                    "props": { "style": { "display": "flex" } },
                    "displayName": "Box",
                    "custom": {},
                    "parent": null,
                    "hidden": false,
                    "nodes": ["a1"],
                    "linkedNodes": {}
                },
                "a1": {
                    "type": "Label",
                    "props": { "children": "Hi" },
                    "parent": "ROOT",
                    "nodes": []
                }
            }"#,
        )
        .unwrap();

        assert_eq!(graph.len(), 2);
        let root = graph.root().unwrap();
        assert_eq!(root.type_name(), "Box");
        assert!(root.is_canvas);
        assert_eq!(root.nodes, vec![NodeId::new("a1")]);

        let label = graph.get("a1").unwrap();
        assert_eq!(label.node_type, NodeType::Name("Label".to_string()));
        assert_eq!(label.props["children"], json!("Hi"));
        assert_eq!(label.parent.as_ref().map(NodeId::as_str), Some("ROOT"));
        assert!(!label.hidden);
    }

    #[test]
    fn test_json_round_trip_keeps_order() {
        let mut graph = NodeGraph::new();
        graph.insert(NodeId::root(), NativeNode::new("Box"));
        graph.insert(NodeId::new("z"), NativeNode::new("Label"));
        graph.insert(NodeId::new("a"), NativeNode::new("Label"));

        let text = graph.to_json().unwrap();
        let back = NodeGraph::from_json(&text).unwrap();
        assert_eq!(back, graph);
        let ids: Vec<&str> = back.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["ROOT", "z", "a"]);
    }
}
