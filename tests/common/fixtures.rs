use flexlayout::{NativeNode, NodeGraph, NodeId, SerializedTree};
use serde_json::{Value, json};

/// `Box > Label("Hi")`, the smallest tree with both kinds of content.
pub fn box_with_label() -> SerializedTree {
    SerializedTree::new("Box")
        .with_prop("style", json!({ "display": "flex" }))
        .with_child(SerializedTree::new("Label").with_prop("children", "Hi"))
}

/// A dialog-like tree using most of the built-in components, with explicit
/// ids so that markup round trips are exact.
pub fn settings_dialog() -> SerializedTree {
    SerializedTree::new("Box")
        .with_prop("id", "root")
        .with_prop(
            "style",
            json!({ "flexDirection": "column", "paddingTop": "8px", "rowGap": "4px" }),
        )
        .with_child(
            SerializedTree::new("Label")
                .with_prop("id", "title")
                .with_prop("style", json!({ "fontSize": "18px", "textAlign": "center" }))
                .with_prop("children", "Settings"),
        )
        .with_child(
            SerializedTree::new("Box")
                .with_prop("id", "row")
                .with_prop("style", json!({ "flexDirection": "row" }))
                .with_child(
                    SerializedTree::new("SimpleGUI.CheckBox")
                        .with_prop("id", "sound")
                        .with_prop("children", "Enable sound"),
                )
                .with_child(
                    SerializedTree::new("SimpleGUI.Slider")
                        .with_prop("id", "volume")
                        .with_prop("style", json!({ "flexGrow": "1" })),
                ),
        )
        .with_child(
            SerializedTree::new("SimpleGUI.ListBox")
                .with_prop("id", "devices")
                .with_prop("children", "Speakers\nHeadphones\n"),
        )
        .with_child(
            SerializedTree::new("SimpleGUI.Button")
                .with_prop("id", "ok")
                .with_prop("children", "OK"),
        )
}

fn node(type_name: &str, parent: Option<&str>, props: Value, children: &[&str]) -> NativeNode {
    let mut node = NativeNode::new(type_name);
    node.is_canvas = type_name == "Box";
    node.parent = parent.map(NodeId::new);
    node.props = props.as_object().cloned().unwrap_or_default();
    node.nodes = children.iter().map(|id| NodeId::new(*id)).collect();
    node
}

/// The editor graph for a small form, as the editor would save it.
pub fn form_graph() -> NodeGraph {
    let mut graph = NodeGraph::new();
    graph.insert(
        NodeId::root(),
        node("Box", None, json!({ "style": { "flexDirection": "column" } }), &["lbl", "btn", "hid"]),
    );
    graph.insert(
        NodeId::new("lbl"),
        node("Label", Some("ROOT"), json!({ "style": {}, "children": "Name:\nFull" }), &[]),
    );
    graph.insert(
        NodeId::new("btn"),
        node("SimpleGUI.Button", Some("ROOT"), json!({ "style": { "width": "80px" }, "children": "Go" }), &[]),
    );
    let mut hidden = node("Box", Some("ROOT"), json!({ "style": { "height": "10px" } }), &[]);
    hidden.hidden = true;
    graph.insert(NodeId::new("hid"), hidden);
    graph
}
