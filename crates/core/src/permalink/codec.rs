use super::dictionary::{StyleKeyDictionary, TypeDictionary};
use super::wire::{WireNode, WireProp, WireTuple, nesting_depth};
use crate::config::{MAX_PERMALINK_NESTING, PERMALINK_VERSION};
use crate::error::PermalinkError;
use flexlayout_traits::ByteTransport;
use flexlayout_transport::base64url;
use flexlayout_types::{CanvasSize, Props, STYLE_PROP, SerializedTree};
use serde_json::{Map, Value};

/// Everything a permalink carries.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectData {
    pub project_name: String,
    pub canvas_size: CanvasSize,
    pub tree: SerializedTree,
}

impl ProjectData {
    pub fn new(project_name: impl Into<String>, canvas_size: CanvasSize, tree: SerializedTree) -> Self {
        Self {
            project_name: project_name.into(),
            canvas_size,
            tree,
        }
    }
}

/// Encodes a project as URL-safe text.
///
/// Style keys outside the editor vocabulary are not transmitted, and
/// neither are `internalId`s.
pub async fn encode_permalink<T: ByteTransport>(
    project: &ProjectData,
    transport: &T,
) -> Result<String, PermalinkError> {
    let binary = pack(project)?;
    let binary_len = binary.len();
    let compressed = transport.compress(binary).await?;
    let text = base64url::encode(&compressed);
    log::debug!(
        "Encoded permalink for '{}': {} nodes, {} bytes CBOR, {} chars",
        project.project_name,
        project.tree.node_count(),
        binary_len,
        text.len()
    );
    Ok(text)
}

/// Decodes text produced by [`encode_permalink`].
///
/// # Errors
///
/// Fails without a partial result on bad base64, a transport error,
/// malformed CBOR, a version other than the supported one, or a payload of
/// the wrong shape.
pub async fn decode_permalink<T: ByteTransport>(
    text: &str,
    transport: &T,
) -> Result<ProjectData, PermalinkError> {
    let compressed = base64url::decode(text)?;
    let binary = transport.decompress(compressed).await?;
    unpack(&binary)
}

/// Builds the wire tuple for `project` and writes it as CBOR.
///
/// Fails with `PermalinkError::InvalidPayload` when the result would nest
/// deeper than [`unpack`] reads.
pub fn pack(project: &ProjectData) -> Result<Vec<u8>, PermalinkError> {
    let styles = StyleKeyDictionary::shared();
    let mut types = TypeDictionary::new();
    let root = compact_node(&project.tree, &mut types, styles);

    let tuple = WireTuple {
        version: PERMALINK_VERSION,
        project_name: project.project_name.clone(),
        canvas: project.canvas_size,
        types: types.into_names(),
        root,
    };

    let value = tuple.to_cbor()?;
    let depth = nesting_depth(&value);
    if depth > MAX_PERMALINK_NESTING {
        return Err(PermalinkError::invalid(format!(
            "tree nests {} levels deep, at most {} fit in a permalink",
            depth, MAX_PERMALINK_NESTING
        )));
    }

    let mut out = Vec::new();
    ciborium::ser::into_writer(&value, &mut out)
        .map_err(|e| PermalinkError::Cbor(e.to_string()))?;
    Ok(out)
}

/// Reads CBOR written by [`pack`].
pub fn unpack(binary: &[u8]) -> Result<ProjectData, PermalinkError> {
    let value: ciborium::value::Value =
        ciborium::de::from_reader_with_recursion_limit(binary, MAX_PERMALINK_NESTING)
            .map_err(|e| PermalinkError::Cbor(e.to_string()))?;
    let tuple = WireTuple::from_cbor(value, PERMALINK_VERSION)?;

    let types = TypeDictionary::from_names(tuple.types);
    let tree = expand_node(tuple.root, &types, StyleKeyDictionary::shared())?;

    Ok(ProjectData {
        project_name: tuple.project_name,
        canvas_size: tuple.canvas,
        tree,
    })
}

fn compact_node(
    node: &SerializedTree,
    types: &mut TypeDictionary,
    styles: &StyleKeyDictionary,
) -> WireNode {
    let type_index = types.intern(&node.type_name);

    let mut props = Vec::new();
    for (key, value) in node.props.iter().flatten() {
        if key != STYLE_PROP {
            props.push((key.clone(), WireProp::Value(value.clone())));
            continue;
        }
        let Some(style) = value.as_object() else {
            log::warn!("<{}>: style is not an object ({}), skipping", node.type_name, value);
            continue;
        };
        let mut entries = Vec::with_capacity(style.len());
        for (name, value) in style {
            match styles.index_of(name) {
                Some(index) => entries.push((index, value.clone())),
                None => log::trace!("<{}>: style key '{}' has no index, dropped", node.type_name, name),
            }
        }
        props.push((key.clone(), WireProp::Style(entries)));
    }

    let children = node
        .children()
        .iter()
        .map(|child| compact_node(child, types, styles))
        .collect();

    WireNode {
        type_index,
        props,
        children,
    }
}

fn expand_node(
    node: WireNode,
    types: &TypeDictionary,
    styles: &StyleKeyDictionary,
) -> Result<SerializedTree, PermalinkError> {
    let type_name = types.name(node.type_index).ok_or_else(|| {
        PermalinkError::invalid(format!("type index {} is out of range", node.type_index))
    })?;
    let mut subtree = SerializedTree::new(type_name);

    let mut props = Props::new();
    for (key, prop) in node.props {
        let value = match prop {
            WireProp::Value(value) => value,
            WireProp::Style(entries) => {
                let mut style = Map::new();
                for (index, value) in entries {
                    let name = styles.key(index).ok_or_else(|| {
                        PermalinkError::invalid(format!("style index {} is out of range", index))
                    })?;
                    style.insert(name.to_string(), value);
                }
                Value::Object(style)
            }
        };
        props.insert(key, value);
    }
    if !props.is_empty() {
        subtree.props = Some(props);
    }

    let mut children = Vec::with_capacity(node.children.len());
    for child in node.children {
        children.push(expand_node(child, types, styles)?);
    }
    if !children.is_empty() {
        subtree.children = Some(children);
    }

    Ok(subtree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flexlayout_traits::PassthroughTransport;
    use flexlayout_transport::DeflateTransport;
    use serde_json::json;

    fn project() -> ProjectData {
        let tree = SerializedTree::new("Box")
            .with_internal_id("ROOT")
            .with_prop("style", json!({ "flexDirection": "column", "width": "100%", "display": "flex" }))
            .with_child(SerializedTree::new("Label").with_prop("children", "Hi\nthere"))
            .with_child(
                SerializedTree::new("Box").with_child(
                    SerializedTree::new("Label")
                        .with_prop("style", json!({ "fontSize": 12 }))
                        .with_prop("id", "x"),
                ),
            );
        ProjectData::new("demo", CanvasSize::new(1024, 768), tree)
    }

    #[tokio::test]
    async fn test_round_trip_drops_unknown_style_keys() {
        let transport = DeflateTransport::default();
        let text = encode_permalink(&project(), &transport).await.unwrap();
        assert!(text.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));

        let decoded = decode_permalink(&text, &transport).await.unwrap();
        assert_eq!(decoded.project_name, "demo");
        assert_eq!(decoded.canvas_size, CanvasSize::new(1024, 768));

        let expected = SerializedTree::new("Box")
            .with_prop("style", json!({ "flexDirection": "column", "width": "100%" }))
            .with_child(SerializedTree::new("Label").with_prop("children", "Hi\nthere"))
            .with_child(
                SerializedTree::new("Box").with_child(
                    SerializedTree::new("Label")
                        .with_prop("style", json!({ "fontSize": 12 }))
                        .with_prop("id", "x"),
                ),
            );
        assert_eq!(decoded.tree, expected);
    }

    #[test]
    fn test_type_dictionary_in_first_seen_order() {
        let binary = pack(&project()).unwrap();
        let value: ciborium::value::Value = ciborium::de::from_reader(binary.as_slice()).unwrap();
        let tuple = WireTuple::from_cbor(value, PERMALINK_VERSION).unwrap();
        assert_eq!(tuple.types, vec!["Box", "Label"]);
        assert_eq!(tuple.root.type_index, 0);
        assert_eq!(tuple.root.children[0].type_index, 1);
        assert_eq!(tuple.root.children[1].type_index, 0);
        assert_eq!(tuple.root.children[1].children[0].type_index, 1);
    }

    #[tokio::test]
    async fn test_version_mismatch() {
        let mut tuple = WireTuple::from_cbor(
            ciborium::de::from_reader::<ciborium::value::Value, _>(pack(&project()).unwrap().as_slice()).unwrap(),
            PERMALINK_VERSION,
        )
        .unwrap();
        tuple.version = 2;
        let mut binary = Vec::new();
        ciborium::ser::into_writer(&tuple.to_cbor().unwrap(), &mut binary).unwrap();

        let text = base64url::encode(&binary);
        let err = decode_permalink(&text, &PassthroughTransport).await.unwrap_err();
        assert!(matches!(err, PermalinkError::UnsupportedVersion { expected: 1, .. }));
    }

    #[test]
    fn test_out_of_range_indices() {
        let node = WireNode {
            type_index: 3,
            props: vec![],
            children: vec![],
        };
        let types = TypeDictionary::from_names(vec!["Box".into()]);
        assert!(matches!(
            expand_node(node, &types, StyleKeyDictionary::shared()),
            Err(PermalinkError::InvalidPayload(_))
        ));

        let node = WireNode {
            type_index: 0,
            props: vec![("style".into(), WireProp::Style(vec![(99, json!("x"))]))],
            children: vec![],
        };
        assert!(expand_node(node, &types, StyleKeyDictionary::shared()).is_err());
    }

    #[tokio::test]
    async fn test_garbage_is_rejected() {
        let transport = DeflateTransport::default();
        assert!(matches!(
            decode_permalink("not base64!", &transport).await,
            Err(PermalinkError::Base64(_))
        ));
        assert!(matches!(
            decode_permalink("AAAA", &transport).await,
            Err(PermalinkError::Transport(_))
        ));
        assert!(matches!(
            decode_permalink(&base64url::encode(&[0xff, 0x00]), &PassthroughTransport).await,
            Err(PermalinkError::Cbor(_))
        ));
    }

    fn box_chain(depth: usize) -> SerializedTree {
        let mut tree = SerializedTree::new("Box").with_prop("id", "leaf");
        for _ in 1..depth {
            tree = SerializedTree::new("Box").with_child(tree);
        }
        tree
    }

    fn chain_depth(tree: &SerializedTree) -> usize {
        1 + tree.children().first().map(chain_depth).unwrap_or(0)
    }

    #[tokio::test]
    async fn test_deep_tree_round_trip() {
        let transport = DeflateTransport::default();
        let project = ProjectData::new("deep", CanvasSize::new(800, 600), box_chain(120));
        let text = encode_permalink(&project, &transport).await.unwrap();
        let decoded = decode_permalink(&text, &transport).await.unwrap();
        assert_eq!(chain_depth(&decoded.tree), 120);
        assert_eq!(decoded.tree, project.tree);
    }

    #[tokio::test]
    async fn test_too_deep_tree_is_refused_when_encoding() {
        let project = ProjectData::new("deep", CanvasSize::new(800, 600), box_chain(200));
        let err = encode_permalink(&project, &DeflateTransport::default()).await.unwrap_err();
        assert!(matches!(err, PermalinkError::InvalidPayload(_)));
    }

    #[test]
    fn test_nesting_limit_matches_between_pack_and_unpack() {
        // A chain of n nodes nests 2n + 1 levels.
        for depth in [1, 64, 127] {
            let project = ProjectData::new("p", CanvasSize::default(), box_chain(depth));
            let binary = pack(&project).unwrap();
            assert_eq!(unpack(&binary).unwrap().tree, project.tree, "depth {}", depth);
        }
        for depth in [128, 130] {
            let project = ProjectData::new("p", CanvasSize::default(), box_chain(depth));
            assert!(
                matches!(pack(&project), Err(PermalinkError::InvalidPayload(_))),
                "depth {}",
                depth
            );
        }
    }

    #[test]
    fn test_over_nested_cbor_is_rejected() {
        let mut binary = vec![0x81; MAX_PERMALINK_NESTING + 1];
        binary.push(0x00);
        assert!(matches!(unpack(&binary), Err(PermalinkError::Cbor(_))));
    }

    #[test]
    fn test_empty_style_survives() {
        let tree = SerializedTree::new("Box").with_prop("style", json!({ "color": "red" }));
        let decoded = unpack(&pack(&ProjectData::new("p", CanvasSize::default(), tree)).unwrap()).unwrap();
        assert_eq!(decoded.tree.style(), Some(&Map::new()));
    }
}
