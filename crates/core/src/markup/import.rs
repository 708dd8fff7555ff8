use super::LINE_BREAK_ELEMENT;
use crate::config::LAYOUT_ELEMENT;
use crate::error::MarkupError;
use flexlayout_style::{from_inline_css, style_map_to_json};
use flexlayout_types::{Props, STYLE_PROP, SerializedTree, TEXT_PROP};
use once_cell::sync::Lazy;
use regex::Regex;
use roxmltree::{Document, Node};
use serde_json::Value;

static WHITESPACE_AFTER_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r">\s*").expect("BUG: invalid WHITESPACE_AFTER_TAG regex literal"));
static WHITESPACE_BEFORE_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*<").expect("BUG: invalid WHITESPACE_BEFORE_TAG regex literal"));

/// Reads a layout document back into a neutral tree.
///
/// Whitespace next to tags is not significant and is removed before
/// parsing, including at the edges of text content. Attributes other than
/// `style` become string props; `internalId` is never set.
///
/// # Errors
///
/// `MarkupError::Xml` if the text is not well-formed, and
/// `MarkupError::InvalidFormat` if the document element is not `Layout` or
/// does not hold exactly one element.
pub fn import_markup(xml: &str) -> Result<SerializedTree, MarkupError> {
    let stripped = WHITESPACE_AFTER_TAG.replace_all(xml, ">");
    let stripped = WHITESPACE_BEFORE_TAG.replace_all(&stripped, "<");
    let doc = Document::parse(&stripped)?;

    let layout = doc.root_element();
    if layout.tag_name().name() != LAYOUT_ELEMENT {
        return Err(MarkupError::InvalidFormat(format!(
            "expected <{}> but found <{}>",
            LAYOUT_ELEMENT,
            layout.tag_name().name()
        )));
    }

    let mut roots = layout.children().filter(Node::is_element);
    let root = roots.next().ok_or_else(|| {
        MarkupError::InvalidFormat(format!("<{}> has no root element", LAYOUT_ELEMENT))
    })?;
    if roots.next().is_some() {
        return Err(MarkupError::InvalidFormat(format!(
            "<{}> must contain exactly one root element",
            LAYOUT_ELEMENT
        )));
    }

    Ok(parse_element(root))
}

fn is_line_break(node: &Node) -> bool {
    node.is_element() && node.tag_name().name().eq_ignore_ascii_case(LINE_BREAK_ELEMENT)
}

fn parse_element(element: Node) -> SerializedTree {
    let mut subtree = SerializedTree::new(element.tag_name().name());
    let mut props = Props::new();

    if let Some(css) = element.attribute(STYLE_PROP) {
        match from_inline_css(css) {
            Ok(style) if !style.is_empty() => {
                props.insert(STYLE_PROP.to_string(), Value::Object(style_map_to_json(&style)));
            }
            Ok(_) => {}
            Err(e) => log::warn!("<{}>: ignoring style attribute: {}", element.tag_name().name(), e),
        }
    }

    let mut text = String::new();
    for child in element.children() {
        if child.is_text() {
            text.push_str(child.text().unwrap_or_default());
        } else if is_line_break(&child) {
            text.push('\n');
        }
    }
    if !text.is_empty() {
        props.insert(TEXT_PROP.to_string(), Value::String(text));
    }

    for attribute in element.attributes() {
        let name = attribute.name();
        if name == STYLE_PROP || name == TEXT_PROP {
            continue;
        }
        props.insert(name.to_string(), Value::String(attribute.value().to_string()));
    }

    if !props.is_empty() {
        subtree.props = Some(props);
    }

    for child in element
        .children()
        .filter(|child| child.is_element() && !is_line_break(child))
    {
        subtree = subtree.with_child(parse_element(child));
    }

    subtree
}
