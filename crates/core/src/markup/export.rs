use super::LINE_BREAK_ELEMENT;
use crate::config::{LAYOUT_ELEMENT, MarkupOptions};
use crate::error::MarkupError;
use flexlayout_style::{style_map_from_json, to_inline_css};
use flexlayout_types::{NodeId, STYLE_PROP, SerializedTree, TEXT_PROP};
use once_cell::sync::Lazy;
use quick_xml::Writer;
use quick_xml::escape::escape;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::name::QName;
use regex::Regex;
use serde_json::Value;
use std::borrow::Cow;

const ID_ATTRIBUTE: &str = "id";

static XML_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_:][A-Za-z0-9_:.\-]*$").expect("BUG: invalid XML_NAME regex literal")
});

/// Writes `tree` as a layout document.
///
/// Every element gets an `id` attribute: the `id` prop if it is set,
/// otherwise the node's `internalId`, otherwise a random id.
pub fn export_markup(tree: &SerializedTree, options: &MarkupOptions) -> Result<String, MarkupError> {
    let mut writer = if options.pretty {
        Writer::new_with_indent(Vec::new(), b' ', options.indent)
    } else {
        Writer::new(Vec::new())
    };

    write(&mut writer, Event::Start(BytesStart::new(LAYOUT_ELEMENT)))?;
    write_node(&mut writer, tree)?;
    write(&mut writer, Event::End(BytesEnd::new(LAYOUT_ELEMENT)))?;

    String::from_utf8(writer.into_inner()).map_err(|e| MarkupError::Write(e.to_string()))
}

fn write(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), MarkupError> {
    writer
        .write_event(event)
        .map_err(|e| MarkupError::Write(e.to_string()))
}

fn write_node(writer: &mut Writer<Vec<u8>>, node: &SerializedTree) -> Result<(), MarkupError> {
    if !XML_NAME.is_match(&node.type_name) {
        return Err(MarkupError::InvalidFormat(format!(
            "'{}' is not a valid element name",
            node.type_name
        )));
    }

    let mut element = BytesStart::new(node.type_name.as_str());
    let mut text = None;
    let mut has_id = false;

    for (key, value) in node.props.iter().flatten() {
        match key.as_str() {
            TEXT_PROP => match value.as_str() {
                Some(s) => text = Some(s),
                None => log::warn!("<{}>: unexpected 'children' value {}, skipping", node.type_name, value),
            },
            _ if !XML_NAME.is_match(key) => {
                log::warn!("<{}>: '{}' is not a valid attribute name, skipping", node.type_name, key);
            }
            _ => {
                let Some(attribute) = attribute_value(&node.type_name, key, value) else {
                    continue;
                };
                if attribute.is_empty() {
                    continue;
                }
                has_id |= key == ID_ATTRIBUTE;
                push_attribute(&mut element, key, &attribute);
            }
        }
    }

    if !has_id {
        let id = match node.internal_id.as_deref() {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => NodeId::random().into_string(),
        };
        push_attribute(&mut element, ID_ATTRIBUTE, &id);
    }

    if text.is_none() && node.children().is_empty() {
        return write(writer, Event::Empty(element));
    }

    write(writer, Event::Start(element))?;
    if let Some(text) = text {
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                write(writer, Event::Empty(BytesStart::new(LINE_BREAK_ELEMENT)))?;
            }
            write(writer, Event::Text(BytesText::new(line)))?;
        }
    }
    for child in node.children() {
        write_node(writer, child)?;
    }
    write(writer, Event::End(BytesEnd::new(node.type_name.as_str())))
}

/// Parsers normalize raw tabs and line ends in attribute values to spaces,
/// so those are written as character references.
fn push_attribute(element: &mut BytesStart<'_>, key: &str, value: &str) {
    let escaped = escape(value)
        .replace('\n', "&#10;")
        .replace('\r', "&#13;")
        .replace('\t', "&#9;");
    element.push_attribute(Attribute {
        key: QName(key.as_bytes()),
        value: Cow::Owned(escaped.into_bytes()),
    });
}

fn attribute_value(type_name: &str, key: &str, value: &Value) -> Option<String> {
    if key == STYLE_PROP {
        return match value {
            Value::Object(style) => Some(to_inline_css(&style_map_from_json(style))),
            Value::Null => None,
            other => {
                log::warn!("<{}>: style is not an object ({}), skipping", type_name, other);
                None
            }
        };
    }
    Some(match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn compact(tree: &SerializedTree) -> String {
        export_markup(tree, &MarkupOptions::compact()).unwrap()
    }

    #[test]
    fn test_export_box_with_label() {
        let tree = SerializedTree::new("Box")
            .with_internal_id("ROOT")
            .with_prop("style", json!({ "display": "flex" }))
            .with_child(
                SerializedTree::new("Label")
                    .with_internal_id("lbl")
                    .with_prop("children", "Hi"),
            );
        assert_eq!(
            compact(&tree),
            r#"<Layout><Box style="display: flex;" id="ROOT"><Label id="lbl">Hi</Label></Box></Layout>"#
        );
    }

    #[test]
    fn test_multiline_text_uses_line_breaks() {
        let tree = SerializedTree::new("Label")
            .with_prop("id", "a")
            .with_prop("children", "Line1\nLine2\n");
        assert_eq!(
            compact(&tree),
            r#"<Layout><Label id="a">Line1<br/>Line2<br/></Label></Layout>"#
        );
    }

    #[test]
    fn test_attribute_stringification() {
        let tree = SerializedTree::new("SimpleGUI.Slider")
            .with_prop("id", "s")
            .with_prop("min", 0)
            .with_prop("ratio", 0.5)
            .with_prop("enabled", false)
            .with_prop("items", json!(["a", "b"]))
            .with_prop("title", "")
            .with_prop("note", "a < b & \"c\"");
        assert_eq!(
            compact(&tree),
            r#"<Layout><SimpleGUI.Slider id="s" min="0" ratio="0.5" enabled="false" items="[&quot;a&quot;,&quot;b&quot;]" note="a &lt; b &amp; &quot;c&quot;"/></Layout>"#
        );
    }

    #[test]
    fn test_whitespace_in_attributes_is_preserved() {
        let tree = SerializedTree::new("SimpleGUI.TextArea")
            .with_prop("id", "t")
            .with_prop("tooltip", "first\nsecond\tthird\r\nend");
        let markup = compact(&tree);
        assert_eq!(
            markup,
            r#"<Layout><SimpleGUI.TextArea id="t" tooltip="first&#10;second&#9;third&#13;&#10;end"/></Layout>"#
        );

        let imported = crate::markup::import_markup(&markup).unwrap();
        assert_eq!(
            imported.prop("tooltip"),
            Some(&json!("first\nsecond\tthird\r\nend"))
        );
    }

    #[test]
    fn test_explicit_id_wins_over_internal_id() {
        let tree = SerializedTree::new("Box")
            .with_internal_id("internal")
            .with_prop("id", "explicit");
        assert_eq!(compact(&tree), r#"<Layout><Box id="explicit"/></Layout>"#);
    }

    #[test]
    fn test_random_id_when_none_known() {
        let markup = compact(&SerializedTree::new("Box"));
        let id = markup
            .strip_prefix(r#"<Layout><Box id=""#)
            .and_then(|rest| rest.strip_suffix(r#""/></Layout>"#))
            .unwrap();
        assert_eq!(id.len(), 10);
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_bad_props_are_skipped() {
        let tree = SerializedTree::new("Label")
            .with_prop("id", "x")
            .with_prop("children", 42)
            .with_prop("style", "color: red")
            .with_prop("bad name", "v")
            .with_prop("unknownStyle", json!({}));
        assert_eq!(
            compact(&tree),
            r#"<Layout><Label id="x" unknownStyle="{}"/></Layout>"#
        );
    }

    #[test]
    fn test_empty_style_is_omitted() {
        let tree = SerializedTree::new("Box")
            .with_prop("id", "b")
            .with_prop("style", json!({ "notAProperty": "1" }));
        assert_eq!(compact(&tree), r#"<Layout><Box id="b"/></Layout>"#);
    }

    #[test]
    fn test_invalid_element_name() {
        let err = export_markup(&SerializedTree::new("Not Valid"), &MarkupOptions::default())
            .unwrap_err();
        assert!(matches!(err, MarkupError::InvalidFormat(_)));
    }

    #[test]
    fn test_pretty_output() {
        let tree = SerializedTree::new("Box")
            .with_prop("id", "root")
            .with_child(SerializedTree::new("Label").with_prop("id", "l").with_prop("children", "A\nB"));
        assert_eq!(
            export_markup(&tree, &MarkupOptions::default()).unwrap(),
            "<Layout>\n  <Box id=\"root\">\n    <Label id=\"l\">A<br/>B</Label>\n  </Box>\n</Layout>"
        );
    }
}
