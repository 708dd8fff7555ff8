//! Conversion between a [`StyleMap`] and a single inline CSS string.

use crate::case::{camel_to_kebab, kebab_to_camel};
use crate::parsers::{StyleParseError, parse_declarations, run_parser};
use crate::properties::is_known_property;
use crate::shorthand::expand_declaration;
use crate::value::{StyleMap, StyleValue};

const IMPORTANT: &str = "!important";

/// Serializes a style map as `property: value;` declarations separated by a
/// single space. Keys the style engine does not implement and empty values
/// are left out, so the result may be empty.
pub fn to_inline_css(style: &StyleMap) -> String {
    let mut declarations = Vec::with_capacity(style.len());
    for (key, value) in style {
        let property = camel_to_kebab(key);
        if !is_known_property(&property) {
            log::debug!("Ignoring unsupported style property '{}'", key);
            continue;
        }
        let text = value.to_string();
        let text = text.trim();
        if text.is_empty() {
            continue;
        }
        declarations.push(format!("{}: {};", property, text));
    }
    declarations.join(" ")
}

/// Parses an inline style string into a style map.
///
/// Property names are matched case-insensitively and converted to camelCase,
/// shorthands are expanded, and properties the style engine does not
/// implement are dropped. Values are kept as text.
pub fn from_inline_css(css: &str) -> Result<StyleMap, StyleParseError> {
    let mut style = StyleMap::new();
    if css.trim().is_empty() {
        return Ok(style);
    }

    for declaration in run_parser(parse_declarations, css)? {
        let property = declaration.property.to_ascii_lowercase();
        let value = strip_important(declaration.value);
        let longhands = match expand_declaration(&property, value) {
            Ok(longhands) => longhands,
            Err(e) => {
                log::warn!("Skipping style declaration '{}': {}", property, e);
                continue;
            }
        };
        for (name, value) in longhands {
            if is_known_property(&name) {
                style.insert(kebab_to_camel(&name), StyleValue::Text(value));
            } else {
                log::debug!("Dropping unsupported style property '{}'", name);
            }
        }
    }
    Ok(style)
}

fn strip_important(value: &str) -> &str {
    let value = value.trim_end();
    let split = value.len().saturating_sub(IMPORTANT.len());
    match (value.get(..split), value.get(split..)) {
        (Some(head), Some(tail)) if tail.eq_ignore_ascii_case(IMPORTANT) => head.trim_end(),
        _ => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style(entries: &[(&str, StyleValue)]) -> StyleMap {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_to_inline_css() {
        let map = style(&[
            ("display", "flex".into()),
            ("flexGrow", 1.0.into()),
            ("unknownThing", "x".into()),
            ("width", "".into()),
        ]);
        assert_eq!(to_inline_css(&map), "display: flex; flex-grow: 1;");
        assert_eq!(to_inline_css(&StyleMap::new()), "");
    }

    #[test]
    fn test_from_inline_css() {
        let map = from_inline_css("display: flex; Flex-Direction: column; bogus: 1").unwrap();
        assert_eq!(
            map,
            style(&[("display", "flex".into()), ("flexDirection", "column".into())])
        );
        assert!(from_inline_css("").unwrap().is_empty());
    }

    #[test]
    fn test_from_inline_css_expands_shorthands() {
        let map = from_inline_css("margin: 4px 8px; flex: 1").unwrap();
        assert_eq!(map["marginTop"], StyleValue::from("4px"));
        assert_eq!(map["marginLeft"], StyleValue::from("8px"));
        assert_eq!(map["flexBasis"], StyleValue::from("0%"));
        assert!(!map.contains_key("margin"));
        assert!(!map.contains_key("flex"));
    }

    #[test]
    fn test_invalid_shorthand_is_skipped() {
        let map = from_inline_css("margin: 1px 2px 3px 4px 5px; width: 10px").unwrap();
        assert_eq!(map, style(&[("width", "10px".into())]));
    }

    #[test]
    fn test_important_is_stripped() {
        let map = from_inline_css("width: 10px !IMPORTANT").unwrap();
        assert_eq!(map["width"], StyleValue::from("10px"));
    }

    #[test]
    fn test_round_trip() {
        let map = style(&[
            ("alignItems", "center".into()),
            ("paddingTop", "2px".into()),
            ("display", "none".into()),
        ]);
        assert_eq!(from_inline_css(&to_inline_css(&map)).unwrap(), map);
    }
}
