//! The editor's fixed style vocabulary.
//!
//! These are the properties the property panel edits. The permalink style-key
//! dictionary is derived from this table, so encoder and decoder agree on
//! indices without ever transmitting the table.

use crate::case::kebab_to_camel;

/// How a property's value is edited.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueKind {
    /// One of a fixed set of keywords, as `(value, display name)` pairs.
    Enum {
        choices: &'static [(&'static str, &'static str)],
    },
    /// A number with one of the allowed units (`""` means unitless).
    Number {
        min: Option<f64>,
        units: &'static [&'static str],
    },
    /// A `width / height` ratio.
    Ratio,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleProperty {
    /// kebab-case CSS name.
    pub name: &'static str,
    pub display_name: &'static str,
    pub default_value: &'static str,
    pub kind: ValueKind,
}

const LENGTH_UNITS: &[&str] = &["px", "%", "pc", "ch", "em", "ex", "ic", "lh"];
const FIXED_LENGTH_UNITS: &[&str] = &["px", "pc", "ch", "em", "ex", "ic", "lh"];
const BASIS_UNITS: &[&str] = &["", "px", "%", "pc", "ch", "em", "ex", "ic", "lh"];
const UNITLESS: &[&str] = &[""];

const FLEX_ALIGNMENT: &[(&str, &str)] = &[
    ("stretch", "Stretch"),
    ("flex-start", "Start"),
    ("center", "Center"),
    ("flex-end", "End"),
    ("baseline", "Baseline"),
];

const fn length(
    name: &'static str,
    display_name: &'static str,
    default_value: &'static str,
    min: Option<f64>,
    units: &'static [&'static str],
) -> StyleProperty {
    StyleProperty {
        name,
        display_name,
        default_value,
        kind: ValueKind::Number { min, units },
    }
}

const fn keyword(
    name: &'static str,
    display_name: &'static str,
    default_value: &'static str,
    choices: &'static [(&'static str, &'static str)],
) -> StyleProperty {
    StyleProperty {
        name,
        display_name,
        default_value,
        kind: ValueKind::Enum { choices },
    }
}

pub static EDITOR_STYLE_PROPERTIES: &[StyleProperty] = &[
    keyword(
        "flex-direction",
        "Flex Direction",
        "row",
        &[
            ("row", "Row"),
            ("column", "Column"),
            ("row-reverse", "Row (Reverse)"),
            ("column-reverse", "Column (Reverse)"),
        ],
    ),
    keyword(
        "justify-content",
        "Justify Content",
        "flex-start",
        &[
            ("flex-start", "Start"),
            ("center", "Center"),
            ("flex-end", "End"),
            ("space-between", "Space Between"),
            ("space-around", "Space Around"),
            ("space-evenly", "Space Evenly"),
        ],
    ),
    keyword("align-items", "Align Items", "stretch", FLEX_ALIGNMENT),
    keyword(
        "align-content",
        "Align Content",
        "stretch",
        &[
            ("stretch", "Stretch"),
            ("flex-start", "Start"),
            ("center", "Center"),
            ("flex-end", "End"),
        ],
    ),
    keyword(
        "flex-wrap",
        "Flex Wrap",
        "nowrap",
        &[
            ("nowrap", "No wrap"),
            ("wrap", "Wrap"),
            ("wrap-reverse", "Wrap (Reverse)"),
        ],
    ),
    length("flex-grow", "Flex Grow", "0", Some(0.0), UNITLESS),
    length("flex-shrink", "Flex Shrink", "1", Some(0.0), UNITLESS),
    length("flex-basis", "Flex Basis", "auto", Some(0.0), BASIS_UNITS),
    length("width", "Width", "auto", Some(0.0), LENGTH_UNITS),
    length("height", "Height", "auto", Some(0.0), LENGTH_UNITS),
    length("min-width", "Min Width", "auto", Some(0.0), LENGTH_UNITS),
    length("min-height", "Min Height", "auto", Some(0.0), LENGTH_UNITS),
    length("max-width", "Max Width", "none", Some(0.0), LENGTH_UNITS),
    length("max-height", "Max Height", "none", Some(0.0), LENGTH_UNITS),
    keyword(
        "position",
        "Position",
        "static",
        &[
            ("static", "Static"),
            ("relative", "Relative"),
            ("absolute", "Absolute"),
        ],
    ),
    keyword("align-self", "Align Self", "auto", FLEX_ALIGNMENT),
    length("top", "Top", "auto", None, LENGTH_UNITS),
    length("right", "Right", "auto", None, LENGTH_UNITS),
    length("bottom", "Bottom", "auto", None, LENGTH_UNITS),
    length("left", "Left", "auto", None, LENGTH_UNITS),
    length("font-size", "Font Size", "16px", Some(1.0), LENGTH_UNITS),
    length("line-height", "Line Height", "1.2", Some(0.01), UNITLESS),
    keyword(
        "text-align",
        "Text Align",
        "left",
        &[("left", "Left"), ("center", "Center"), ("right", "Right")],
    ),
    StyleProperty {
        name: "aspect-ratio",
        display_name: "Aspect Ratio",
        default_value: "auto",
        kind: ValueKind::Ratio,
    },
    length("border-top-width", "Top", "0px", Some(0.0), FIXED_LENGTH_UNITS),
    length("border-right-width", "Right", "0px", Some(0.0), FIXED_LENGTH_UNITS),
    length("border-bottom-width", "Bottom", "0px", Some(0.0), FIXED_LENGTH_UNITS),
    length("border-left-width", "Left", "0px", Some(0.0), FIXED_LENGTH_UNITS),
    length("margin-top", "Top", "auto", Some(0.0), LENGTH_UNITS),
    length("margin-right", "Right", "auto", Some(0.0), LENGTH_UNITS),
    length("margin-bottom", "Bottom", "auto", Some(0.0), LENGTH_UNITS),
    length("margin-left", "Left", "auto", Some(0.0), LENGTH_UNITS),
    length("padding-top", "Top", "0", Some(0.0), FIXED_LENGTH_UNITS),
    length("padding-right", "Right", "0", Some(0.0), FIXED_LENGTH_UNITS),
    length("padding-bottom", "Bottom", "0", Some(0.0), FIXED_LENGTH_UNITS),
    length("padding-left", "Left", "0", Some(0.0), FIXED_LENGTH_UNITS),
    length("row-gap", "Row Gap", "0", Some(0.0), LENGTH_UNITS),
    length("column-gap", "Column Gap", "0", Some(0.0), LENGTH_UNITS),
];

/// Looks up a vocabulary entry by its kebab-case name.
pub fn find_property(name: &str) -> Option<&'static StyleProperty> {
    EDITOR_STYLE_PROPERTIES.iter().find(|p| p.name == name)
}

/// Every vocabulary name in camelCase, sorted by byte order.
///
/// The order is the permalink style-key index order; it depends only on the
/// static table, never on the tree being encoded.
pub fn style_dictionary_keys() -> Vec<String> {
    let mut keys: Vec<String> = EDITOR_STYLE_PROPERTIES
        .iter()
        .map(|p| kebab_to_camel(p.name))
        .collect();
    keys.sort();
    keys
}
