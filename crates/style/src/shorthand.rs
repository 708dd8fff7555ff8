//! Expansion of shorthand properties into their longhands.
//!
//! A browser never reports `margin` when enumerating an inline style; it
//! reports `margin-top` through `margin-left`. Inline parsing does the same so
//! that style maps only ever hold longhand keys for these properties.

use crate::parsers::{StyleParseError, is_number, run_parser, value_tokens};

const MARGIN_SIDES: [&str; 4] = ["margin-top", "margin-right", "margin-bottom", "margin-left"];
const PADDING_SIDES: [&str; 4] = ["padding-top", "padding-right", "padding-bottom", "padding-left"];
const INSET_SIDES: [&str; 4] = ["top", "right", "bottom", "left"];
const BORDER_WIDTH_SIDES: [&str; 4] = [
    "border-top-width",
    "border-right-width",
    "border-bottom-width",
    "border-left-width",
];

/// Expands one declaration. Properties that are not shorthands handled here
/// come back unchanged as a single pair.
pub fn expand_declaration(
    property: &str,
    value: &str,
) -> Result<Vec<(String, String)>, StyleParseError> {
    match property {
        "margin" => expand_box(property, value, MARGIN_SIDES),
        "padding" => expand_box(property, value, PADDING_SIDES),
        "inset" => expand_box(property, value, INSET_SIDES),
        "border-width" => expand_box(property, value, BORDER_WIDTH_SIDES),
        "gap" => expand_gap(value),
        "flex" => expand_flex(value),
        _ => Ok(vec![(property.to_string(), value.to_string())]),
    }
}

fn invalid(property: &str, value: &str) -> StyleParseError {
    StyleParseError::InvalidValue {
        property: property.to_string(),
        value: value.to_string(),
    }
}

fn pairs<const N: usize>(names: [&str; N], values: [&str; N]) -> Vec<(String, String)> {
    names
        .iter()
        .zip(values)
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

/// CSS box rule: 1 value for all sides, 2 for vertical/horizontal,
/// 3 for top/horizontal/bottom, 4 clockwise from the top.
fn expand_box(
    property: &str,
    value: &str,
    sides: [&str; 4],
) -> Result<Vec<(String, String)>, StyleParseError> {
    let parts = run_parser(value_tokens, value)?;
    let values = match parts.as_slice() {
        [all] => [*all; 4],
        [vertical, horizontal] => [*vertical, *horizontal, *vertical, *horizontal],
        [top, horizontal, bottom] => [*top, *horizontal, *bottom, *horizontal],
        [top, right, bottom, left] => [*top, *right, *bottom, *left],
        _ => return Err(invalid(property, value)),
    };
    Ok(pairs(sides, values))
}

fn expand_gap(value: &str) -> Result<Vec<(String, String)>, StyleParseError> {
    let parts = run_parser(value_tokens, value)?;
    let values = match parts.as_slice() {
        [both] => [*both, *both],
        [row, column] => [*row, *column],
        _ => return Err(invalid("gap", value)),
    };
    Ok(pairs(["row-gap", "column-gap"], values))
}

fn expand_flex(value: &str) -> Result<Vec<(String, String)>, StyleParseError> {
    let parts = run_parser(value_tokens, value)?;
    let values = match parts.as_slice() {
        [keyword] if keyword.eq_ignore_ascii_case("none") => ["0", "0", "auto"],
        [keyword] if keyword.eq_ignore_ascii_case("auto") => ["1", "1", "auto"],
        [keyword] if keyword.eq_ignore_ascii_case("initial") => ["0", "1", "auto"],
        [grow] if is_number(grow) => [*grow, "1", "0%"],
        [basis] => ["1", "1", *basis],
        [grow, shrink] if is_number(grow) && is_number(shrink) => [*grow, *shrink, "0%"],
        [grow, basis] if is_number(grow) => [*grow, "1", *basis],
        [grow, shrink, basis] if is_number(grow) && is_number(shrink) => [*grow, *shrink, *basis],
        _ => return Err(invalid("flex", value)),
    };
    Ok(pairs(["flex-grow", "flex-shrink", "flex-basis"], values))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expanded(property: &str, value: &str) -> Vec<(String, String)> {
        expand_declaration(property, value).unwrap()
    }

    fn p(name: &str, value: &str) -> (String, String) {
        (name.to_string(), value.to_string())
    }

    #[test]
    fn test_box_rules() {
        assert_eq!(
            expanded("margin", "10px"),
            vec![
                p("margin-top", "10px"),
                p("margin-right", "10px"),
                p("margin-bottom", "10px"),
                p("margin-left", "10px"),
            ]
        );
        assert_eq!(
            expanded("padding", "1px 2px 3px"),
            vec![
                p("padding-top", "1px"),
                p("padding-right", "2px"),
                p("padding-bottom", "3px"),
                p("padding-left", "2px"),
            ]
        );
        assert_eq!(expanded("inset", "0 auto")[1], p("right", "auto"));
        assert!(expand_declaration("margin", "1px 2px 3px 4px 5px").is_err());
    }

    #[test]
    fn test_gap() {
        assert_eq!(
            expanded("gap", "4px 8px"),
            vec![p("row-gap", "4px"), p("column-gap", "8px")]
        );
        assert_eq!(expanded("gap", "4px")[1], p("column-gap", "4px"));
    }

    #[test]
    fn test_flex() {
        assert_eq!(
            expanded("flex", "1"),
            vec![p("flex-grow", "1"), p("flex-shrink", "1"), p("flex-basis", "0%")]
        );
        assert_eq!(expanded("flex", "none")[2], p("flex-basis", "auto"));
        assert_eq!(expanded("flex", "2 100px")[2], p("flex-basis", "100px"));
        assert_eq!(expanded("flex", "2 0")[1], p("flex-shrink", "0"));
        assert_eq!(expanded("flex", "30%")[0], p("flex-grow", "1"));
    }

    #[test]
    fn test_longhands_pass_through() {
        assert_eq!(expanded("display", "flex"), vec![p("display", "flex")]);
    }
}
