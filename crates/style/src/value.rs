use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::collections::BTreeMap;
use std::fmt;

/// A single style value. The editor stores both strings (`"10px"`) and bare
/// numbers (`flexGrow: 1`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum StyleValue {
    Number(f64),
    Text(String),
}

/// camelCase property name to value. Keys are unique; order carries no meaning.
pub type StyleMap = BTreeMap<String, StyleValue>;

impl StyleValue {
    /// Converts a JSON prop value. Anything other than a string or a finite
    /// number has no style representation.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(StyleValue::Text(s.clone())),
            Value::Number(n) => n.as_f64().map(StyleValue::Number),
            _ => None,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            StyleValue::Text(s) => Value::String(s.clone()),
            StyleValue::Number(n) => number_to_json(*n),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::Text(s) => Some(s),
            StyleValue::Number(_) => None,
        }
    }
}

fn number_to_json(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        Value::Number(Number::from(n as i64))
    } else {
        Number::from_f64(n).map(Value::Number).unwrap_or(Value::Null)
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Text(s) => f.write_str(s),
            StyleValue::Number(n) if n.fract() == 0.0 && n.abs() < i64::MAX as f64 => {
                write!(f, "{}", *n as i64)
            }
            StyleValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Text(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Text(s)
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Number(n)
    }
}

/// Builds a [`StyleMap`] from a JSON object, skipping entries with no style
/// representation.
pub fn style_map_from_json(object: &serde_json::Map<String, Value>) -> StyleMap {
    object
        .iter()
        .filter_map(|(key, value)| StyleValue::from_json(value).map(|v| (key.clone(), v)))
        .collect()
}

pub fn style_map_to_json(style: &StyleMap) -> serde_json::Map<String, Value> {
    style
        .iter()
        .map(|(key, value)| (key.clone(), value.to_json()))
        .collect()
}
