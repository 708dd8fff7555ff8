//! The permalink wire tuple and its CBOR form.
//!
//! ```text
//! [version, projectName, [width, height], typeDictionary, node]
//! node = [typeIndex, props, [node...]]
//! ```
//!
//! `props` is a map with text keys. Inside it, `style` is a map from
//! style-key index to value.

use crate::error::PermalinkError;
use ciborium::value::{Integer, Value as CborValue};
use flexlayout_types::CanvasSize;
use serde_json::{Map, Number, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct WireTuple {
    pub version: u64,
    pub project_name: String,
    pub canvas: CanvasSize,
    pub types: Vec<String>,
    pub root: WireNode,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WireNode {
    pub type_index: usize,
    pub props: Vec<(String, WireProp)>,
    pub children: Vec<WireNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WireProp {
    /// Style entries keyed by style-key index.
    Style(Vec<(usize, Value)>),
    Value(Value),
}

impl WireTuple {
    pub fn to_cbor(&self) -> Result<CborValue, PermalinkError> {
        Ok(CborValue::Array(vec![
            CborValue::Integer(Integer::from(self.version)),
            CborValue::Text(self.project_name.clone()),
            CborValue::Array(vec![
                CborValue::Integer(Integer::from(self.canvas.width)),
                CborValue::Integer(Integer::from(self.canvas.height)),
            ]),
            CborValue::Array(self.types.iter().cloned().map(CborValue::Text).collect()),
            self.root.to_cbor()?,
        ]))
    }

    /// Reads a tuple, checking the version before anything else.
    pub fn from_cbor(value: CborValue, supported_version: u64) -> Result<Self, PermalinkError> {
        let CborValue::Array(items) = value else {
            return Err(PermalinkError::invalid("payload is not an array"));
        };
        let mut items = items.into_iter();

        let version = items
            .next()
            .ok_or_else(|| PermalinkError::invalid("payload is empty"))?;
        match as_u64(&version) {
            Some(v) if v == supported_version => {}
            _ => {
                return Err(PermalinkError::UnsupportedVersion {
                    found: describe(&version),
                    expected: supported_version,
                });
            }
        }

        let (Some(name), Some(canvas), Some(types), Some(root), None) = (
            items.next(),
            items.next(),
            items.next(),
            items.next(),
            items.next(),
        ) else {
            return Err(PermalinkError::invalid("payload must have exactly 5 elements"));
        };

        let CborValue::Text(project_name) = name else {
            return Err(PermalinkError::invalid("project name is not text"));
        };

        Ok(Self {
            version: supported_version,
            project_name,
            canvas: canvas_from_cbor(canvas)?,
            types: types_from_cbor(types)?,
            root: WireNode::from_cbor(root)?,
        })
    }
}

impl WireNode {
    fn to_cbor(&self) -> Result<CborValue, PermalinkError> {
        let mut props = Vec::with_capacity(self.props.len());
        for (key, prop) in &self.props {
            let value = match prop {
                WireProp::Style(entries) => {
                    let mut style = Vec::with_capacity(entries.len());
                    for (index, value) in entries {
                        style.push((CborValue::Integer(Integer::from(*index as u64)), json_to_cbor(value)?));
                    }
                    CborValue::Map(style)
                }
                WireProp::Value(value) => json_to_cbor(value)?,
            };
            props.push((CborValue::Text(key.clone()), value));
        }

        let mut children = Vec::with_capacity(self.children.len());
        for child in &self.children {
            children.push(child.to_cbor()?);
        }

        Ok(CborValue::Array(vec![
            CborValue::Integer(Integer::from(self.type_index as u64)),
            CborValue::Map(props),
            CborValue::Array(children),
        ]))
    }

    fn from_cbor(value: CborValue) -> Result<Self, PermalinkError> {
        let CborValue::Array(items) = value else {
            return Err(PermalinkError::invalid("node is not an array"));
        };
        let mut items = items.into_iter();
        let (Some(type_index), Some(props), Some(children), None) =
            (items.next(), items.next(), items.next(), items.next())
        else {
            return Err(PermalinkError::invalid("node must have exactly 3 elements"));
        };

        let type_index = as_u64(&type_index)
            .and_then(|i| usize::try_from(i).ok())
            .ok_or_else(|| PermalinkError::invalid("type index is not an unsigned integer"))?;

        let CborValue::Map(entries) = props else {
            return Err(PermalinkError::invalid("node props are not a map"));
        };
        let mut wire_props = Vec::with_capacity(entries.len());
        for (key, value) in entries {
            let CborValue::Text(key) = key else {
                return Err(PermalinkError::invalid("prop key is not text"));
            };
            let prop = if key == flexlayout_types::STYLE_PROP {
                WireProp::Style(style_from_cbor(value)?)
            } else {
                WireProp::Value(cbor_to_json(value)?)
            };
            wire_props.push((key, prop));
        }

        let CborValue::Array(children) = children else {
            return Err(PermalinkError::invalid("node children are not an array"));
        };
        let children = children
            .into_iter()
            .map(WireNode::from_cbor)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            type_index,
            props: wire_props,
            children,
        })
    }
}

fn style_from_cbor(value: CborValue) -> Result<Vec<(usize, Value)>, PermalinkError> {
    let CborValue::Map(entries) = value else {
        return Err(PermalinkError::invalid("style is not a map"));
    };
    let mut style = Vec::with_capacity(entries.len());
    for (key, value) in entries {
        let index = as_u64(&key)
            .and_then(|i| usize::try_from(i).ok())
            .ok_or_else(|| PermalinkError::invalid("style key is not an index"))?;
        style.push((index, cbor_to_json(value)?));
    }
    Ok(style)
}

fn canvas_from_cbor(value: CborValue) -> Result<CanvasSize, PermalinkError> {
    let CborValue::Array(items) = value else {
        return Err(PermalinkError::invalid("canvas is not an array"));
    };
    match items.as_slice() {
        [width, height] => Ok(CanvasSize::new(pixels(width)?, pixels(height)?)),
        _ => Err(PermalinkError::invalid("canvas must have 2 elements")),
    }
}

fn pixels(value: &CborValue) -> Result<u32, PermalinkError> {
    let size = match value {
        CborValue::Integer(i) => u32::try_from(i128::from(*i)).ok(),
        CborValue::Float(f) if f.is_finite() && *f >= 0.0 && *f <= u32::MAX as f64 => {
            Some(f.round() as u32)
        }
        _ => None,
    };
    size.ok_or_else(|| PermalinkError::invalid(format!("invalid canvas size {}", describe(value))))
}

fn types_from_cbor(value: CborValue) -> Result<Vec<String>, PermalinkError> {
    let CborValue::Array(items) = value else {
        return Err(PermalinkError::invalid("type dictionary is not an array"));
    };
    items
        .into_iter()
        .map(|item| match item {
            CborValue::Text(name) => Ok(name),
            other => Err(PermalinkError::invalid(format!(
                "type name is not text: {}",
                describe(&other)
            ))),
        })
        .collect()
}

fn as_u64(value: &CborValue) -> Option<u64> {
    match value {
        CborValue::Integer(i) => u64::try_from(i128::from(*i)).ok(),
        _ => None,
    }
}

fn describe(value: &CborValue) -> String {
    match value {
        CborValue::Integer(i) => i128::from(*i).to_string(),
        CborValue::Text(s) => format!("{:?}", s),
        other => format!("{:?}", other),
    }
}

/// Levels of arrays, maps and tags in `value`, counted the way the CBOR
/// reader counts them against its recursion limit.
pub fn nesting_depth(value: &CborValue) -> usize {
    match value {
        CborValue::Array(items) => 1 + items.iter().map(nesting_depth).max().unwrap_or(0),
        CborValue::Map(entries) => {
            1 + entries
                .iter()
                .map(|(k, v)| nesting_depth(k).max(nesting_depth(v)))
                .max()
                .unwrap_or(0)
        }
        CborValue::Tag(_, inner) => 1 + nesting_depth(inner),
        _ => 0,
    }
}

pub fn json_to_cbor(value: &Value) -> Result<CborValue, PermalinkError> {
    Ok(match value {
        Value::Null => CborValue::Null,
        Value::Bool(b) => CborValue::Bool(*b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                CborValue::Integer(Integer::from(i))
            } else if let Some(u) = n.as_u64() {
                CborValue::Integer(Integer::from(u))
            } else if let Some(f) = n.as_f64() {
                CborValue::Float(f)
            } else {
                return Err(PermalinkError::Cbor(format!("unrepresentable number {}", n)));
            }
        }
        Value::String(s) => CborValue::Text(s.clone()),
        Value::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                out.push(json_to_cbor(item)?);
            }
            CborValue::Array(out)
        }
        Value::Object(map) => {
            let mut out = Vec::with_capacity(map.len());
            for (k, v) in map {
                out.push((CborValue::Text(k.clone()), json_to_cbor(v)?));
            }
            CborValue::Map(out)
        }
    })
}

pub fn cbor_to_json(value: CborValue) -> Result<Value, PermalinkError> {
    Ok(match value {
        CborValue::Null => Value::Null,
        CborValue::Bool(b) => Value::Bool(b),
        CborValue::Integer(i) => {
            let signed: i128 = i.into();
            if signed >= 0 {
                Value::Number(Number::from(
                    u64::try_from(signed).map_err(|_| PermalinkError::invalid("integer out of range"))?,
                ))
            } else {
                Value::Number(Number::from(
                    i64::try_from(signed).map_err(|_| PermalinkError::invalid("integer out of range"))?,
                ))
            }
        }
        CborValue::Float(f) => Number::from_f64(f)
            .map(Value::Number)
            .ok_or_else(|| PermalinkError::invalid("non-finite number"))?,
        CborValue::Text(s) => Value::String(s),
        CborValue::Bytes(bytes) => Value::Array(
            bytes
                .into_iter()
                .map(|b| Value::Number(Number::from(b)))
                .collect(),
        ),
        CborValue::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                out.push(cbor_to_json(item)?);
            }
            Value::Array(out)
        }
        CborValue::Map(entries) => {
            let mut out = Map::new();
            for (k, v) in entries {
                let CborValue::Text(key) = k else {
                    return Err(PermalinkError::invalid("map key is not text"));
                };
                out.insert(key, cbor_to_json(v)?);
            }
            Value::Object(out)
        }
        CborValue::Tag(_, inner) => cbor_to_json(*inner)?,
        other => {
            return Err(PermalinkError::invalid(format!(
                "unsupported CBOR value {}",
                describe(&other)
            )));
        }
    })
}
