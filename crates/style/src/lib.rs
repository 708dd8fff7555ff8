pub mod case;
pub mod inline;
pub mod parsers;
pub mod properties;
pub mod shorthand;
pub mod value;
pub mod vocabulary;

pub use case::{camel_to_kebab, kebab_to_camel};
pub use inline::{from_inline_css, to_inline_css};
pub use parsers::StyleParseError;
pub use properties::is_known_property;
pub use value::{StyleMap, StyleValue, style_map_from_json, style_map_to_json};
pub use vocabulary::{EDITOR_STYLE_PROPERTIES, StyleProperty, ValueKind, style_dictionary_keys};
