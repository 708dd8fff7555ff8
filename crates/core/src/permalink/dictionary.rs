//! Index dictionaries used to shrink permalink payloads.

use flexlayout_style::style_dictionary_keys;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Node type names in first-seen order. Built while encoding and sent
/// along with the payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeDictionary {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl TypeDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a dictionary from transmitted names.
    pub fn from_names(names: Vec<String>) -> Self {
        let mut index = HashMap::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            index.entry(name.clone()).or_insert(i);
        }
        Self { names, index }
    }

    /// Returns the index of `name`, appending it on first sight.
    pub fn intern(&mut self, name: &str) -> usize {
        if let Some(&i) = self.index.get(name) {
            return i;
        }
        let i = self.names.len();
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), i);
        i
    }

    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn into_names(self) -> Vec<String> {
        self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

static STYLE_KEYS: Lazy<StyleKeyDictionary> =
    Lazy::new(|| StyleKeyDictionary::from_keys(style_dictionary_keys()));

/// The fixed style property universe. Never transmitted: encoder and
/// decoder both derive it from the editor vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleKeyDictionary {
    keys: Vec<String>,
    index: HashMap<String, usize>,
}

impl StyleKeyDictionary {
    pub fn shared() -> &'static StyleKeyDictionary {
        &STYLE_KEYS
    }

    fn from_keys(keys: Vec<String>) -> Self {
        let index = keys.iter().enumerate().map(|(i, k)| (k.clone(), i)).collect();
        Self { keys, index }
    }

    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.index.get(key).copied()
    }

    pub fn key(&self, index: usize) -> Option<&str> {
        self.keys.get(index).map(String::as_str)
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
