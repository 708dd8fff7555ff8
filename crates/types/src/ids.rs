//! Newtype wrapper for node identifiers in the editor graph.
//!
//! Keeps node ids from being mixed up with the other strings that flow
//! through a conversion (type names, prop keys, text content).

use rand::Rng;
use rand::distr::Alphanumeric;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The well-known id of the root node of every editor graph.
pub const ROOT_NODE: &str = "ROOT";

const RANDOM_ID_LEN: usize = 10;

/// An identifier for a node in the editor's node graph.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Creates a new NodeId from a string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id reserved for the graph root.
    pub fn root() -> Self {
        Self(ROOT_NODE.to_string())
    }

    /// Generates a fresh random alphanumeric id.
    pub fn random() -> Self {
        let id = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(RANDOM_ID_LEN)
            .map(char::from)
            .collect::<String>();
        Self(id)
    }

    pub fn is_root(&self) -> bool {
        self.0 == ROOT_NODE
    }

    /// Returns the string representation of this node ID
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_root_id() {
        let root = NodeId::root();
        assert!(root.is_root());
        assert_eq!(root.as_str(), "ROOT");
        assert!(!NodeId::from("child").is_root());
    }

    #[test]
    fn test_random_ids_are_alphanumeric_and_distinct() {
        let ids: HashSet<NodeId> = (0..64).map(|_| NodeId::random()).collect();
        assert_eq!(ids.len(), 64);
        for id in &ids {
            assert_eq!(id.as_str().len(), RANDOM_ID_LEN);
            assert!(id.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = NodeId::new("abc");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc\"");
    }
}
