// file: src/curie/reference.rs
// version: 1.0.0
// guid: a1e6d173-54e9-4853-8fd9-a27bd880bbf1

//! Parsed prefix/identifier pairs

use crate::error::ObographsError;
use serde::{Deserialize, Serialize};

/// A reference to an entity as a prefix and local unique identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Reference {
    /// The canonical prefix
    pub prefix: String,
    /// The local unique identifier within the prefix's namespace
    pub identifier: String,
}

impl Reference {
    /// Create a new reference
    pub fn new(prefix: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            identifier: identifier.into(),
        }
    }

    /// Render as a compact URI (CURIE)
    pub fn curie(&self) -> String {
        format!("{}:{}", self.prefix, self.identifier)
    }
}

impl std::fmt::Display for Reference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.prefix, self.identifier)
    }
}

impl std::str::FromStr for Reference {
    type Err = ObographsError;

    /// Split a CURIE on its first colon
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((prefix, identifier)) if !prefix.is_empty() => {
                Ok(Reference::new(prefix, identifier))
            }
            _ => Err(ObographsError::Conversion(format!(
                "Not a CURIE: {}",
                s
            ))),
        }
    }
}
