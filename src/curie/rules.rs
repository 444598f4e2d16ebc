// file: src/curie/rules.rs
// version: 1.0.0
// guid: ae2969d8-6988-44c5-b4c6-38c8a3a18b37

//! Rewrite and blocklist rules applied around reference parsing
//!
//! Real ontology exports carry malformed or legacy identifier strings. Rules
//! let a converter repair them (exact and leading-substring rewrites,
//! identifier suffix strips) or drop them outright (blocklists) instead of
//! failing the whole document.

use crate::curie::reference::Reference;
use crate::error::ObographsError;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Cleanup rules for identifier strings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteRules {
    /// Exact-string replacements applied before parsing
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub full: HashMap<String, String>,
    /// Leading-substring replacements applied before parsing, longest
    /// pattern first
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub prefix: HashMap<String, String>,
    /// Identifier suffixes stripped after parsing, keyed by canonical prefix
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub suffix: HashMap<String, Vec<String>>,
    /// Exact strings to drop
    #[serde(default, skip_serializing_if = "HashSet::is_empty")]
    pub blocklist_full: HashSet<String>,
    /// Leading substrings that cause a string to be dropped
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blocklist_prefix: Vec<String>,
}

impl RewriteRules {
    /// Load rules from a YAML or JSON file (dispatch on extension)
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ObographsError::FileNotFound(path.display().to_string())
            } else {
                ObographsError::Io(e)
            }
        })?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(serde_json::from_str(&content)?),
            _ => Ok(serde_yaml::from_str(&content)?),
        }
    }

    /// Apply full rewrites, blocklists, and prefix rewrites to a string
    ///
    /// Returns `None` when the string is blocklisted.
    pub fn preprocess<'a>(&self, s: &'a str) -> Option<Cow<'a, str>> {
        let mut current: Cow<'a, str> = match self.full.get(s) {
            Some(replacement) => Cow::Owned(replacement.clone()),
            None => Cow::Borrowed(s),
        };
        if self.is_blocked(&current) {
            return None;
        }
        if let Some(rewritten) = self.apply_prefix_rewrite(&current) {
            current = Cow::Owned(rewritten);
        }
        Some(current)
    }

    /// Strip configured suffixes from a parsed reference's identifier
    pub fn postprocess(&self, reference: &mut Reference) {
        if let Some(suffixes) = self.suffix.get(reference.prefix.as_str()) {
            for suffix in suffixes {
                if let Some(stripped) = reference.identifier.strip_suffix(suffix.as_str()) {
                    reference.identifier = stripped.to_string();
                    return;
                }
            }
        }
    }

    /// Whether a string is dropped by the blocklists
    pub fn is_blocked(&self, s: &str) -> bool {
        self.blocklist_full.contains(s)
            || self
                .blocklist_prefix
                .iter()
                .any(|pattern| s.starts_with(pattern.as_str()))
    }

    fn apply_prefix_rewrite(&self, s: &str) -> Option<String> {
        // longest pattern wins so overlapping patterns behave predictably
        let mut patterns: Vec<(&String, &String)> = self.prefix.iter().collect();
        patterns.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(b.0)));
        for (pattern, replacement) in patterns {
            if let Some(rest) = s.strip_prefix(pattern.as_str()) {
                return Some(format!("{}{}", replacement, rest));
            }
        }
        None
    }
}
