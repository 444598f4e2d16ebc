// file: src/curie/record.rs
// version: 1.0.0
// guid: 8052b5e3-faa3-4ac9-9550-0102be8fafb1

//! Extended prefix map records

use crate::error::ObographsError;
use crate::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// One entry of an extended prefix map
///
/// Carries the canonical prefix and URI prefix plus the synonyms accepted on
/// input. Expansion always emits the canonical forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Canonical prefix
    pub prefix: String,
    /// Canonical URI prefix
    pub uri_prefix: String,
    /// Alternative prefixes accepted on input
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prefix_synonyms: Vec<String>,
    /// Alternative URI prefixes accepted on input
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub uri_prefix_synonyms: Vec<String>,
}

impl Record {
    /// Create a record without synonyms
    pub fn new(prefix: impl Into<String>, uri_prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            uri_prefix: uri_prefix.into(),
            prefix_synonyms: Vec::new(),
            uri_prefix_synonyms: Vec::new(),
        }
    }

    /// Validate the record's own fields
    pub fn validate(&self) -> Result<()> {
        let token = Regex::new(r"^[A-Za-z_][A-Za-z0-9._-]*$")
            .map_err(|e| ObographsError::PrefixMap(format!("Invalid prefix pattern: {}", e)))?;

        if !token.is_match(&self.prefix) {
            return Err(ObographsError::PrefixMap(format!(
                "Invalid prefix: {:?}",
                self.prefix
            )));
        }
        if self.uri_prefix.is_empty() {
            return Err(ObographsError::PrefixMap(format!(
                "Empty URI prefix for {}",
                self.prefix
            )));
        }
        for synonym in &self.prefix_synonyms {
            if !token.is_match(synonym) {
                return Err(ObographsError::PrefixMap(format!(
                    "Invalid prefix synonym for {}: {:?}",
                    self.prefix, synonym
                )));
            }
            if synonym == &self.prefix {
                return Err(ObographsError::PrefixMap(format!(
                    "Prefix synonym repeats the canonical prefix: {}",
                    self.prefix
                )));
            }
        }
        for synonym in &self.uri_prefix_synonyms {
            if synonym.is_empty() {
                return Err(ObographsError::PrefixMap(format!(
                    "Empty URI prefix synonym for {}",
                    self.prefix
                )));
            }
            if synonym == &self.uri_prefix {
                return Err(ObographsError::PrefixMap(format!(
                    "URI prefix synonym repeats the canonical URI prefix for {}",
                    self.prefix
                )));
            }
        }
        Ok(())
    }

    /// Iterate the canonical prefix and all prefix synonyms
    pub fn all_prefixes(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.prefix.as_str())
            .chain(self.prefix_synonyms.iter().map(String::as_str))
    }

    /// Iterate the canonical URI prefix and all URI prefix synonyms
    pub fn all_uri_prefixes(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.uri_prefix.as_str())
            .chain(self.uri_prefix_synonyms.iter().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_record() {
        // Arrange
        let record = Record {
            prefix: "reaxys".to_string(),
            uri_prefix: "https://bioregistry.io/reaxys:".to_string(),
            prefix_synonyms: vec!["Beilstein".to_string(), "Reaxys".to_string()],
            uri_prefix_synonyms: vec![],
        };

        // Act & Assert
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_prefix_with_dot_and_underscore() {
        // Arrange
        let record = Record::new("nlx.sub", "http://uri.neuinfo.org/nif/nifstd/nlx_subcell_");

        // Act & Assert
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_invalid_prefix_rejected() {
        // Arrange
        let whitespace = Record::new("has space", "http://example.org/");
        let empty = Record::new("", "http://example.org/");
        let leading_digit = Record::new("9prefix", "http://example.org/");

        // Act & Assert
        assert!(whitespace.validate().is_err());
        assert!(empty.validate().is_err());
        assert!(leading_digit.validate().is_err());
    }

    #[test]
    fn test_empty_uri_prefix_rejected() {
        // Arrange
        let record = Record::new("GO", "");

        // Act & Assert
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_synonym_repeating_canonical_rejected() {
        // Arrange
        let mut record = Record::new("GO", "http://purl.obolibrary.org/obo/GO_");
        record.prefix_synonyms.push("GO".to_string());

        // Act & Assert
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_all_prefixes_iteration() {
        // Arrange
        let mut record = Record::new("PMID", "https://pubmed.ncbi.nlm.nih.gov/");
        record.prefix_synonyms.push("pubmed".to_string());
        record
            .uri_prefix_synonyms
            .push("http://www.ncbi.nlm.nih.gov/pubmed/".to_string());

        // Act
        let prefixes: Vec<&str> = record.all_prefixes().collect();
        let uri_prefixes: Vec<&str> = record.all_uri_prefixes().collect();

        // Assert
        assert_eq!(prefixes, vec!["PMID", "pubmed"]);
        assert_eq!(uri_prefixes.len(), 2);
    }
}
