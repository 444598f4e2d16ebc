// file: src/model/meta.rs
// version: 1.0.0
// guid: f4f5658b-2925-4568-ac0c-0ce298a50eb6

//! Metadata structures attached to nodes, edges, and graphs

use serde::{Deserialize, Serialize};

/// Synonym predicate assumed when an export omits one
pub const DEFAULT_SYNONYM_PRED: &str = "hasExactSynonym";

/// Map an OBO flat-file synonym scope (EXACT, BROAD, NARROW, RELATED) to its
/// oboInOwl predicate
pub fn synonym_scope_to_predicate(scope: &str) -> Option<&'static str> {
    match scope {
        "EXACT" => Some("hasExactSynonym"),
        "BROAD" => Some("hasBroadSynonym"),
        "NARROW" => Some("hasNarrowSynonym"),
        "RELATED" => Some("hasRelatedSynonym"),
        _ => None,
    }
}

/// Map an oboInOwl synonym predicate back to its OBO flat-file scope
pub fn predicate_to_synonym_scope(predicate: &str) -> Option<&'static str> {
    match predicate {
        "hasExactSynonym" => Some("EXACT"),
        "hasBroadSynonym" => Some("BROAD"),
        "hasNarrowSynonym" => Some("NARROW"),
        "hasRelatedSynonym" => Some("RELATED"),
        _ => None,
    }
}

/// A predicate-value pair inside a metadata element
///
/// Serialized under `basicPropertyValues`. Values may be IRIs, CURIEs, or
/// plain literals such as namespace names and dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicPropertyValue {
    /// Predicate IRI or CURIE
    pub pred: String,
    /// Value string
    pub val: String,
}

impl BasicPropertyValue {
    /// Create a new predicate-value pair
    pub fn new(pred: impl Into<String>, val: impl Into<String>) -> Self {
        Self {
            pred: pred.into(),
            val: val.into(),
        }
    }
}

/// Textual definition of a node with provenance cross-references
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    /// The definition text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub val: Option<String>,
    /// CURIEs/IRIs pointing at the definition's sources
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xrefs: Option<Vec<String>>,
}

/// A database cross-reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Xref {
    /// The cross-referenced CURIE or IRI
    pub val: String,
}

impl Xref {
    /// Create a new cross-reference
    pub fn new(val: impl Into<String>) -> Self {
        Self { val: val.into() }
    }
}

/// A synonym inside a node's metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Synonym {
    /// The synonym text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub val: Option<String>,
    /// oboInOwl synonym predicate, e.g. `hasExactSynonym`
    #[serde(
        default = "default_synonym_pred",
        skip_serializing_if = "is_default_synonym_pred"
    )]
    pub pred: String,
    /// Reference to a synonym type definition, e.g. `OMO:0003000`
    #[serde(rename = "synonymType", default, skip_serializing_if = "Option::is_none")]
    pub synonym_type: Option<String>,
    /// CURIEs/IRIs for the synonym's provenance
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub xrefs: Vec<String>,
}

impl Default for Synonym {
    fn default() -> Self {
        Self {
            val: None,
            pred: default_synonym_pred(),
            synonym_type: None,
            xrefs: Vec::new(),
        }
    }
}

fn default_synonym_pred() -> String {
    DEFAULT_SYNONYM_PRED.to_string()
}

fn is_default_synonym_pred(pred: &str) -> bool {
    pred == DEFAULT_SYNONYM_PRED
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Metadata about a node, edge, or ontology
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// Textual definition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<Definition>,
    /// Subset IRIs the entity belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subsets: Option<Vec<String>>,
    /// Database cross-references
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xrefs: Option<Vec<Xref>>,
    /// Synonyms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synonyms: Option<Vec<Synonym>>,
    /// Free-text comments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<String>>,
    /// Version IRI (graph-level metadata)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Remaining property-value pairs
    #[serde(
        rename = "basicPropertyValues",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub basic_property_values: Option<Vec<BasicPropertyValue>>,
    /// Whether the entity is deprecated
    #[serde(default, skip_serializing_if = "is_false")]
    pub deprecated: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synonym_defaults_on_parse() {
        // Arrange
        let json = r#"{"val": "nucleus"}"#;

        // Act
        let synonym: Synonym = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(synonym.val.as_deref(), Some("nucleus"));
        assert_eq!(synonym.pred, DEFAULT_SYNONYM_PRED);
        assert!(synonym.synonym_type.is_none());
        assert!(synonym.xrefs.is_empty());
    }

    #[test]
    fn test_synonym_serialization_skips_defaults() {
        // Arrange
        let synonym = Synonym {
            val: Some("cell nucleus".to_string()),
            ..Default::default()
        };

        // Act
        let value = serde_json::to_value(&synonym).unwrap();

        // Assert
        assert_eq!(value, serde_json::json!({"val": "cell nucleus"}));
    }

    #[test]
    fn test_synonym_explicit_fields_roundtrip() {
        // Arrange
        let json = r#"{
            "val": "alcohol dehydrogenase",
            "pred": "hasRelatedSynonym",
            "synonymType": "OMO:0003000",
            "xrefs": ["PMID:12345"]
        }"#;

        // Act
        let synonym: Synonym = serde_json::from_str(json).unwrap();
        let value = serde_json::to_value(&synonym).unwrap();

        // Assert
        assert_eq!(synonym.pred, "hasRelatedSynonym");
        assert_eq!(synonym.synonym_type.as_deref(), Some("OMO:0003000"));
        assert_eq!(value["pred"], "hasRelatedSynonym");
        assert_eq!(value["synonymType"], "OMO:0003000");
        assert_eq!(value["xrefs"], serde_json::json!(["PMID:12345"]));
    }

    #[test]
    fn test_meta_deprecated_defaults_to_false() {
        // Arrange
        let json = r#"{"comments": ["created by curation pipeline"]}"#;

        // Act
        let meta: Meta = serde_json::from_str(json).unwrap();

        // Assert
        assert!(!meta.deprecated);
        assert_eq!(meta.comments.unwrap(), vec!["created by curation pipeline"]);
    }

    #[test]
    fn test_meta_serialization_omits_empty_fields() {
        // Arrange
        let meta = Meta {
            deprecated: true,
            ..Default::default()
        };

        // Act
        let value = serde_json::to_value(&meta).unwrap();

        // Assert
        assert_eq!(value, serde_json::json!({"deprecated": true}));
    }

    #[test]
    fn test_meta_basic_property_values_parse() {
        // Arrange
        let json = r#"{
            "basicPropertyValues": [
                {
                    "pred": "http://www.geneontology.org/formats/oboInOwl#hasOBONamespace",
                    "val": "biological_process"
                }
            ]
        }"#;

        // Act
        let meta: Meta = serde_json::from_str(json).unwrap();

        // Assert
        let values = meta.basic_property_values.unwrap();
        assert_eq!(values.len(), 1);
        assert_eq!(values[0].val, "biological_process");
    }

    #[test]
    fn test_synonym_scope_mapping_both_directions() {
        // Act & Assert
        assert_eq!(synonym_scope_to_predicate("EXACT"), Some("hasExactSynonym"));
        assert_eq!(synonym_scope_to_predicate("BROAD"), Some("hasBroadSynonym"));
        assert_eq!(
            synonym_scope_to_predicate("NARROW"),
            Some("hasNarrowSynonym")
        );
        assert_eq!(
            synonym_scope_to_predicate("RELATED"),
            Some("hasRelatedSynonym")
        );
        assert_eq!(synonym_scope_to_predicate("FUZZY"), None);
        assert_eq!(predicate_to_synonym_scope("hasExactSynonym"), Some("EXACT"));
        assert_eq!(predicate_to_synonym_scope("hasTypo"), None);
    }

    #[test]
    fn test_definition_with_xrefs() {
        // Arrange
        let json = r#"{
            "val": "The membrane-bounded organelle that contains chromosomes.",
            "xrefs": ["GOC:go_curators", "Wikipedia:Cell_nucleus"]
        }"#;

        // Act
        let definition: Definition = serde_json::from_str(json).unwrap();

        // Assert
        assert!(definition.val.unwrap().starts_with("The membrane-bounded"));
        assert_eq!(definition.xrefs.unwrap().len(), 2);
    }
}
