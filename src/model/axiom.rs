// file: src/model/axiom.rs
// version: 1.0.0
// guid: 967a0f3c-6b82-4eb0-8b60-0e54e5985ab5

//! Graph-level OWL axiom structures

use super::graph::Edge;
use super::meta::Meta;
use serde::{Deserialize, Serialize};

/// A set of mutually equivalent nodes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquivalentNodesSet {
    /// Axiom metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    /// IRI of the node chosen to represent the set
    #[serde(
        rename = "representativeNodeId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub representative_node_id: Option<String>,
    /// IRIs of the equivalent nodes
    #[serde(rename = "nodeIds", default, skip_serializing_if = "Vec::is_empty")]
    pub node_ids: Vec<String>,
}

/// An existential restriction (someValuesFrom) expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExistentialRestrictionExpression {
    /// Property IRI
    #[serde(rename = "propertyId")]
    pub property_id: String,
    /// Filler class IRI
    #[serde(rename = "fillerId")]
    pub filler_id: String,
}

/// A genus-differentia definition of a class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogicalDefinitionAxiom {
    /// Axiom metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    /// IRI of the class being defined
    #[serde(rename = "definedClassId")]
    pub defined_class_id: String,
    /// Genus class IRIs
    #[serde(rename = "genusIds", default, skip_serializing_if = "Vec::is_empty")]
    pub genus_ids: Vec<String>,
    /// Differentia restrictions
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub restrictions: Vec<ExistentialRestrictionExpression>,
}

/// Domain and range declarations for a property
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainRangeAxiom {
    /// Axiom metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    /// Property IRI
    #[serde(rename = "predicateId", default, skip_serializing_if = "String::is_empty")]
    pub predicate_id: String,
    /// Domain class IRIs
    #[serde(
        rename = "domainClassIds",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub domain_class_ids: Vec<String>,
    /// Range class IRIs
    #[serde(
        rename = "rangeClassIds",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub range_class_ids: Vec<String>,
    /// allValuesFrom edges attached to the declaration
    #[serde(
        rename = "allValuesFromEdges",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub all_values_from_edges: Vec<Edge>,
}

/// A property chain declaration (p ∘ q → r)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyChainAxiom {
    /// Axiom metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    /// IRI of the implied property
    #[serde(rename = "predicateId")]
    pub predicate_id: String,
    /// IRIs of the chained properties, in order
    #[serde(
        rename = "chainPredicateIds",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub chain_predicate_ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logical_definition_axiom_parse() {
        // Arrange
        let json = r#"{
            "definedClassId": "http://purl.obolibrary.org/obo/GO_0045495",
            "genusIds": ["http://purl.obolibrary.org/obo/GO_0005575"],
            "restrictions": [
                {
                    "propertyId": "http://purl.obolibrary.org/obo/BFO_0000050",
                    "fillerId": "http://purl.obolibrary.org/obo/GO_0043226"
                }
            ]
        }"#;

        // Act
        let axiom: LogicalDefinitionAxiom = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(
            axiom.defined_class_id,
            "http://purl.obolibrary.org/obo/GO_0045495"
        );
        assert_eq!(axiom.genus_ids.len(), 1);
        assert_eq!(axiom.restrictions.len(), 1);
        assert_eq!(
            axiom.restrictions[0].property_id,
            "http://purl.obolibrary.org/obo/BFO_0000050"
        );
    }

    #[test]
    fn test_equivalent_nodes_set_parse() {
        // Arrange
        let json = r#"{
            "representativeNodeId": "http://purl.obolibrary.org/obo/CHEBI_33709",
            "nodeIds": [
                "http://purl.obolibrary.org/obo/CHEBI_33709",
                "http://purl.obolibrary.org/obo/GO_0033709"
            ]
        }"#;

        // Act
        let set: EquivalentNodesSet = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(set.node_ids.len(), 2);
        assert_eq!(
            set.representative_node_id.as_deref(),
            Some("http://purl.obolibrary.org/obo/CHEBI_33709")
        );
    }

    #[test]
    fn test_property_chain_axiom_roundtrip() {
        // Arrange
        let axiom = PropertyChainAxiom {
            meta: None,
            predicate_id: "http://purl.obolibrary.org/obo/RO_0002131".to_string(),
            chain_predicate_ids: vec![
                "http://purl.obolibrary.org/obo/BFO_0000050".to_string(),
                "http://purl.obolibrary.org/obo/RO_0002131".to_string(),
            ],
        };

        // Act
        let value = serde_json::to_value(&axiom).unwrap();
        let parsed: PropertyChainAxiom = serde_json::from_value(value.clone()).unwrap();

        // Assert
        assert_eq!(parsed, axiom);
        assert!(value.get("meta").is_none());
        assert_eq!(value["chainPredicateIds"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_domain_range_axiom_defaults() {
        // Arrange
        let json = r#"{"predicateId": "http://purl.obolibrary.org/obo/BFO_0000050"}"#;

        // Act
        let axiom: DomainRangeAxiom = serde_json::from_str(json).unwrap();

        // Assert
        assert!(axiom.domain_class_ids.is_empty());
        assert!(axiom.range_class_ids.is_empty());
        assert!(axiom.all_values_from_edges.is_empty());
    }
}
