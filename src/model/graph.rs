// file: src/model/graph.rs
// version: 1.0.0
// guid: 3d55c822-c838-4968-a758-f575cb55b088

//! Nodes, edges, graphs, and graph documents

use super::axiom::{
    DomainRangeAxiom, EquivalentNodesSet, LogicalDefinitionAxiom, PropertyChainAxiom,
};
use super::meta::Meta;
use crate::error::ObographsError;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Kind of entity a node represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeType {
    #[serde(rename = "CLASS")]
    Class,
    #[serde(rename = "PROPERTY")]
    Property,
    #[serde(rename = "INDIVIDUAL")]
    Individual,
}

impl NodeType {
    /// Get the node type as the schema's string
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Class => "CLASS",
            NodeType::Property => "PROPERTY",
            NodeType::Individual => "INDIVIDUAL",
        }
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for NodeType {
    type Err = ObographsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CLASS" => Ok(NodeType::Class),
            "PROPERTY" => Ok(NodeType::Property),
            "INDIVIDUAL" => Ok(NodeType::Individual),
            _ => Err(ObographsError::Validation(format!(
                "Unknown node type: {}",
                s
            ))),
        }
    }
}

/// A node in an OBO Graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// The IRI for the node
    pub id: String,
    /// The human-readable name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lbl: Option<String>,
    /// Node metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    /// Node kind
    #[serde(rename = "type")]
    pub node_type: NodeType,
}

/// A directed edge between two nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Subject IRI
    pub sub: String,
    /// Predicate: an IRI or an OWL-API shorthand such as `is_a`
    pub pred: String,
    /// Object IRI
    pub obj: String,
    /// Edge metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

impl Edge {
    /// Create a new edge without metadata
    pub fn new(sub: impl Into<String>, pred: impl Into<String>, obj: impl Into<String>) -> Self {
        Self {
            sub: sub.into(),
            pred: pred.into(),
            obj: obj.into(),
            meta: None,
        }
    }
}

/// A graph corresponds to one ontology
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    /// Ontology IRI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Ontology-level metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    /// Nodes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<Node>,
    /// Edges
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub edges: Vec<Edge>,
    /// Sets of mutually equivalent nodes
    #[serde(
        rename = "equivalentNodesSets",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub equivalent_nodes_sets: Vec<EquivalentNodesSet>,
    /// Genus-differentia class definitions
    #[serde(
        rename = "logicalDefinitionAxioms",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub logical_definition_axioms: Vec<LogicalDefinitionAxiom>,
    /// Property domain/range declarations
    #[serde(
        rename = "domainRangeAxioms",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub domain_range_axioms: Vec<DomainRangeAxiom>,
    /// Property chain declarations
    #[serde(
        rename = "propertyChainAxioms",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub property_chain_axioms: Vec<PropertyChainAxiom>,
}

impl Graph {
    /// Index nodes by id
    ///
    /// When a graph carries duplicate ids the last occurrence wins; use
    /// [`super::validator::validate_graph`] to reject such documents.
    pub fn id_to_node(&self) -> HashMap<&str, &Node> {
        self.nodes
            .iter()
            .map(|node| (node.id.as_str(), node))
            .collect()
    }

    /// Index edges by subject id as deduplicated (predicate, object) pairs
    pub fn id_to_edges(&self) -> HashMap<&str, Vec<(&str, &str)>> {
        let mut index: HashMap<&str, Vec<(&str, &str)>> = HashMap::new();
        let mut seen: HashSet<(&str, &str, &str)> = HashSet::new();
        for edge in &self.edges {
            if seen.insert((edge.sub.as_str(), edge.pred.as_str(), edge.obj.as_str())) {
                index
                    .entry(edge.sub.as_str())
                    .or_default()
                    .push((edge.pred.as_str(), edge.obj.as_str()));
            }
        }
        index
    }
}

/// Top-level container of one or more graphs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDocument {
    /// The graphs in the document
    pub graphs: Vec<Graph>,
}

impl GraphDocument {
    /// Extract the single graph of a document
    ///
    /// Errors when the document holds zero or multiple graphs.
    pub fn squeeze(mut self) -> crate::Result<Graph> {
        match self.graphs.len() {
            1 => Ok(self.graphs.remove(0)),
            n => Err(ObographsError::Validation(format!(
                "Expected exactly one graph in the document, found {}",
                n
            ))),
        }
    }
}
