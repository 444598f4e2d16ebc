// file: src/model/mod.rs
// version: 1.0.0
// guid: 00187994-4f2c-4e74-8911-810ca0f5cc23

//! Raw OBO Graph data model
//!
//! Mirrors the OBO Graphs JSON schema published by the GeneOntology
//! obographs project. "Raw" means identifier-valued fields are kept as the
//! plain strings found in the document; see [`crate::standardized`] for the
//! resolved form.

pub mod axiom;
pub mod graph;
pub mod meta;
pub mod validator;

pub use axiom::{
    DomainRangeAxiom, EquivalentNodesSet, ExistentialRestrictionExpression,
    LogicalDefinitionAxiom, PropertyChainAxiom,
};
pub use graph::{Edge, Graph, GraphDocument, Node, NodeType};
pub use meta::{
    predicate_to_synonym_scope, synonym_scope_to_predicate, BasicPropertyValue, Definition, Meta,
    Synonym, Xref, DEFAULT_SYNONYM_PRED,
};
pub use validator::{report_document, validate_document, validate_graph, ValidationReport};

/// URI prefix shared by OBO Foundry ontologies
pub const OBO_URI_PREFIX: &str = "http://purl.obolibrary.org/obo/";
