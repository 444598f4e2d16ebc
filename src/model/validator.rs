// file: src/model/validator.rs
// version: 1.0.0
// guid: 44338805-0d92-4d3c-b7ee-04f55df4e900

//! Structural validation for OBO Graph documents

use super::graph::{Graph, GraphDocument};
use crate::error::ObographsError;
use crate::Result;
use serde::Serialize;
use std::collections::HashSet;

/// Structural summary of one graph
///
/// Dangling edge endpoints are counted rather than rejected: ontologies
/// legitimately reference terms that live in other ontologies.
#[derive(Debug, Clone, Serialize)]
pub struct GraphSummary {
    /// Ontology IRI
    pub id: Option<String>,
    /// Number of nodes
    pub node_count: usize,
    /// Number of edges
    pub edge_count: usize,
    /// Distinct edge endpoint ids with no node entry
    pub dangling_edge_ids: usize,
    /// Nodes marked deprecated
    pub deprecated_nodes: usize,
    /// Nodes without a label
    pub unlabeled_nodes: usize,
}

/// Structural summary of a whole document
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    /// Per-graph summaries
    pub graphs: Vec<GraphSummary>,
}

/// Validate the hard structural invariants of a document
pub fn validate_document(document: &GraphDocument) -> Result<()> {
    let mut graph_ids = HashSet::new();
    for graph in &document.graphs {
        if let Some(id) = &graph.id {
            if !graph_ids.insert(id.as_str()) {
                return Err(ObographsError::Validation(format!(
                    "Duplicate graph id: {}",
                    id
                )));
            }
        }
        validate_graph(graph)?;
    }
    Ok(())
}

/// Validate the hard structural invariants of one graph
pub fn validate_graph(graph: &Graph) -> Result<()> {
    let mut node_ids = HashSet::new();
    for node in &graph.nodes {
        if node.id.is_empty() {
            return Err(ObographsError::Validation(
                "Node with empty id".to_string(),
            ));
        }
        if !node_ids.insert(node.id.as_str()) {
            return Err(ObographsError::Validation(format!(
                "Duplicate node id: {}",
                node.id
            )));
        }
    }

    for edge in &graph.edges {
        if edge.sub.is_empty() || edge.pred.is_empty() || edge.obj.is_empty() {
            return Err(ObographsError::Validation(format!(
                "Edge with empty field: sub={:?} pred={:?} obj={:?}",
                edge.sub, edge.pred, edge.obj
            )));
        }
    }

    Ok(())
}

/// Produce structural summaries for every graph in a document
pub fn report_document(document: &GraphDocument) -> ValidationReport {
    ValidationReport {
        graphs: document.graphs.iter().map(summarize_graph).collect(),
    }
}

fn summarize_graph(graph: &Graph) -> GraphSummary {
    let node_ids: HashSet<&str> = graph.nodes.iter().map(|node| node.id.as_str()).collect();

    let mut dangling: HashSet<&str> = HashSet::new();
    for edge in &graph.edges {
        if !node_ids.contains(edge.sub.as_str()) {
            dangling.insert(edge.sub.as_str());
        }
        if !node_ids.contains(edge.obj.as_str()) {
            dangling.insert(edge.obj.as_str());
        }
    }

    let deprecated_nodes = graph
        .nodes
        .iter()
        .filter(|node| node.meta.as_ref().is_some_and(|meta| meta.deprecated))
        .count();
    let unlabeled_nodes = graph.nodes.iter().filter(|node| node.lbl.is_none()).count();

    GraphSummary {
        id: graph.id.clone(),
        node_count: graph.nodes.len(),
        edge_count: graph.edges.len(),
        dangling_edge_ids: dangling.len(),
        deprecated_nodes,
        unlabeled_nodes,
    }
}
