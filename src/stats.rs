// file: src/stats.rs
// version: 1.0.0
// guid: 7c8dec89-56ef-4a7c-88a6-9c524f52a0e1

//! Per-graph summary statistics

use crate::model::graph::{Graph, GraphDocument, NodeType};
use serde::Serialize;
use std::collections::HashSet;

/// Summary statistics for one graph
#[derive(Debug, Clone, Default, Serialize)]
pub struct GraphStats {
    /// Ontology IRI, when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Total node count
    pub nodes: usize,
    /// Class node count
    pub classes: usize,
    /// Property node count
    pub properties: usize,
    /// Individual node count
    pub individuals: usize,
    /// Total edge count
    pub edges: usize,
    /// Distinct edge predicate count
    pub distinct_predicates: usize,
    /// Nodes carrying a textual definition
    pub definitions: usize,
    /// Total synonym count
    pub synonyms: usize,
    /// Total xref count
    pub xrefs: usize,
    /// Deprecated node count
    pub deprecated: usize,
}

impl GraphStats {
    /// Collect statistics for one graph
    pub fn from_graph(graph: &Graph) -> Self {
        let mut stats = Self {
            id: graph.id.clone(),
            nodes: graph.nodes.len(),
            edges: graph.edges.len(),
            ..Default::default()
        };

        for node in &graph.nodes {
            match node.node_type {
                NodeType::Class => stats.classes += 1,
                NodeType::Property => stats.properties += 1,
                NodeType::Individual => stats.individuals += 1,
            }
            if let Some(meta) = &node.meta {
                if meta.definition.is_some() {
                    stats.definitions += 1;
                }
                stats.synonyms += meta.synonyms.as_ref().map_or(0, Vec::len);
                stats.xrefs += meta.xrefs.as_ref().map_or(0, Vec::len);
                if meta.deprecated {
                    stats.deprecated += 1;
                }
            }
        }

        stats.distinct_predicates = graph
            .edges
            .iter()
            .map(|edge| edge.pred.as_str())
            .collect::<HashSet<_>>()
            .len();

        stats
    }
}

/// Collect statistics for every graph in a document
pub fn document_stats(document: &GraphDocument) -> Vec<GraphStats> {
    document.graphs.iter().map(GraphStats::from_graph).collect()
}
