// file: src/standardized/graph.rs
// version: 1.0.0
// guid: 045ab3fc-8824-47f9-a8fb-0a2da9bdea1f

//! Identifier-resolved nodes, edges, graphs, and axioms

use super::meta::StandardizedMeta;
use super::{builtin_shorthand, expand_required, resolve_or_skip};
use crate::curie::{Converter, Reference};
use crate::model::axiom::{
    DomainRangeAxiom, EquivalentNodesSet, ExistentialRestrictionExpression,
    LogicalDefinitionAxiom, PropertyChainAxiom,
};
use crate::model::graph::{Edge, Graph, GraphDocument, Node, NodeType};
use crate::Result;
use serde::{Deserialize, Serialize};

/// A standardized node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardizedNode {
    /// The resolved node id
    pub reference: Reference,
    /// The human-readable name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Standardized metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<StandardizedMeta>,
    /// Node kind
    #[serde(rename = "type")]
    pub node_type: NodeType,
}

impl StandardizedNode {
    /// Standardize a raw node; `Ok(None)` when its id is dropped
    pub fn from_raw(node: &Node, converter: &Converter, strict: bool) -> Result<Option<Self>> {
        let Some(reference) = resolve_or_skip(&node.id, converter, strict, "node id")? else {
            return Ok(None);
        };
        let meta = node
            .meta
            .as_ref()
            .map(|meta| StandardizedMeta::from_raw(meta, converter, strict))
            .transpose()?;
        Ok(Some(Self {
            reference,
            label: node.lbl.clone(),
            meta,
            node_type: node.node_type,
        }))
    }

    /// Reconstitute the raw node; the id renders as a canonical URI
    pub fn to_raw(&self, converter: &Converter) -> Result<Node> {
        Ok(Node {
            id: expand_required(&self.reference, converter)?,
            lbl: self.label.clone(),
            meta: self
                .meta
                .as_ref()
                .map(|meta| meta.to_raw(converter))
                .transpose()?,
            node_type: self.node_type,
        })
    }
}

/// A standardized edge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardizedEdge {
    /// The resolved subject
    pub subject: Reference,
    /// The resolved predicate
    pub predicate: Reference,
    /// The resolved object
    pub object: Reference,
    /// Standardized metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<StandardizedMeta>,
}

impl StandardizedEdge {
    /// Standardize a raw edge; `Ok(None)` when any endpoint is dropped
    pub fn from_raw(edge: &Edge, converter: &Converter, strict: bool) -> Result<Option<Self>> {
        let Some(subject) = resolve_or_skip(&edge.sub, converter, strict, "edge subject")? else {
            return Ok(None);
        };
        let Some(predicate) = resolve_or_skip(&edge.pred, converter, strict, "edge predicate")?
        else {
            return Ok(None);
        };
        let Some(object) = resolve_or_skip(&edge.obj, converter, strict, "edge object")? else {
            return Ok(None);
        };
        let meta = edge
            .meta
            .as_ref()
            .map(|meta| StandardizedMeta::from_raw(meta, converter, strict))
            .transpose()?;
        Ok(Some(Self {
            subject,
            predicate,
            object,
            meta,
        }))
    }

    /// Reconstitute the raw edge
    ///
    /// Builtin predicates render as their OWL-API shorthand, everything else
    /// as canonical URIs.
    pub fn to_raw(&self, converter: &Converter) -> Result<Edge> {
        let pred = match builtin_shorthand(&self.predicate) {
            Some(shorthand) => shorthand.to_string(),
            None => expand_required(&self.predicate, converter)?,
        };
        Ok(Edge {
            sub: expand_required(&self.subject, converter)?,
            pred,
            obj: expand_required(&self.object, converter)?,
            meta: self
                .meta
                .as_ref()
                .map(|meta| meta.to_raw(converter))
                .transpose()?,
        })
    }
}

/// A standardized set of mutually equivalent nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardizedEquivalentNodesSet {
    /// Standardized metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<StandardizedMeta>,
    /// The resolved representative node
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub representative: Option<Reference>,
    /// The resolved equivalent nodes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<Reference>,
}

impl StandardizedEquivalentNodesSet {
    /// Standardize a raw axiom; dropping any member drops the whole axiom
    pub fn from_raw(
        axiom: &EquivalentNodesSet,
        converter: &Converter,
        strict: bool,
    ) -> Result<Option<Self>> {
        let representative = match &axiom.representative_node_id {
            Some(id) => {
                let Some(reference) =
                    resolve_or_skip(id, converter, strict, "equivalence representative")?
                else {
                    return Ok(None);
                };
                Some(reference)
            }
            None => None,
        };
        let mut nodes = Vec::with_capacity(axiom.node_ids.len());
        for node_id in &axiom.node_ids {
            let Some(reference) =
                resolve_or_skip(node_id, converter, strict, "equivalence member")?
            else {
                return Ok(None);
            };
            nodes.push(reference);
        }
        let meta = axiom
            .meta
            .as_ref()
            .map(|meta| StandardizedMeta::from_raw(meta, converter, strict))
            .transpose()?;
        Ok(Some(Self {
            meta,
            representative,
            nodes,
        }))
    }

    /// Reconstitute the raw axiom
    pub fn to_raw(&self, converter: &Converter) -> Result<EquivalentNodesSet> {
        Ok(EquivalentNodesSet {
            meta: self
                .meta
                .as_ref()
                .map(|meta| meta.to_raw(converter))
                .transpose()?,
            representative_node_id: self
                .representative
                .as_ref()
                .map(|reference| expand_required(reference, converter))
                .transpose()?,
            node_ids: self
                .nodes
                .iter()
                .map(|reference| expand_required(reference, converter))
                .collect::<Result<Vec<_>>>()?,
        })
    }
}

/// A standardized existential restriction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardizedExistentialRestriction {
    /// The resolved property
    pub property: Reference,
    /// The resolved filler class
    pub filler: Reference,
}

impl StandardizedExistentialRestriction {
    fn from_raw(
        restriction: &ExistentialRestrictionExpression,
        converter: &Converter,
        strict: bool,
    ) -> Result<Option<Self>> {
        let Some(property) =
            resolve_or_skip(&restriction.property_id, converter, strict, "restriction property")?
        else {
            return Ok(None);
        };
        let Some(filler) =
            resolve_or_skip(&restriction.filler_id, converter, strict, "restriction filler")?
        else {
            return Ok(None);
        };
        Ok(Some(Self { property, filler }))
    }

    fn to_raw(&self, converter: &Converter) -> Result<ExistentialRestrictionExpression> {
        Ok(ExistentialRestrictionExpression {
            property_id: expand_required(&self.property, converter)?,
            filler_id: expand_required(&self.filler, converter)?,
        })
    }
}

/// A standardized genus-differentia definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardizedLogicalDefinitionAxiom {
    /// Standardized metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<StandardizedMeta>,
    /// The resolved class being defined
    pub defined_class: Reference,
    /// The resolved genus classes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub genera: Vec<Reference>,
    /// The resolved differentia restrictions
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub restrictions: Vec<StandardizedExistentialRestriction>,
}

impl StandardizedLogicalDefinitionAxiom {
    /// Standardize a raw axiom; dropping any component drops the whole axiom
    pub fn from_raw(
        axiom: &LogicalDefinitionAxiom,
        converter: &Converter,
        strict: bool,
    ) -> Result<Option<Self>> {
        let Some(defined_class) =
            resolve_or_skip(&axiom.defined_class_id, converter, strict, "defined class")?
        else {
            return Ok(None);
        };
        let mut genera = Vec::with_capacity(axiom.genus_ids.len());
        for genus_id in &axiom.genus_ids {
            let Some(reference) = resolve_or_skip(genus_id, converter, strict, "genus")? else {
                return Ok(None);
            };
            genera.push(reference);
        }
        let mut restrictions = Vec::with_capacity(axiom.restrictions.len());
        for restriction in &axiom.restrictions {
            let Some(standardized) =
                StandardizedExistentialRestriction::from_raw(restriction, converter, strict)?
            else {
                return Ok(None);
            };
            restrictions.push(standardized);
        }
        let meta = axiom
            .meta
            .as_ref()
            .map(|meta| StandardizedMeta::from_raw(meta, converter, strict))
            .transpose()?;
        Ok(Some(Self {
            meta,
            defined_class,
            genera,
            restrictions,
        }))
    }

    /// Reconstitute the raw axiom
    pub fn to_raw(&self, converter: &Converter) -> Result<LogicalDefinitionAxiom> {
        Ok(LogicalDefinitionAxiom {
            meta: self
                .meta
                .as_ref()
                .map(|meta| meta.to_raw(converter))
                .transpose()?,
            defined_class_id: expand_required(&self.defined_class, converter)?,
            genus_ids: self
                .genera
                .iter()
                .map(|reference| expand_required(reference, converter))
                .collect::<Result<Vec<_>>>()?,
            restrictions: self
                .restrictions
                .iter()
                .map(|restriction| restriction.to_raw(converter))
                .collect::<Result<Vec<_>>>()?,
        })
    }
}

/// Standardized domain and range declarations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardizedDomainRangeAxiom {
    /// Standardized metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<StandardizedMeta>,
    /// The resolved property
    pub predicate: Reference,
    /// The resolved domain classes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub domains: Vec<Reference>,
    /// The resolved range classes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ranges: Vec<Reference>,
    /// Standardized allValuesFrom edges
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub all_values_from_edges: Vec<StandardizedEdge>,
}

impl StandardizedDomainRangeAxiom {
    /// Standardize a raw axiom; dropping any component drops the whole axiom
    pub fn from_raw(
        axiom: &DomainRangeAxiom,
        converter: &Converter,
        strict: bool,
    ) -> Result<Option<Self>> {
        let Some(predicate) =
            resolve_or_skip(&axiom.predicate_id, converter, strict, "domain-range predicate")?
        else {
            return Ok(None);
        };
        let mut domains = Vec::with_capacity(axiom.domain_class_ids.len());
        for class_id in &axiom.domain_class_ids {
            let Some(reference) = resolve_or_skip(class_id, converter, strict, "domain class")?
            else {
                return Ok(None);
            };
            domains.push(reference);
        }
        let mut ranges = Vec::with_capacity(axiom.range_class_ids.len());
        for class_id in &axiom.range_class_ids {
            let Some(reference) = resolve_or_skip(class_id, converter, strict, "range class")?
            else {
                return Ok(None);
            };
            ranges.push(reference);
        }
        let mut all_values_from_edges = Vec::with_capacity(axiom.all_values_from_edges.len());
        for edge in &axiom.all_values_from_edges {
            let Some(standardized) = StandardizedEdge::from_raw(edge, converter, strict)? else {
                return Ok(None);
            };
            all_values_from_edges.push(standardized);
        }
        let meta = axiom
            .meta
            .as_ref()
            .map(|meta| StandardizedMeta::from_raw(meta, converter, strict))
            .transpose()?;
        Ok(Some(Self {
            meta,
            predicate,
            domains,
            ranges,
            all_values_from_edges,
        }))
    }

    /// Reconstitute the raw axiom
    pub fn to_raw(&self, converter: &Converter) -> Result<DomainRangeAxiom> {
        Ok(DomainRangeAxiom {
            meta: self
                .meta
                .as_ref()
                .map(|meta| meta.to_raw(converter))
                .transpose()?,
            predicate_id: expand_required(&self.predicate, converter)?,
            domain_class_ids: self
                .domains
                .iter()
                .map(|reference| expand_required(reference, converter))
                .collect::<Result<Vec<_>>>()?,
            range_class_ids: self
                .ranges
                .iter()
                .map(|reference| expand_required(reference, converter))
                .collect::<Result<Vec<_>>>()?,
            all_values_from_edges: self
                .all_values_from_edges
                .iter()
                .map(|edge| edge.to_raw(converter))
                .collect::<Result<Vec<_>>>()?,
        })
    }
}

/// A standardized property chain declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardizedPropertyChainAxiom {
    /// Standardized metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<StandardizedMeta>,
    /// The resolved implied property
    pub predicate: Reference,
    /// The resolved chained properties, in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub chain: Vec<Reference>,
}

impl StandardizedPropertyChainAxiom {
    /// Standardize a raw axiom; dropping any component drops the whole axiom
    pub fn from_raw(
        axiom: &PropertyChainAxiom,
        converter: &Converter,
        strict: bool,
    ) -> Result<Option<Self>> {
        let Some(predicate) =
            resolve_or_skip(&axiom.predicate_id, converter, strict, "chain predicate")?
        else {
            return Ok(None);
        };
        let mut chain = Vec::with_capacity(axiom.chain_predicate_ids.len());
        for chain_id in &axiom.chain_predicate_ids {
            let Some(reference) = resolve_or_skip(chain_id, converter, strict, "chain member")?
            else {
                return Ok(None);
            };
            chain.push(reference);
        }
        let meta = axiom
            .meta
            .as_ref()
            .map(|meta| StandardizedMeta::from_raw(meta, converter, strict))
            .transpose()?;
        Ok(Some(Self {
            meta,
            predicate,
            chain,
        }))
    }

    /// Reconstitute the raw axiom
    pub fn to_raw(&self, converter: &Converter) -> Result<PropertyChainAxiom> {
        Ok(PropertyChainAxiom {
            meta: self
                .meta
                .as_ref()
                .map(|meta| meta.to_raw(converter))
                .transpose()?,
            predicate_id: expand_required(&self.predicate, converter)?,
            chain_predicate_ids: self
                .chain
                .iter()
                .map(|reference| expand_required(reference, converter))
                .collect::<Result<Vec<_>>>()?,
        })
    }
}

/// A standardized graph
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardizedGraph {
    /// Ontology IRI, kept verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Standardized ontology-level metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<StandardizedMeta>,
    /// Standardized nodes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<StandardizedNode>,
    /// Standardized edges
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub edges: Vec<StandardizedEdge>,
    /// Standardized equivalence sets
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub equivalent_nodes_sets: Vec<StandardizedEquivalentNodesSet>,
    /// Standardized logical definitions
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub logical_definition_axioms: Vec<StandardizedLogicalDefinitionAxiom>,
    /// Standardized domain/range declarations
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub domain_range_axioms: Vec<StandardizedDomainRangeAxiom>,
    /// Standardized property chains
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub property_chain_axioms: Vec<StandardizedPropertyChainAxiom>,
}

impl StandardizedGraph {
    /// Standardize a raw graph
    pub fn from_raw(graph: &Graph, converter: &Converter, strict: bool) -> Result<Self> {
        let meta = graph
            .meta
            .as_ref()
            .map(|meta| StandardizedMeta::from_raw(meta, converter, strict))
            .transpose()?;

        let mut nodes = Vec::with_capacity(graph.nodes.len());
        for node in &graph.nodes {
            if let Some(standardized) = StandardizedNode::from_raw(node, converter, strict)? {
                nodes.push(standardized);
            }
        }

        let mut edges = Vec::with_capacity(graph.edges.len());
        for edge in &graph.edges {
            if let Some(standardized) = StandardizedEdge::from_raw(edge, converter, strict)? {
                edges.push(standardized);
            }
        }

        let mut equivalent_nodes_sets = Vec::with_capacity(graph.equivalent_nodes_sets.len());
        for axiom in &graph.equivalent_nodes_sets {
            if let Some(standardized) =
                StandardizedEquivalentNodesSet::from_raw(axiom, converter, strict)?
            {
                equivalent_nodes_sets.push(standardized);
            }
        }

        let mut logical_definition_axioms =
            Vec::with_capacity(graph.logical_definition_axioms.len());
        for axiom in &graph.logical_definition_axioms {
            if let Some(standardized) =
                StandardizedLogicalDefinitionAxiom::from_raw(axiom, converter, strict)?
            {
                logical_definition_axioms.push(standardized);
            }
        }

        let mut domain_range_axioms = Vec::with_capacity(graph.domain_range_axioms.len());
        for axiom in &graph.domain_range_axioms {
            if let Some(standardized) =
                StandardizedDomainRangeAxiom::from_raw(axiom, converter, strict)?
            {
                domain_range_axioms.push(standardized);
            }
        }

        let mut property_chain_axioms = Vec::with_capacity(graph.property_chain_axioms.len());
        for axiom in &graph.property_chain_axioms {
            if let Some(standardized) =
                StandardizedPropertyChainAxiom::from_raw(axiom, converter, strict)?
            {
                property_chain_axioms.push(standardized);
            }
        }

        Ok(Self {
            id: graph.id.clone(),
            meta,
            nodes,
            edges,
            equivalent_nodes_sets,
            logical_definition_axioms,
            domain_range_axioms,
            property_chain_axioms,
        })
    }

    /// Reconstitute the raw graph
    pub fn to_raw(&self, converter: &Converter) -> Result<Graph> {
        Ok(Graph {
            id: self.id.clone(),
            meta: self
                .meta
                .as_ref()
                .map(|meta| meta.to_raw(converter))
                .transpose()?,
            nodes: self
                .nodes
                .iter()
                .map(|node| node.to_raw(converter))
                .collect::<Result<Vec<_>>>()?,
            edges: self
                .edges
                .iter()
                .map(|edge| edge.to_raw(converter))
                .collect::<Result<Vec<_>>>()?,
            equivalent_nodes_sets: self
                .equivalent_nodes_sets
                .iter()
                .map(|axiom| axiom.to_raw(converter))
                .collect::<Result<Vec<_>>>()?,
            logical_definition_axioms: self
                .logical_definition_axioms
                .iter()
                .map(|axiom| axiom.to_raw(converter))
                .collect::<Result<Vec<_>>>()?,
            domain_range_axioms: self
                .domain_range_axioms
                .iter()
                .map(|axiom| axiom.to_raw(converter))
                .collect::<Result<Vec<_>>>()?,
            property_chain_axioms: self
                .property_chain_axioms
                .iter()
                .map(|axiom| axiom.to_raw(converter))
                .collect::<Result<Vec<_>>>()?,
        })
    }
}

/// A standardized graph document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardizedGraphDocument {
    /// The standardized graphs
    pub graphs: Vec<StandardizedGraph>,
}

impl StandardizedGraphDocument {
    /// Standardize every graph of a raw document
    pub fn from_raw(
        document: &GraphDocument,
        converter: &Converter,
        strict: bool,
    ) -> Result<Self> {
        Ok(Self {
            graphs: document
                .graphs
                .iter()
                .map(|graph| StandardizedGraph::from_raw(graph, converter, strict))
                .collect::<Result<Vec<_>>>()?,
        })
    }

    /// Reconstitute the raw document
    pub fn to_raw(&self, converter: &Converter) -> Result<GraphDocument> {
        Ok(GraphDocument {
            graphs: self
                .graphs
                .iter()
                .map(|graph| graph.to_raw(converter))
                .collect::<Result<Vec<_>>>()?,
        })
    }
}

impl Graph {
    /// Standardize this graph with the given converter
    pub fn standardize(&self, converter: &Converter, strict: bool) -> Result<StandardizedGraph> {
        StandardizedGraph::from_raw(self, converter, strict)
    }
}

impl GraphDocument {
    /// Standardize every graph in this document
    pub fn standardize(
        &self,
        converter: &Converter,
        strict: bool,
    ) -> Result<StandardizedGraphDocument> {
        StandardizedGraphDocument::from_raw(self, converter, strict)
    }
}
