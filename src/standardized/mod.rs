// file: src/standardized/mod.rs
// version: 1.0.0
// guid: 1628c74e-dd9c-42be-9ce2-4980b9c4b7b5

//! Identifier-resolved OBO Graph model
//!
//! Mirrors the raw model with every identifier-valued string resolved to a
//! [`Reference`] through a [`Converter`]. Conversion runs in one of two
//! modes: strict fails on the first unresolvable string, lenient drops the
//! offending element with a warning. Blocklisted strings are dropped
//! silently in both modes. [`graph::StandardizedGraphDocument::to_raw`]
//! reconstitutes the raw document.

pub mod graph;
pub mod meta;

pub use graph::{
    StandardizedDomainRangeAxiom, StandardizedEdge, StandardizedEquivalentNodesSet,
    StandardizedExistentialRestriction, StandardizedGraph, StandardizedGraphDocument,
    StandardizedLogicalDefinitionAxiom, StandardizedNode, StandardizedPropertyChainAxiom,
};
pub use meta::{
    StandardizedDefinition, StandardizedMeta, StandardizedProperty, StandardizedSynonym,
    StandardizedValue, StandardizedXref,
};

use crate::curie::{Converter, Reference};
use crate::error::ObographsError;
use crate::Result;
use tracing::warn;

/// Resolve an OWL-API shorthand edge predicate to its proper reference
///
/// These four shorthands are defined by the obographs OWL-API serializer and
/// appear verbatim as edge predicates.
pub fn builtin_reference(s: &str) -> Option<Reference> {
    match s {
        "is_a" => Some(Reference::new("rdfs", "subClassOf")),
        "subPropertyOf" => Some(Reference::new("rdfs", "subPropertyOf")),
        "type" => Some(Reference::new("rdf", "type")),
        "inverseOf" => Some(Reference::new("owl", "inverseOf")),
        _ => None,
    }
}

/// Reverse of [`builtin_reference`], used when reconstituting raw edges
pub fn builtin_shorthand(reference: &Reference) -> Option<&'static str> {
    match (reference.prefix.as_str(), reference.identifier.as_str()) {
        ("rdfs", "subClassOf") => Some("is_a"),
        ("rdfs", "subPropertyOf") => Some("subPropertyOf"),
        ("rdf", "type") => Some("type"),
        ("owl", "inverseOf") => Some("inverseOf"),
        _ => None,
    }
}

/// Resolve an identifier string: builtins first, then the converter
///
/// `Ok(None)` means the string is blocklisted.
pub(crate) fn resolve_identifier(s: &str, converter: &Converter) -> Result<Option<Reference>> {
    if let Some(reference) = builtin_reference(s) {
        return Ok(Some(reference));
    }
    converter.parse(s)
}

/// Resolve an identifier honoring the conversion mode
///
/// In lenient mode an unresolvable string is logged and reported as `None`,
/// which callers treat the same as blocklisted: drop the element.
pub(crate) fn resolve_or_skip(
    s: &str,
    converter: &Converter,
    strict: bool,
    context: &str,
) -> Result<Option<Reference>> {
    match resolve_identifier(s, converter) {
        Ok(reference) => Ok(reference),
        Err(e) if strict => Err(e),
        Err(e) => {
            warn!("Skipping {}: {}", context, e);
            Ok(None)
        }
    }
}

/// Expand a reference to its URI, erroring when the prefix is unknown
pub(crate) fn expand_required(reference: &Reference, converter: &Converter) -> Result<String> {
    converter.expand(reference).ok_or_else(|| {
        ObographsError::Conversion(format!(
            "No URI prefix registered for {}",
            reference.prefix
        ))
    })
}
