// file: src/standardized/meta.rs
// version: 1.0.0
// guid: 4e34d8e2-723f-44aa-85ba-79d1d5fae17f

//! Identifier-resolved metadata structures

use super::{expand_required, resolve_identifier, resolve_or_skip};
use crate::curie::{Converter, Reference};
use crate::model::meta::{BasicPropertyValue, Definition, Meta, Synonym, Xref};
use crate::Result;
use serde::{Deserialize, Serialize};

/// A property value: a resolved reference or a plain literal
///
/// `basicPropertyValues` mix identifiers with literals such as namespace
/// names, dates, and creator strings; literals pass through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StandardizedValue {
    /// A resolved identifier
    Reference(Reference),
    /// A literal string
    Literal(String),
}

/// A standardized predicate-value pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardizedProperty {
    /// The resolved predicate
    pub predicate: Reference,
    /// The value, resolved when it is an identifier
    pub value: StandardizedValue,
}

impl StandardizedProperty {
    /// Standardize a raw property-value pair
    ///
    /// `Ok(None)` when the predicate or value is blocklisted, or when the
    /// predicate is unresolvable in lenient mode.
    pub fn from_raw(
        property: &BasicPropertyValue,
        converter: &Converter,
        strict: bool,
    ) -> Result<Option<Self>> {
        let Some(predicate) =
            resolve_or_skip(&property.pred, converter, strict, "property predicate")?
        else {
            return Ok(None);
        };
        let value = match resolve_identifier(&property.val, converter) {
            Ok(Some(reference)) => StandardizedValue::Reference(reference),
            Ok(None) => return Ok(None),
            Err(_) => StandardizedValue::Literal(property.val.clone()),
        };
        Ok(Some(Self { predicate, value }))
    }

    /// Reconstitute the raw pair; identifiers become canonical URIs
    pub fn to_raw(&self, converter: &Converter) -> Result<BasicPropertyValue> {
        let pred = expand_required(&self.predicate, converter)?;
        let val = match &self.value {
            StandardizedValue::Reference(reference) => expand_required(reference, converter)?,
            StandardizedValue::Literal(literal) => literal.clone(),
        };
        Ok(BasicPropertyValue::new(pred, val))
    }
}

/// A standardized definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardizedDefinition {
    /// The definition text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Resolved provenance references
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xrefs: Option<Vec<Reference>>,
}

impl StandardizedDefinition {
    /// Standardize a raw definition
    pub fn from_raw(definition: &Definition, converter: &Converter, strict: bool) -> Result<Self> {
        let xrefs = match &definition.xrefs {
            Some(values) => parse_reference_list(values, converter, strict, "definition xref")?,
            None => None,
        };
        Ok(Self {
            value: definition.val.clone(),
            xrefs,
        })
    }

    /// Reconstitute the raw definition; provenance renders as CURIEs
    pub fn to_raw(&self) -> Definition {
        Definition {
            val: self.value.clone(),
            xrefs: self
                .xrefs
                .as_ref()
                .map(|references| references.iter().map(Reference::curie).collect()),
        }
    }
}

/// A standardized database cross-reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardizedXref {
    /// The resolved reference
    pub reference: Reference,
}

impl StandardizedXref {
    /// Standardize a raw cross-reference
    ///
    /// `Ok(None)` when the value is blocklisted or unresolvable in lenient
    /// mode.
    pub fn from_raw(xref: &Xref, converter: &Converter, strict: bool) -> Result<Option<Self>> {
        Ok(resolve_or_skip(&xref.val, converter, strict, "xref")?
            .map(|reference| Self { reference }))
    }

    /// Reconstitute the raw cross-reference as a CURIE
    pub fn to_raw(&self) -> Xref {
        Xref::new(self.reference.curie())
    }
}

/// A standardized synonym
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardizedSynonym {
    /// The synonym text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// The synonym predicate in the oboInOwl namespace
    pub predicate: Reference,
    /// Resolved synonym type, e.g. `OMO:0003000`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub synonym_type: Option<Reference>,
    /// Resolved provenance references
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xrefs: Option<Vec<Reference>>,
}

impl StandardizedSynonym {
    /// Standardize a raw synonym
    ///
    /// The raw predicate is a bare oboInOwl local identifier and is wrapped
    /// verbatim; an undroppable synonym type is dropped, not the synonym.
    pub fn from_raw(synonym: &Synonym, converter: &Converter, strict: bool) -> Result<Self> {
        let synonym_type = match &synonym.synonym_type {
            Some(value) => resolve_or_skip(value, converter, strict, "synonym type")?,
            None => None,
        };
        Ok(Self {
            text: synonym.val.clone(),
            predicate: Reference::new("oboInOwl", synonym.pred.clone()),
            synonym_type,
            xrefs: parse_reference_list(&synonym.xrefs, converter, strict, "synonym xref")?,
        })
    }

    /// Reconstitute the raw synonym
    ///
    /// The predicate renders as its bare local identifier, the type as a
    /// canonical URI, and provenance as CURIEs.
    pub fn to_raw(&self, converter: &Converter) -> Result<Synonym> {
        Ok(Synonym {
            val: self.text.clone(),
            pred: self.predicate.identifier.clone(),
            synonym_type: self
                .synonym_type
                .as_ref()
                .map(|reference| expand_required(reference, converter))
                .transpose()?,
            xrefs: self
                .xrefs
                .as_ref()
                .map(|references| references.iter().map(Reference::curie).collect())
                .unwrap_or_default(),
        })
    }
}

/// Standardized metadata about a node, edge, or ontology
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardizedMeta {
    /// Standardized definition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<StandardizedDefinition>,
    /// Resolved subset references
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subsets: Option<Vec<Reference>>,
    /// Standardized cross-references
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xrefs: Option<Vec<StandardizedXref>>,
    /// Standardized synonyms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synonyms: Option<Vec<StandardizedSynonym>>,
    /// Free-text comments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<String>>,
    /// Version IRI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Standardized property-value pairs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<StandardizedProperty>>,
    /// Whether the entity is deprecated
    #[serde(default, skip_serializing_if = "is_false")]
    pub deprecated: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl StandardizedMeta {
    /// Standardize a raw metadata element
    pub fn from_raw(meta: &Meta, converter: &Converter, strict: bool) -> Result<Self> {
        let definition = meta
            .definition
            .as_ref()
            .map(|definition| StandardizedDefinition::from_raw(definition, converter, strict))
            .transpose()?;

        let subsets = match &meta.subsets {
            Some(values) => parse_reference_list(values, converter, strict, "subset")?,
            None => None,
        };

        let mut xrefs = Vec::new();
        for xref in meta.xrefs.iter().flatten() {
            if let Some(standardized) = StandardizedXref::from_raw(xref, converter, strict)? {
                xrefs.push(standardized);
            }
        }

        let synonyms = meta
            .synonyms
            .iter()
            .flatten()
            .map(|synonym| StandardizedSynonym::from_raw(synonym, converter, strict))
            .collect::<Result<Vec<_>>>()?;

        let mut properties = Vec::new();
        for property in meta.basic_property_values.iter().flatten() {
            if let Some(standardized) =
                StandardizedProperty::from_raw(property, converter, strict)?
            {
                properties.push(standardized);
            }
        }

        Ok(Self {
            definition,
            subsets,
            xrefs: (!xrefs.is_empty()).then_some(xrefs),
            synonyms: (!synonyms.is_empty()).then_some(synonyms),
            comments: meta.comments.clone(),
            version: meta.version.clone(),
            properties: (!properties.is_empty()).then_some(properties),
            deprecated: meta.deprecated,
        })
    }

    /// Reconstitute the raw metadata element
    pub fn to_raw(&self, converter: &Converter) -> Result<Meta> {
        let subsets = self
            .subsets
            .as_ref()
            .map(|references| {
                references
                    .iter()
                    .map(|reference| expand_required(reference, converter))
                    .collect::<Result<Vec<_>>>()
            })
            .transpose()?;

        let synonyms = self
            .synonyms
            .as_ref()
            .map(|synonyms| {
                synonyms
                    .iter()
                    .map(|synonym| synonym.to_raw(converter))
                    .collect::<Result<Vec<_>>>()
            })
            .transpose()?;

        let properties = self
            .properties
            .as_ref()
            .map(|properties| {
                properties
                    .iter()
                    .map(|property| property.to_raw(converter))
                    .collect::<Result<Vec<_>>>()
            })
            .transpose()?;

        Ok(Meta {
            definition: self.definition.as_ref().map(StandardizedDefinition::to_raw),
            subsets,
            xrefs: self
                .xrefs
                .as_ref()
                .map(|xrefs| xrefs.iter().map(StandardizedXref::to_raw).collect()),
            synonyms,
            comments: self.comments.clone(),
            version: self.version.clone(),
            basic_property_values: properties,
            deprecated: self.deprecated,
        })
    }
}

/// Resolve a list of identifier strings, dropping blocklisted entries
///
/// `None` when nothing survives, so empty lists stay omitted on the raw side.
pub(crate) fn parse_reference_list(
    values: &[String],
    converter: &Converter,
    strict: bool,
    context: &str,
) -> Result<Option<Vec<Reference>>> {
    let mut references = Vec::with_capacity(values.len());
    for value in values {
        if let Some(reference) = resolve_or_skip(value, converter, strict, context)? {
            references.push(reference);
        }
    }
    Ok((!references.is_empty()).then_some(references))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curie::RewriteRules;

    fn test_converter() -> Converter {
        let mut rules = RewriteRules::default();
        rules.blocklist_full.insert("IUPAC".to_string());
        rules.blocklist_full.insert("GOC:go_curators".to_string());
        Converter::from_prefix_map([
            ("obo", "http://purl.obolibrary.org/obo/"),
            ("GO", "http://purl.obolibrary.org/obo/GO_"),
            ("oboInOwl", "http://www.geneontology.org/formats/oboInOwl#"),
            ("Wikipedia", "http://en.wikipedia.org/wiki/"),
            ("PMID", "https://pubmed.ncbi.nlm.nih.gov/"),
            ("GOC", "https://bioregistry.io/goc:"),
            ("dcterms", "http://purl.org/dc/terms/"),
        ])
        .unwrap()
        .with_rules(rules)
    }

    #[test]
    fn test_property_with_literal_value() {
        // Arrange
        let converter = test_converter();
        let raw = BasicPropertyValue::new(
            "http://www.geneontology.org/formats/oboInOwl#hasOBONamespace",
            "biological_process",
        );

        // Act
        let standardized = StandardizedProperty::from_raw(&raw, &converter, true)
            .unwrap()
            .unwrap();

        // Assert
        assert_eq!(
            standardized.predicate,
            Reference::new("oboInOwl", "hasOBONamespace")
        );
        assert_eq!(
            standardized.value,
            StandardizedValue::Literal("biological_process".to_string())
        );

        // and back
        let raw_again = standardized.to_raw(&converter).unwrap();
        assert_eq!(raw_again, raw);
    }

    #[test]
    fn test_property_with_reference_value() {
        // Arrange
        let converter = test_converter();
        let raw = BasicPropertyValue::new(
            "http://purl.org/dc/terms/contributor",
            "http://purl.obolibrary.org/obo/GO_0005634",
        );

        // Act
        let standardized = StandardizedProperty::from_raw(&raw, &converter, true)
            .unwrap()
            .unwrap();

        // Assert
        assert_eq!(
            standardized.value,
            StandardizedValue::Reference(Reference::new("GO", "0005634"))
        );
        assert_eq!(standardized.to_raw(&converter).unwrap(), raw);
    }

    #[test]
    fn test_property_with_blocked_value_is_dropped() {
        // Arrange
        let converter = test_converter();
        let raw = BasicPropertyValue::new("http://purl.org/dc/terms/contributor", "IUPAC");

        // Act
        let standardized = StandardizedProperty::from_raw(&raw, &converter, true).unwrap();

        // Assert
        assert!(standardized.is_none());
    }

    #[test]
    fn test_property_with_bad_predicate_strict_vs_lenient() {
        // Arrange
        let converter = test_converter();
        let raw = BasicPropertyValue::new("not an identifier", "whatever");

        // Act & Assert
        assert!(StandardizedProperty::from_raw(&raw, &converter, true).is_err());
        assert!(StandardizedProperty::from_raw(&raw, &converter, false)
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_definition_xrefs_resolve_and_render_as_curies() {
        // Arrange
        let converter = test_converter();
        let raw = Definition {
            val: Some("The membrane-bounded organelle.".to_string()),
            xrefs: Some(vec![
                "Wikipedia:Cell_nucleus".to_string(),
                "GOC:go_curators".to_string(),
            ]),
        };

        // Act
        let standardized = StandardizedDefinition::from_raw(&raw, &converter, true).unwrap();

        // Assert
        // the blocklisted curator string is gone, the real xref survives
        let xrefs = standardized.xrefs.as_ref().unwrap();
        assert_eq!(xrefs.len(), 1);
        assert_eq!(xrefs[0], Reference::new("Wikipedia", "Cell_nucleus"));

        let raw_again = standardized.to_raw();
        assert_eq!(
            raw_again.xrefs.unwrap(),
            vec!["Wikipedia:Cell_nucleus".to_string()]
        );
    }

    #[test]
    fn test_synonym_predicate_wrapped_verbatim() {
        // Arrange
        let converter = test_converter();
        let raw = Synonym {
            val: Some("cell nucleus".to_string()),
            pred: "hasExactSynonym".to_string(),
            synonym_type: None,
            xrefs: vec!["PMID:12345".to_string()],
        };

        // Act
        let standardized = StandardizedSynonym::from_raw(&raw, &converter, true).unwrap();

        // Assert
        assert_eq!(
            standardized.predicate,
            Reference::new("oboInOwl", "hasExactSynonym")
        );
        assert_eq!(
            standardized.xrefs.as_ref().unwrap()[0],
            Reference::new("PMID", "12345")
        );

        let raw_again = standardized.to_raw(&converter).unwrap();
        assert_eq!(raw_again, raw);
    }

    #[test]
    fn test_synonym_type_expands_to_uri() {
        // Arrange
        let converter = test_converter();
        let raw = Synonym {
            val: Some("nucleus".to_string()),
            pred: "hasRelatedSynonym".to_string(),
            synonym_type: Some("http://purl.obolibrary.org/obo/go#systematic_synonym".to_string()),
            xrefs: vec![],
        };

        // Act
        let standardized = StandardizedSynonym::from_raw(&raw, &converter, true).unwrap();
        let raw_again = standardized.to_raw(&converter).unwrap();

        // Assert
        assert_eq!(
            standardized.synonym_type,
            Some(Reference::new("obo", "go#systematic_synonym"))
        );
        assert_eq!(raw_again, raw);
    }

    #[test]
    fn test_meta_roundtrip() {
        // Arrange
        let converter = test_converter();
        let json = r#"{
            "definition": {
                "val": "The membrane-bounded organelle.",
                "xrefs": ["Wikipedia:Cell_nucleus"]
            },
            "subsets": ["http://purl.obolibrary.org/obo/go#goslim_plant"],
            "xrefs": [{"val": "Wikipedia:Cell_nucleus"}],
            "synonyms": [{"val": "cell nucleus", "xrefs": ["PMID:12345"]}],
            "comments": ["a comment"],
            "basicPropertyValues": [
                {
                    "pred": "http://www.geneontology.org/formats/oboInOwl#hasOBONamespace",
                    "val": "cellular_component"
                }
            ],
            "deprecated": true
        }"#;
        let raw: Meta = serde_json::from_str(json).unwrap();

        // Act
        let standardized = StandardizedMeta::from_raw(&raw, &converter, true).unwrap();
        let raw_again = standardized.to_raw(&converter).unwrap();

        // Assert
        assert_eq!(
            serde_json::to_value(&raw_again).unwrap(),
            serde_json::to_value(&raw).unwrap()
        );
        assert!(standardized.deprecated);
        assert_eq!(
            standardized.subsets.unwrap()[0],
            Reference::new("obo", "go#goslim_plant")
        );
    }

    #[test]
    fn test_lenient_mode_drops_unresolvable_xref() {
        // Arrange
        let converter = test_converter();
        let raw = Meta {
            xrefs: Some(vec![
                Xref::new("Wikipedia:Cell_nucleus"),
                Xref::new("garbage value"),
            ]),
            ..Default::default()
        };

        // Act
        let strict = StandardizedMeta::from_raw(&raw, &converter, true);
        let lenient = StandardizedMeta::from_raw(&raw, &converter, false).unwrap();

        // Assert
        assert!(strict.is_err());
        assert_eq!(lenient.xrefs.unwrap().len(), 1);
    }
}
