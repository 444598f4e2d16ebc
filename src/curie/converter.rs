// file: src/curie/converter.rs
// version: 1.0.0
// guid: 060e9676-8590-4967-9f28-c6390d7686b4

//! Bidirectional CURIE/URI conversion

use crate::curie::record::Record;
use crate::curie::reference::Reference;
use crate::curie::rules::RewriteRules;
use crate::error::ObographsError;
use crate::Result;
use serde::Deserialize;
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::ops::Bound;
use std::path::Path;

/// File form of a prefix map: a flat `prefix -> uri_prefix` mapping or a
/// list of extended records
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PrefixMapFile {
    Extended(Vec<Record>),
    Flat(BTreeMap<String, String>),
}

/// Bidirectional CURIE/URI converter over an extended prefix map
///
/// Compression picks the longest matching URI prefix (canonical or synonym);
/// the produced [`Reference`] always carries the canonical prefix. Lookups
/// are case sensitive.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    records: Vec<Record>,
    /// canonical prefixes and synonyms -> index into `records`
    prefix_index: HashMap<String, usize>,
    /// canonical URI prefixes and synonyms -> index into `records`,
    /// ordered for longest-prefix descent
    uri_index: BTreeMap<String, usize>,
    rules: Option<RewriteRules>,
}

impl Converter {
    /// Create an empty converter
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a converter from `(prefix, uri_prefix)` pairs
    pub fn from_prefix_map<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut converter = Converter::new();
        for (prefix, uri_prefix) in pairs {
            converter.add_prefix(prefix, uri_prefix)?;
        }
        Ok(converter)
    }

    /// Build a converter from extended prefix map records
    pub fn from_extended_prefix_map<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = Record>,
    {
        let mut converter = Converter::new();
        for record in records {
            converter.add_record(record)?;
        }
        Ok(converter)
    }

    /// Load a prefix map from a YAML or JSON file
    ///
    /// The file may hold a flat `prefix: uri_prefix` mapping or a list of
    /// extended records; the format is dispatched on the file extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ObographsError::FileNotFound(path.display().to_string())
            } else {
                ObographsError::Io(e)
            }
        })?;
        let parsed: PrefixMapFile = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)?,
            _ => serde_yaml::from_str(&content)?,
        };
        match parsed {
            PrefixMapFile::Extended(records) => Self::from_extended_prefix_map(records),
            PrefixMapFile::Flat(map) => Self::from_prefix_map(map),
        }
    }

    /// Attach rewrite rules applied by [`Converter::parse`]
    pub fn with_rules(mut self, rules: RewriteRules) -> Self {
        self.rules = Some(rules);
        self
    }

    /// The records in insertion order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the converter has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Add an extended record, rejecting clashes with existing entries
    pub fn add_record(&mut self, record: Record) -> Result<()> {
        record.validate()?;
        for prefix in record.all_prefixes() {
            if self.prefix_index.contains_key(prefix) {
                return Err(ObographsError::PrefixMap(format!(
                    "Duplicate prefix: {}",
                    prefix
                )));
            }
        }
        for uri_prefix in record.all_uri_prefixes() {
            if self.uri_index.contains_key(uri_prefix) {
                return Err(ObographsError::PrefixMap(format!(
                    "Duplicate URI prefix: {}",
                    uri_prefix
                )));
            }
        }
        let idx = self.records.len();
        for prefix in record.all_prefixes() {
            self.prefix_index.insert(prefix.to_string(), idx);
        }
        for uri_prefix in record.all_uri_prefixes() {
            self.uri_index.insert(uri_prefix.to_string(), idx);
        }
        self.records.push(record);
        Ok(())
    }

    /// Add a plain `(prefix, uri_prefix)` pair
    pub fn add_prefix(
        &mut self,
        prefix: impl Into<String>,
        uri_prefix: impl Into<String>,
    ) -> Result<()> {
        self.add_record(Record::new(prefix, uri_prefix))
    }

    /// Register an additional prefix accepted for an existing record
    pub fn add_prefix_synonym(&mut self, prefix: &str, synonym: impl Into<String>) -> Result<()> {
        let synonym = synonym.into();
        let idx = *self.prefix_index.get(prefix).ok_or_else(|| {
            ObographsError::PrefixMap(format!("Unknown prefix: {}", prefix))
        })?;
        match self.prefix_index.get(synonym.as_str()) {
            Some(&existing) if existing == idx => Ok(()),
            Some(_) => Err(ObographsError::PrefixMap(format!(
                "Prefix synonym clashes with another record: {}",
                synonym
            ))),
            None => {
                self.prefix_index.insert(synonym.clone(), idx);
                self.records[idx].prefix_synonyms.push(synonym);
                Ok(())
            }
        }
    }

    /// Register an additional URI prefix accepted for an existing record
    pub fn add_uri_prefix_synonym(
        &mut self,
        prefix: &str,
        synonym: impl Into<String>,
    ) -> Result<()> {
        let synonym = synonym.into();
        if synonym.is_empty() {
            return Err(ObographsError::PrefixMap(format!(
                "Empty URI prefix synonym for {}",
                prefix
            )));
        }
        let idx = *self.prefix_index.get(prefix).ok_or_else(|| {
            ObographsError::PrefixMap(format!("Unknown prefix: {}", prefix))
        })?;
        match self.uri_index.get(synonym.as_str()) {
            Some(&existing) if existing == idx => Ok(()),
            Some(_) => Err(ObographsError::PrefixMap(format!(
                "URI prefix synonym clashes with another record: {}",
                synonym
            ))),
            None => {
                self.uri_index.insert(synonym.clone(), idx);
                self.records[idx].uri_prefix_synonyms.push(synonym);
                Ok(())
            }
        }
    }

    /// Resolve a prefix or prefix synonym to its canonical prefix
    pub fn standardize_prefix(&self, prefix: &str) -> Option<&str> {
        self.prefix_index
            .get(prefix)
            .map(|&idx| self.records[idx].prefix.as_str())
    }

    /// Expand a reference to its canonical URI
    ///
    /// The reference's prefix may be a synonym; `None` when unknown.
    pub fn expand(&self, reference: &Reference) -> Option<String> {
        let idx = *self.prefix_index.get(reference.prefix.as_str())?;
        Some(format!(
            "{}{}",
            self.records[idx].uri_prefix, reference.identifier
        ))
    }

    /// Expand a CURIE string to its canonical URI
    pub fn expand_curie(&self, curie: &str) -> Option<String> {
        let (prefix, identifier) = curie.split_once(':')?;
        let idx = *self.prefix_index.get(prefix)?;
        Some(format!("{}{}", self.records[idx].uri_prefix, identifier))
    }

    /// Compress a URI against the longest matching URI prefix
    pub fn compress(&self, uri: &str) -> Option<Reference> {
        let (matched, idx) = self.longest_uri_prefix(uri)?;
        let identifier = uri[matched.len()..].to_string();
        Some(Reference::new(self.records[idx].prefix.clone(), identifier))
    }

    /// Whether a string starts with a known URI prefix
    pub fn is_uri(&self, s: &str) -> bool {
        self.longest_uri_prefix(s).is_some()
    }

    /// Whether a string is a CURIE under a known prefix
    pub fn is_curie(&self, s: &str) -> bool {
        matches!(s.split_once(':'), Some((prefix, _)) if self.prefix_index.contains_key(prefix))
    }

    /// Parse an identifier string into a reference
    ///
    /// Applies the attached rewrite rules, then tries URI compression, then
    /// CURIE parsing with prefix canonicalization. `Ok(None)` means the
    /// string was blocklisted and should be dropped; an unresolvable string
    /// is an error.
    pub fn parse(&self, s: &str) -> Result<Option<Reference>> {
        let s: Cow<'_, str> = match &self.rules {
            Some(rules) => match rules.preprocess(s) {
                Some(rewritten) => rewritten,
                None => return Ok(None),
            },
            None => Cow::Borrowed(s),
        };

        let mut reference = if let Some((matched, idx)) = self.longest_uri_prefix(&s) {
            let identifier = s[matched.len()..].to_string();
            Reference::new(self.records[idx].prefix.clone(), identifier)
        } else if let Some(reference) = self.parse_curie(&s) {
            reference
        } else {
            return Err(ObographsError::Conversion(format!(
                "Cannot parse as URI or CURIE: {}",
                s
            )));
        };

        if let Some(rules) = &self.rules {
            rules.postprocess(&mut reference);
        }
        Ok(Some(reference))
    }

    fn parse_curie(&self, s: &str) -> Option<Reference> {
        let (prefix, identifier) = s.split_once(':')?;
        let canonical = self.standardize_prefix(prefix)?;
        Some(Reference::new(canonical, identifier))
    }

    /// Find the longest key in the URI index that prefixes `uri`
    ///
    /// Ordered-map descent: probe the greatest key not exceeding the query,
    /// then shrink the query to the common prefix and repeat. Every key that
    /// prefixes the full URI stays within the shrunken bound, so the first
    /// hit is the longest match.
    fn longest_uri_prefix(&self, uri: &str) -> Option<(&str, usize)> {
        if uri.is_empty() {
            return None;
        }
        let mut query = uri;
        loop {
            let (key, &idx) = self
                .uri_index
                .range::<str, _>((Bound::Unbounded, Bound::Included(query)))
                .next_back()?;
            if query.starts_with(key.as_str()) {
                return Some((key.as_str(), idx));
            }
            let common = common_prefix_len(key, query);
            if common == 0 {
                return None;
            }
            query = &uri[..common];
        }
    }
}

/// Length in bytes of the shared prefix of two strings, rounded down to a
/// char boundary
fn common_prefix_len(a: &str, b: &str) -> usize {
    let mut len = a
        .bytes()
        .zip(b.bytes())
        .take_while(|(x, y)| x == y)
        .count();
    while len > 0 && !b.is_char_boundary(len) {
        len -= 1;
    }
    len
}
