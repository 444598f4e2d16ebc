// file: src/curie/mod.rs
// version: 1.0.0
// guid: 4c1afc97-e8d8-4b33-8b97-cb44ce01f203

//! CURIE and URI handling
//!
//! A [`Converter`] is built from a prefix map (flat or extended) and turns
//! identifier strings into [`Reference`] values and back: compression picks
//! the longest matching URI prefix, expansion always emits the canonical URI
//! prefix. [`RewriteRules`] hook data cleanup (rewrites, suffix strips,
//! blocklists) into parsing.

pub mod converter;
pub mod record;
pub mod reference;
pub mod rules;

pub use converter::Converter;
pub use record::Record;
pub use reference::Reference;
pub use rules::RewriteRules;
