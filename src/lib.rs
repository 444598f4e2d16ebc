// file: src/lib.rs
// version: 1.0.0
// guid: 6548d88b-95c4-42e2-ae6c-1cd2b8e3925b

//! # Obographs
//!
//! Tools for reading, validating, and standardizing OBO Graph JSON documents,
//! the graph-oriented exchange format for OWL ontologies.
//!
//! The raw [`model`] mirrors the obographs schema field for field. The
//! [`curie`] module builds bidirectional CURIE/URI converters from prefix
//! maps, and [`standardized`] resolves every identifier in a document through
//! such a converter and back.

pub mod cli;
pub mod curie;
pub mod error;
pub mod io;
pub mod logging;
pub mod model;
pub mod network;
pub mod standardized;
pub mod stats;

pub use error::{ObographsError, Result};

/// Version information for the toolkit
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
