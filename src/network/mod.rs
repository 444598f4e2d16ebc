// file: src/network/mod.rs
// version: 1.0.0
// guid: c4e44ebd-b1c8-4983-a90e-ff2c53fbe702

//! Network operations module

pub mod fetch;

pub use fetch::{default_download_dir, FetchInfo, OntologyFetcher};
