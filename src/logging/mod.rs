// file: src/logging/mod.rs
// version: 1.0.0
// guid: ac4bc71b-dc13-4adf-bf0c-22138ff9ec0c

//! Logging setup for the obographs tools

pub mod logger;

pub use logger::{init_json_logger, init_logger};
