// file: src/cli/mod.rs
// version: 1.0.0
// guid: 541e73e4-0687-41f5-bd16-c4b413e982c5

//! Command line interface for the obographs toolkit

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::*;
