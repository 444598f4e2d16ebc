// file: src/cli/args.rs
// version: 1.0.0
// guid: ac9b6c79-2acc-4b71-a4a9-cb2ee9ec8e5a

//! Command line argument definitions

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "obographs")]
#[command(about = "Read, validate, and standardize OBO Graph documents")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Download an ontology document
    Fetch {
        /// Source URL
        url: String,

        #[arg(short, long, help = "Destination path (default: cache directory)")]
        output: Option<String>,

        #[arg(long, help = "Expected SHA-256 checksum")]
        checksum: Option<String>,

        #[arg(short, long)]
        json: bool,
    },

    /// Validate the structure of a document
    Validate {
        /// Document URL or file path
        source: String,
    },

    /// Print per-graph statistics
    Stats {
        /// Document URL or file path
        source: String,

        #[arg(short, long)]
        json: bool,
    },

    /// Resolve every identifier against a prefix map
    Standardize {
        /// Document URL or file path
        source: String,

        #[arg(short, long, help = "Prefix map file (flat or extended, YAML or JSON)")]
        prefixes: String,

        #[arg(long, help = "Rewrite rules file (YAML or JSON)")]
        rules: Option<String>,

        #[arg(long, help = "Fail on the first unresolvable identifier")]
        strict: bool,

        #[arg(short, long, help = "Output path (default: stdout)")]
        output: Option<String>,
    },
}
