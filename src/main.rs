// file: src/main.rs
// version: 1.0.0
// guid: d039900e-1d9d-49a4-91f6-b1b1dbd55e4a

//! Obographs toolkit - Main entry point

use clap::Parser;
use obographs::{
    cli::args::{Cli, Commands},
    cli::commands::*,
    logging::logger,
    Result,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.log_json {
        logger::init_json_logger()?;
    } else {
        logger::init_logger(cli.verbose, cli.quiet)?;
    }

    match cli.command {
        Commands::Fetch {
            url,
            output,
            checksum,
            json,
        } => fetch_command(&url, output, checksum, json).await,
        Commands::Validate { source } => validate_command(&source).await,
        Commands::Stats { source, json } => stats_command(&source, json).await,
        Commands::Standardize {
            source,
            prefixes,
            rules,
            strict,
            output,
        } => standardize_command(&source, &prefixes, rules, strict, output).await,
    }
}
