// file: src/logging/logger.rs
// version: 1.0.0
// guid: 79a271bf-7bde-47f2-a0f9-645bce6354ae

//! Logger initialization and configuration

use crate::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system
pub fn init_logger(verbose: bool, quiet: bool) -> Result<()> {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // logs go to stderr so stdout stays clean for JSON pipelines
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .map_err(|e| {
            crate::error::ObographsError::Config(format!("Failed to initialize logger: {}", e))
        })?;

    Ok(())
}

/// Initialize structured JSON logging (for pipelines)
pub fn init_json_logger() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| {
            crate::error::ObographsError::Config(format!(
                "Failed to initialize JSON logger: {}",
                e
            ))
        })?;

    Ok(())
}
