// file: src/io/mod.rs
// version: 1.0.0
// guid: d135af83-9e2f-4c41-b0ce-1db5b48a42b7

//! Reading OBO Graph documents from strings, files, and URLs

use crate::error::ObographsError;
use crate::model::graph::GraphDocument;
use crate::network::OntologyFetcher;
use crate::Result;
use std::path::PathBuf;
use tracing::debug;

/// Parse a graph document from JSON text
pub fn read_str(content: &str) -> Result<GraphDocument> {
    Ok(serde_json::from_str(content)?)
}

/// Read a graph document from a JSON file
///
/// A leading tilde expands to the home directory. Gzipped files are
/// rejected as unsupported.
pub fn read_path(path: &str) -> Result<GraphDocument> {
    let expanded = shellexpand::tilde(path);
    let path = PathBuf::from(expanded.as_ref());
    if !path.is_file() {
        return Err(ObographsError::file_not_found(path.display().to_string()));
    }
    if path.extension().and_then(|ext| ext.to_str()) == Some("gz") {
        return Err(ObographsError::unsupported(format!(
            "Gzipped file: {}",
            path.display()
        )));
    }

    debug!("Reading graph document from {}", path.display());
    let content = std::fs::read_to_string(&path)?;
    read_str(&content)
}

/// Fetch a graph document from an HTTP(S) URL
pub async fn read_url(url: &str) -> Result<GraphDocument> {
    if url.ends_with(".gz") {
        return Err(ObographsError::unsupported(format!(
            "Gzipped URL: {}",
            url
        )));
    }

    debug!("Reading graph document from {}", url);
    OntologyFetcher::new().fetch_document(url).await
}

/// Read a graph document from a URL or a file path
pub async fn read(source: &str) -> Result<GraphDocument> {
    if source.starts_with("http://") || source.starts_with("https://") {
        read_url(source).await
    } else {
        read_path(source)
    }
}
