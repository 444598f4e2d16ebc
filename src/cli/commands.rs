// file: src/cli/commands.rs
// version: 1.0.0
// guid: f9587152-39ea-49a9-ad77-a8ec5e7bbdcf

//! Command implementations for the CLI

use crate::{
    curie::{Converter, RewriteRules},
    error::ObographsError,
    model::validator::{report_document, validate_document},
    network::{default_download_dir, OntologyFetcher},
    stats::document_stats,
    Result,
};
use std::path::PathBuf;
use tracing::info;

/// Download an ontology document, verifying an optional checksum
pub async fn fetch_command(
    url: &str,
    output: Option<String>,
    checksum: Option<String>,
    json_output: bool,
) -> Result<()> {
    let dest = match output {
        Some(path) => PathBuf::from(path),
        None => default_download_dir().join(dest_file_name(url)),
    };

    let fetcher = OntologyFetcher::new();
    let fetch_info = fetcher.download_with_progress(url, &dest).await?;

    if let Some(expected) = checksum {
        if !expected.eq_ignore_ascii_case(&fetch_info.sha256) {
            return Err(ObographsError::validation(format!(
                "Checksum mismatch: expected {}, got {}",
                expected, fetch_info.sha256
            )));
        }
        info!("Checksum verified");
    }

    if json_output {
        let json = serde_json::to_string_pretty(&fetch_info)?;
        println!("{}", json);
    } else {
        println!("URL:     {}", fetch_info.url);
        println!("Path:    {}", fetch_info.path.display());
        println!("Size:    {}", fetch_info.size_human());
        println!("SHA-256: {}", fetch_info.sha256);
        println!(
            "Fetched: {}",
            fetch_info.fetched_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
    }

    Ok(())
}

/// Validate the structure of a document
pub async fn validate_command(source: &str) -> Result<()> {
    info!("Validating document: {}", source);

    let document = crate::io::read(source).await?;
    let report = report_document(&document);

    println!(
        "{:<44} {:>8} {:>8} {:>9} {:>11} {:>10}",
        "Graph", "Nodes", "Edges", "Dangling", "Deprecated", "Unlabeled"
    );
    println!("{:-<94}", "");
    for summary in &report.graphs {
        println!(
            "{:<44} {:>8} {:>8} {:>9} {:>11} {:>10}",
            summary.id.as_deref().unwrap_or("-"),
            summary.node_count,
            summary.edge_count,
            summary.dangling_edge_ids,
            summary.deprecated_nodes,
            summary.unlabeled_nodes
        );
    }

    validate_document(&document)?;
    info!("Validation successful");
    Ok(())
}

/// Print per-graph statistics
pub async fn stats_command(source: &str, json_output: bool) -> Result<()> {
    let document = crate::io::read(source).await?;
    let stats = document_stats(&document);

    if json_output {
        let json = serde_json::to_string_pretty(&stats)?;
        println!("{}", json);
    } else {
        println!(
            "{:<44} {:>8} {:>8} {:>8} {:>8} {:>11}",
            "Graph", "Nodes", "Edges", "Preds", "Syns", "Deprecated"
        );
        println!("{:-<92}", "");
        for graph_stats in &stats {
            println!(
                "{:<44} {:>8} {:>8} {:>8} {:>8} {:>11}",
                graph_stats.id.as_deref().unwrap_or("-"),
                graph_stats.nodes,
                graph_stats.edges,
                graph_stats.distinct_predicates,
                graph_stats.synonyms,
                graph_stats.deprecated
            );
        }
        info!("Summarized {} graphs", stats.len());
    }

    Ok(())
}

/// Standardize a document against a prefix map
pub async fn standardize_command(
    source: &str,
    prefixes: &str,
    rules: Option<String>,
    strict: bool,
    output: Option<String>,
) -> Result<()> {
    let document = crate::io::read(source).await?;

    let mut converter = Converter::from_file(prefixes)?;
    if let Some(rules_path) = rules {
        converter = converter.with_rules(RewriteRules::load(rules_path)?);
    }

    info!(
        "Standardizing {} graphs against {} prefix records ({} mode)",
        document.graphs.len(),
        converter.len(),
        if strict { "strict" } else { "lenient" }
    );

    let standardized = document.standardize(&converter, strict)?;
    let json = serde_json::to_string_pretty(&standardized)?;

    match output {
        Some(path) => {
            std::fs::write(&path, json)?;
            info!("Wrote standardized document to {}", path);
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// Last path segment of a URL, with query and fragment stripped
fn dest_file_name(url: &str) -> &str {
    url.split(['?', '#'])
        .next()
        .unwrap_or(url)
        .rsplit('/')
        .next()
        .filter(|name| !name.is_empty())
        .unwrap_or("ontology.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::fetch::{set_mock_download_with_progress, FetchInfo};
    use std::io::Write;
    use tempfile::{Builder, TempDir};

    const FIXTURE: &str = r#"{
        "graphs": [
            {
                "id": "http://purl.obolibrary.org/obo/go.json",
                "nodes": [
                    {
                        "id": "http://purl.obolibrary.org/obo/GO_0005634",
                        "lbl": "nucleus",
                        "type": "CLASS"
                    },
                    {
                        "id": "http://purl.obolibrary.org/obo/GO_0043226",
                        "lbl": "organelle",
                        "type": "CLASS"
                    }
                ],
                "edges": [
                    {
                        "sub": "http://purl.obolibrary.org/obo/GO_0005634",
                        "pred": "is_a",
                        "obj": "http://purl.obolibrary.org/obo/GO_0043226"
                    }
                ]
            }
        ]
    }"#;

    fn fixture_file() -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(FIXTURE.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_validate_command() {
        // Arrange
        let file = fixture_file();

        // Act
        let result = validate_command(file.path().to_str().unwrap()).await;

        // Assert
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_validate_command_rejects_duplicate_nodes() {
        // Arrange
        let duplicated = FIXTURE.replace("GO_0043226", "GO_0005634");
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(duplicated.as_bytes()).unwrap();

        // Act
        let result = validate_command(file.path().to_str().unwrap()).await;

        // Assert
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_stats_command_json() {
        // Arrange
        let file = fixture_file();

        // Act
        let result = stats_command(file.path().to_str().unwrap(), true).await;

        // Assert
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_standardize_command_writes_output() {
        // Arrange
        let file = fixture_file();
        let temp_dir = TempDir::new().unwrap();
        let prefixes_path = temp_dir.path().join("prefixes.yaml");
        std::fs::write(
            &prefixes_path,
            "GO: \"http://purl.obolibrary.org/obo/GO_\"\n",
        )
        .unwrap();
        let output_path = temp_dir.path().join("standardized.json");

        // Act
        let result = standardize_command(
            file.path().to_str().unwrap(),
            prefixes_path.to_str().unwrap(),
            None,
            true,
            Some(output_path.to_str().unwrap().to_string()),
        )
        .await;

        // Assert
        assert!(result.is_ok());
        let written = std::fs::read_to_string(&output_path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["graphs"][0]["nodes"][0]["reference"]["prefix"], "GO");
    }

    #[tokio::test]
    async fn test_standardize_command_missing_prefix_file() {
        // Arrange
        let file = fixture_file();

        // Act
        let result = standardize_command(
            file.path().to_str().unwrap(),
            "/nonexistent/prefixes.yaml",
            None,
            false,
            None,
        )
        .await;

        // Assert
        assert!(matches!(result, Err(ObographsError::FileNotFound(_))));
    }

    #[tokio::test]
    async fn test_fetch_command_checksum_verification() {
        // Arrange
        let info = FetchInfo::new(
            "http://unused.test/go.json",
            PathBuf::from("/tmp/go.json"),
            4,
            "deadbeef".to_string(),
        );

        // Act & Assert
        // matching checksum, case-insensitive
        set_mock_download_with_progress(Ok(info.clone()));
        let ok = fetch_command(
            "http://unused.test/go.json",
            Some("/tmp/go.json".to_string()),
            Some("DEADBEEF".to_string()),
            false,
        )
        .await;
        assert!(ok.is_ok());

        // mismatch is a hard error
        set_mock_download_with_progress(Ok(info));
        let mismatch = fetch_command(
            "http://unused.test/go.json",
            Some("/tmp/go.json".to_string()),
            Some("f00dface".to_string()),
            false,
        )
        .await;
        assert!(matches!(mismatch, Err(ObographsError::Validation(_))));
    }

    #[test]
    fn test_dest_file_name() {
        // Act & Assert
        assert_eq!(
            dest_file_name("http://purl.obolibrary.org/obo/go.json"),
            "go.json"
        );
        assert_eq!(
            dest_file_name("https://example.org/ontology.json?version=2"),
            "ontology.json"
        );
        assert_eq!(dest_file_name("https://example.org/"), "ontology.json");
    }
}
