// file: src/network/fetch.rs
// version: 1.0.0
// guid: 00c14071-83ca-4e6b-a2d5-fd252d9b1047

//! Ontology fetching with progress tracking

use crate::error::ObographsError;
use crate::model::graph::GraphDocument;
use crate::Result;
use chrono::{DateTime, Utc};
use futures::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};
use url::Url;

#[cfg(test)]
use std::sync::{Mutex, OnceLock};

#[cfg(test)]
#[derive(Default)]
struct MockResponses {
    fetch_document: Option<Result<GraphDocument>>,
    download_with_progress: Option<Result<FetchInfo>>,
    verify_url: Option<Result<bool>>,
}

#[cfg(test)]
static MOCK_RESPONSES: OnceLock<Mutex<MockResponses>> = OnceLock::new();

#[cfg(test)]
fn mock_storage() -> &'static Mutex<MockResponses> {
    MOCK_RESPONSES.get_or_init(|| Mutex::new(MockResponses::default()))
}

#[cfg(test)]
fn take_mock_fetch_document() -> Option<Result<GraphDocument>> {
    mock_storage().lock().unwrap().fetch_document.take()
}

#[cfg(test)]
fn take_mock_download_with_progress() -> Option<Result<FetchInfo>> {
    mock_storage().lock().unwrap().download_with_progress.take()
}

#[cfg(test)]
fn take_mock_verify_url() -> Option<Result<bool>> {
    mock_storage().lock().unwrap().verify_url.take()
}

#[cfg(test)]
pub(crate) fn set_mock_fetch_document(result: Result<GraphDocument>) {
    mock_storage().lock().unwrap().fetch_document = Some(result);
}

#[cfg(test)]
pub(crate) fn set_mock_download_with_progress(result: Result<FetchInfo>) {
    mock_storage().lock().unwrap().download_with_progress = Some(result);
}

#[cfg(test)]
pub(crate) fn set_mock_verify_url(result: Result<bool>) {
    mock_storage().lock().unwrap().verify_url = Some(result);
}

/// Metadata for a downloaded ontology document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchInfo {
    /// Source URL
    pub url: String,
    /// Local path of the downloaded document
    pub path: PathBuf,
    /// Download timestamp
    pub fetched_at: DateTime<Utc>,
    /// Size in bytes
    pub size_bytes: u64,
    /// SHA-256 checksum of the downloaded bytes
    pub sha256: String,
}

impl FetchInfo {
    /// Create new fetch info stamped with the current time
    pub fn new(
        url: impl Into<String>,
        path: PathBuf,
        size_bytes: u64,
        sha256: String,
    ) -> Self {
        Self {
            url: url.into(),
            path,
            fetched_at: Utc::now(),
            size_bytes,
            sha256,
        }
    }

    /// Get human-readable size
    pub fn size_human(&self) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = self.size_bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        format!("{:.2} {}", size, UNITS[unit_index])
    }
}

/// Default directory for downloaded ontologies
pub fn default_download_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("obographs")
}

/// Parse and check a URL before issuing a request
fn check_url(url: &str) -> Result<()> {
    let parsed =
        Url::parse(url).map_err(|e| ObographsError::network(format!("Invalid URL: {}", e)))?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(ObographsError::unsupported(format!(
            "Unsupported URL scheme: {}",
            scheme
        ))),
    }
}

/// Ontology fetcher with progress tracking
pub struct OntologyFetcher {
    client: Option<reqwest::Client>,
}

impl OntologyFetcher {
    /// Create a new ontology fetcher
    pub fn new() -> Self {
        #[cfg(test)]
        {
            Self { client: None }
        }

        #[cfg(not(test))]
        {
            Self {
                client: Some(reqwest::Client::new()),
            }
        }
    }

    /// Fetch and decode a graph document in one shot
    pub async fn fetch_document(&self, url: &str) -> Result<GraphDocument> {
        #[cfg(test)]
        if let Some(mock) = take_mock_fetch_document() {
            return mock;
        }

        check_url(url)?;

        let client = self
            .client
            .as_ref()
            .expect("reqwest client available outside tests");

        info!("Fetching ontology: {}", url);

        let response = client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(ObographsError::network(format!(
                "Fetch failed with status: {}",
                response.status()
            )));
        }

        let document = response.json().await?;
        debug!("Fetched ontology from: {}", url);
        Ok(document)
    }

    /// Download an ontology with a progress bar, hashing while writing
    pub async fn download_with_progress<P: AsRef<Path>>(
        &self,
        url: &str,
        dest: P,
    ) -> Result<FetchInfo> {
        #[cfg(test)]
        if let Some(mock) = take_mock_download_with_progress() {
            return mock;
        }

        check_url(url)?;

        let client = self
            .client
            .as_ref()
            .expect("reqwest client available outside tests");

        info!("Downloading: {}", url);

        let response = client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(ObographsError::network(format!(
                "Download failed with status: {}",
                response.status()
            )));
        }

        let total_size = response.content_length().unwrap_or(0);

        let pb = ProgressBar::new(total_size);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
                .unwrap()
                .progress_chars("#>-")
        );

        if let Some(parent) = dest.as_ref().parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut file = File::create(&dest).await?;
        let mut stream = response.bytes_stream();
        let mut hasher = Sha256::new();
        let mut downloaded = 0u64;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk).await?;
            hasher.update(&chunk);
            downloaded += chunk.len() as u64;
            pb.set_position(downloaded);
        }

        file.flush().await?;
        pb.finish_with_message("Download completed");

        let sha256 = hex::encode(hasher.finalize());
        info!("Downloaded to: {}", dest.as_ref().display());

        Ok(FetchInfo::new(
            url,
            dest.as_ref().to_path_buf(),
            downloaded,
            sha256,
        ))
    }

    /// Verify URL is accessible
    pub async fn verify_url(&self, url: &str) -> Result<bool> {
        #[cfg(test)]
        if let Some(mock) = take_mock_verify_url() {
            return mock;
        }

        let client = self
            .client
            .as_ref()
            .expect("reqwest client available outside tests");

        match client.head(url).send().await {
            Ok(response) => Ok(response.status().is_success()),
            Err(_) => Ok(false),
        }
    }
}

impl Default for OntologyFetcher {
    fn default() -> Self {
        Self::new()
    }
}
