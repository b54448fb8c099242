//! Sources for the bundled default configuration document.
//!
//! The package ships a `config/default.toml`; depending on deployment it is
//! either read from disk next to the engine or fetched over HTTP from the
//! host that serves the package files.

use async_trait::async_trait;
use reqwest::Client;
use std::path::PathBuf;
use std::time::Duration;

use crate::infrastructure::ports::{DefaultConfigSource, FetchError};

/// Fetches the default document with an HTTP GET.
#[derive(Clone)]
pub struct HttpConfigSource {
    client: Client,
    url: String,
}

impl HttpConfigSource {
    pub fn new(url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            url: url.to_string(),
        }
    }
}

#[async_trait]
impl DefaultConfigSource for HttpConfigSource {
    async fn fetch(&self) -> Result<String, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| FetchError::Unavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FetchError::Unavailable(format!(
                "HTTP {} from {}",
                response.status(),
                self.url
            )));
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Unavailable(e.to_string()))
    }
}

/// Reads the default document from the local package directory.
pub struct FileConfigSource {
    path: PathBuf,
}

impl FileConfigSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DefaultConfigSource for FileConfigSource {
    async fn fetch(&self) -> Result<String, FetchError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| FetchError::Unavailable(format!("{}: {e}", self.path.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn file_source_reads_the_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("default.toml");
        std::fs::write(&path, "[system]\nname = \"Engrenages\"\n").unwrap();

        let source = FileConfigSource::new(&path);
        let text = source.fetch().await.unwrap();
        assert!(text.contains("Engrenages"));
    }

    #[tokio::test]
    async fn missing_file_reports_the_path() {
        let source = FileConfigSource::new("/nonexistent/default.toml");
        let err = source.fetch().await.unwrap_err();
        assert!(err.to_string().contains("default.toml"));
    }
}
