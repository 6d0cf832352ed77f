//! Where the parsed résumé comes from.
//!
//! Deployments either point at a sibling file (static hosting) or at an HTTP
//! URL. Both fetch once, with no timeout and no retries: any failure
//! collapses into `LoadError` and the page stays in its static state.

use std::path::PathBuf;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// The single failure kind of a résumé load. Variants exist for the log line
/// only; callers treat them identically.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("resume not found yet (status {0})")]
    Status(u16),

    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed resume JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[async_trait]
pub trait ResumeSource: Send + Sync {
    /// Fetches and parses the raw document.
    async fn fetch(&self) -> Result<Value, LoadError>;

    /// Human-readable location, for logs.
    fn describe(&self) -> String;
}

pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Result<Self, LoadError> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl ResumeSource for HttpSource {
    async fn fetch(&self) -> Result<Value, LoadError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        debug!("Fetched {} bytes from {}", body.len(), self.url);
        Ok(serde_json::from_str(&body)?)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ResumeSource for FileSource {
    async fn fetch(&self) -> Result<Value, LoadError> {
        let body = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| LoadError::Io {
                path: self.path.clone(),
                source,
            })?;
        Ok(serde_json::from_str(&body)?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Picks the source kind from the configured location.
pub fn from_location(location: &str) -> Result<Box<dyn ResumeSource>, LoadError> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Ok(Box::new(HttpSource::new(location)?))
    } else {
        Ok(Box::new(FileSource::new(location)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_file_source_reads_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"SUMMARY": "Hello"}}"#).unwrap();

        let value = FileSource::new(file.path()).fetch().await.unwrap();
        assert_eq!(value["SUMMARY"], "Hello");
    }

    #[tokio::test]
    async fn test_file_source_missing_file() {
        let err = FileSource::new("/definitely/not/here.json")
            .fetch()
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[tokio::test]
    async fn test_file_source_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = FileSource::new(file.path()).fetch().await.unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn test_location_picks_source_kind() {
        assert!(from_location("https://example.com/parsed_resume.json")
            .unwrap()
            .describe()
            .starts_with("https://"));
        assert_eq!(
            from_location("site/parsed_resume.json").unwrap().describe(),
            "site/parsed_resume.json"
        );
    }
}
