use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::path::PathBuf;
use tracing::info;

/// Where the feed document comes from. The engine only ever consumes
/// the parsed value; producing it (export pipeline, HTTP fetch) lives
/// behind this seam.
#[async_trait]
pub trait FeedSource: Send + Sync {
    async fn fetch(&self) -> Result<Value>;
}

/// Reads the exported `media.json` from disk.
pub struct FileFeed {
    path: PathBuf,
}

impl FileFeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl FeedSource for FileFeed {
    async fn fetch(&self) -> Result<Value> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("failed to read feed file {:?}", self.path))?;
        info!(path = ?self.path, bytes = raw.len(), "feed file read");
        serde_json::from_str(&raw)
            .with_context(|| format!("feed file {:?} is not valid JSON", self.path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn reads_a_feed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id": "m1", "title": "Alien"}}]"#).unwrap();

        let value = FileFeed::new(file.path()).fetch().await.unwrap();
        assert!(value.is_array());
    }

    #[tokio::test]
    async fn missing_file_is_an_error_with_context() {
        let err = FileFeed::new("/nonexistent/media.json")
            .fetch()
            .await
            .unwrap_err();
        assert!(err.to_string().contains("media.json"));
    }

    #[tokio::test]
    async fn invalid_json_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        assert!(FileFeed::new(file.path()).fetch().await.is_err());
    }
}
