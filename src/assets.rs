//! Static asset downloads offered by the dashboard history tab

use crate::error::Result;
use rubber_grading_common::AssetRequest;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{error, info};

const USER_AGENT: &str = concat!("rubber-grading/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Default, Clone, PartialEq)]
pub struct AssetSummary {
    pub saved: Vec<PathBuf>,
    pub failed: Vec<String>,
}

pub struct AssetClient {
    client: reqwest::Client,
    base_url: String,
}

impl AssetClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetches one asset and saves it under its own name.
    pub async fn download(&self, request: &AssetRequest, dir: &Path) -> Result<PathBuf> {
        let url = request.url(&self.base_url);
        let bytes = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        let path = dir.join(&request.file_name);
        tokio::fs::write(&path, &bytes).await?;
        info!(url = %url, bytes = bytes.len(), "asset saved");
        Ok(path)
    }

    /// Downloads every request in order. A failed item is logged and skipped;
    /// only a failure to create `dir` is returned.
    pub async fn download_all(&self, requests: &[AssetRequest], dir: &Path) -> Result<AssetSummary> {
        tokio::fs::create_dir_all(dir).await?;

        let mut summary = AssetSummary::default();
        for request in requests {
            match self.download(request, dir).await {
                Ok(path) => summary.saved.push(path),
                Err(e) => {
                    error!(path = %request.path, error = %e, "asset download failed");
                    summary.failed.push(request.file_name.clone());
                }
            }
        }
        Ok(summary)
    }
}
