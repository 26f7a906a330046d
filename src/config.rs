use crate::error::{GradingError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const ASSET_URL_ENV: &str = "RUBBER_GRADING_ASSET_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site origin serving `/data/...`
    pub asset_base_url: String,
    pub progress_interval_ms: u64,
    /// Default output directory for reports
    pub report_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            asset_base_url: "http://localhost:5173".into(),
            progress_interval_ms: rubber_grading_common::SIMULATION_INTERVAL.as_millis() as u64,
            report_dir: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| GradingError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("rubber-grading").join("config.json"))
    }

    /// Asset base URL; the environment variable wins over the file
    pub fn asset_base_url(&self) -> String {
        std::env::var(ASSET_URL_ENV)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| self.asset_base_url.clone())
    }

    pub fn progress_interval(&self) -> Duration {
        Duration::from_millis(self.progress_interval_ms.max(1))
    }

    pub fn set_asset_base_url(&mut self, url: String) -> Result<()> {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(GradingError::Config(format!("not an http(s) URL: {}", url)));
        }
        self.asset_base_url = url;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_interval_matches_widget() {
        let config = Config::default();
        assert_eq!(config.progress_interval(), Duration::from_millis(200));
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let config = Config { progress_interval_ms: 0, ..Config::default() };
        assert_eq!(config.progress_interval(), Duration::from_millis(1));
    }

    #[test]
    fn test_rejects_non_http_url() {
        let mut config = Config::default();
        assert!(config.set_asset_base_url("ftp://example.com".into()).is_err());
        assert!(config.set_asset_base_url("https://example.com".into()).is_ok());
        assert_eq!(config.asset_base_url, "https://example.com");
    }
}
