use thiserror::Error;

#[derive(Error, Debug)]
pub enum GradingError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Folder not found: {0}")]
    FolderNotFound(String),

    #[error("No images found: {0}")]
    NoImagesFound(String),

    #[error("Report error: {0}")]
    Report(String),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] rubber_grading_common::Error),
}

pub type Result<T> = std::result::Result<T, GradingError>;
