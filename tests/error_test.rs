//! Error cases
//!
//! Error handling for bad inputs and conversions

use rubber_grading::error::GradingError;
use rubber_grading::scanner;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

/// Scanning a folder that does not exist
#[test]
fn test_scan_nonexistent_folder() {
    let result = scanner::scan_folder(Path::new("/nonexistent/path/12345"));
    assert!(result.is_err());

    let err = result.unwrap_err();
    assert!(matches!(err, GradingError::FolderNotFound(_)));
}

/// An empty folder is not an error
#[test]
fn test_scan_empty_folder() {
    let dir = tempdir().expect("Failed to create temp dir");
    let result = scanner::scan_folder(dir.path());

    assert!(result.is_ok());
    assert!(result.unwrap().is_empty());
}

/// Non-image files are dropped like a drag-and-drop would
#[test]
fn test_scan_folder_no_images() {
    let dir = tempdir().expect("Failed to create temp dir");

    std::fs::write(dir.path().join("test.txt"), "hello").unwrap();
    std::fs::write(dir.path().join("data.json"), "{}").unwrap();

    let result = scanner::scan_folder(dir.path());
    assert!(result.is_ok());
    assert!(result.unwrap().is_empty());
}

/// Subfolders are not descended into
#[test]
fn test_scan_folder_is_shallow() {
    let dir = tempdir().expect("Failed to create temp dir");
    let nested = dir.path().join("nested");
    std::fs::create_dir(&nested).unwrap();
    std::fs::write(nested.join("rss1.jpg"), "x").unwrap();
    std::fs::write(dir.path().join("rss2.png"), "x").unwrap();

    let images = scanner::scan_inputs(&[dir.path().to_path_buf()]).unwrap();
    assert_eq!(images.len(), 1);
    assert_eq!(images[0].file_name, "rss2.png");
}

#[test]
fn test_scan_inputs_missing_file() {
    let err = scanner::scan_inputs(&[PathBuf::from("/nonexistent/photo123.png")]).unwrap_err();
    assert!(matches!(err, GradingError::FileNotFound(_)));
}

#[test]
fn test_error_display() {
    let errors = vec![
        GradingError::Config("bad config".to_string()),
        GradingError::FileNotFound("test.jpg".to_string()),
        GradingError::FolderNotFound("/path/to/folder".to_string()),
        GradingError::NoImagesFound("folder".to_string()),
        GradingError::Report("report failed".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "empty message: {:?}", err);
    }
}

#[test]
fn test_error_debug() {
    let err = GradingError::Config("test".to_string());
    let debug = format!("{:?}", err);

    assert!(debug.contains("Config"));
    assert!(debug.contains("test"));
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: GradingError = io_err.into();

    assert!(matches!(err, GradingError::Io(_)));
    let display = format!("{}", err);
    assert!(display.contains("IO"));
}

#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: GradingError = json_err.into();

    assert!(matches!(err, GradingError::JsonParse(_)));
}

#[test]
fn test_common_error_conversion() {
    let common_err = "RSS9".parse::<rubber_grading_common::Grade>().unwrap_err();
    let err: GradingError = common_err.into();

    assert!(matches!(err, GradingError::Common(_)));
    // transparent: the inner message is shown as-is
    assert!(format!("{}", err).contains("RSS9"));
}

#[test]
fn test_config_roundtrip_and_missing_file() {
    use rubber_grading::config::Config;

    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");

    assert_eq!(Config::load_from(&path).unwrap(), Config::default());

    let mut config = Config::default();
    config.set_asset_base_url("https://grading.example".into()).unwrap();
    config.progress_interval_ms = 50;
    config.save_to(&path).unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), config);
}

#[test]
fn test_config_partial_file_uses_defaults() {
    use rubber_grading::config::Config;

    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "progress_interval_ms": 20 }"#).unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.progress_interval_ms, 20);
    assert_eq!(config.asset_base_url, Config::default().asset_base_url);
}

#[test]
fn test_config_invalid_json() {
    use rubber_grading::config::Config;

    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(matches!(Config::load_from(&path), Err(GradingError::JsonParse(_))));
}
