//! Static asset downloads: failures are logged and skipped

use rubber_grading::assets::AssetClient;
use rubber_grading::error::GradingError;
use rubber_grading_common::dashboard::{asset_requests, sample_uploads};
use rubber_grading_common::AssetRequest;
use tempfile::tempdir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const USERS_JSON: &str = r#"[{"name":"demo"}]"#;

/// Serves `/data/users.json`; anything else gets wiremock's default 404
async fn users_json_server() -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/users.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/json")
                .set_body_string(USERS_JSON),
        )
        .mount(&mock_server)
        .await;

    mock_server
}

#[tokio::test]
async fn test_saves_available_and_skips_missing() {
    let mock_server = users_json_server().await;
    let dir = tempdir().unwrap();
    let client = AssetClient::new(mock_server.uri()).unwrap();

    let requests = vec![AssetRequest::users_json(), AssetRequest::samples_csv()];
    let summary = client.download_all(&requests, dir.path()).await.unwrap();

    assert_eq!(summary.saved, vec![dir.path().join("users.json")]);
    assert_eq!(summary.failed, vec!["rubber_samples.csv".to_string()]);
    assert_eq!(
        std::fs::read_to_string(dir.path().join("users.json")).unwrap(),
        USERS_JSON
    );
    assert!(!dir.path().join("rubber_samples.csv").exists());
}

#[tokio::test]
async fn test_server_errors_are_swallowed() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(7)
        .mount(&mock_server)
        .await;

    let dir = tempdir().unwrap();
    let client = AssetClient::new(mock_server.uri()).unwrap();

    let requests = asset_requests(&sample_uploads());
    let summary = client.download_all(&requests, dir.path()).await.unwrap();

    assert!(summary.saved.is_empty());
    assert_eq!(summary.failed.len(), 7);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_single_download_reports_status_error() {
    let mock_server = users_json_server().await;
    let dir = tempdir().unwrap();
    let client = AssetClient::new(mock_server.uri()).unwrap();

    let err = client
        .download(&AssetRequest::samples_csv(), dir.path())
        .await
        .unwrap_err();
    assert!(matches!(err, GradingError::Http(_)));
}
