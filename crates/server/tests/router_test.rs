//! End-to-end router tests against a temporary data directory.

#![allow(clippy::unwrap_used)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use metrics_exporter_prometheus::PrometheusBuilder;
use pretty_assertions::assert_eq;
use tempfile::TempDir;
use tower::ServiceExt;
use vbump_application::VersionStore;
use vbump_infrastructure::FileVersionRepository;
use vbump_server::{AppState, router};

/// Builds a router backed by a fresh temp directory.
fn test_router() -> (Router, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let repository = FileVersionRepository::new(dir.path());
    // Not installed globally, so tests stay independent of each other.
    let handle = PrometheusBuilder::new().build_recorder().handle();
    let app = router(AppState::new(VersionStore::new(repository), handle));
    (app, dir)
}

async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _dir) = test_router();

    let (status, body) = send(&app, "GET", "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "hello from vbump!");
}

#[tokio::test]
async fn test_first_patch_bump_on_new_project() {
    let (app, dir) = test_router();

    let (status, body) = send(&app, "POST", "/patch/proj").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "0.0.1");
    let stored = std::fs::read_to_string(dir.path().join("proj")).unwrap();
    assert_eq!(stored, "0.0.1");
}

#[tokio::test]
async fn test_bump_sequence_across_elements() {
    let (app, _dir) = test_router();

    send(&app, "POST", "/version/proj/2.5.9").await;
    let (_, body) = send(&app, "POST", "/minor/proj").await;
    assert_eq!(body, "2.6.0");

    let (_, body) = send(&app, "POST", "/major/proj").await;
    assert_eq!(body, "3.0.0");

    let (status, body) = send(&app, "GET", "/version/proj").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "3.0.0");
}

#[tokio::test]
async fn test_get_version_on_unknown_project_is_404() {
    let (app, _dir) = test_router();

    let (status, body) = send(&app, "GET", "/version/new-project").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("not_found"), "unexpected body: {body}");
}

#[tokio::test]
async fn test_set_version_rejects_invalid_text() {
    let (app, dir) = test_router();

    let (status, body) = send(&app, "POST", "/version/proj/abc").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.contains("invalid_format"), "unexpected body: {body}");
    assert!(!dir.path().join("proj").exists());
}

#[tokio::test]
async fn test_set_version_then_bump_major() {
    let (app, _dir) = test_router();

    let (status, body) = send(&app, "POST", "/version/proj/1.0.0").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "1.0.0");

    let (_, body) = send(&app, "POST", "/major/proj").await;
    assert_eq!(body, "2.0.0");
}

#[tokio::test]
async fn test_set_version_moves_backwards() {
    let (app, _dir) = test_router();

    send(&app, "POST", "/version/proj/5.2.3").await;
    let (status, body) = send(&app, "POST", "/version/proj/1.0.0").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "1.0.0");

    let (_, body) = send(&app, "GET", "/version/proj").await;
    assert_eq!(body, "1.0.0");
}

#[tokio::test]
async fn test_transient_minor_persists_nothing() {
    let (app, dir) = test_router();

    let (status, body) = send(&app, "POST", "/transient/minor/3.1.4").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "3.2.0");
    let entries = std::fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(entries, 0, "transient bumps must not create records");
}

#[tokio::test]
async fn test_transient_patch_bump() {
    let (app, _dir) = test_router();

    let (_, body) = send(&app, "POST", "/transient/patch/3.1.4").await;

    assert_eq!(body, "3.1.5");
}

#[tokio::test]
async fn test_transient_bump_rejects_invalid_text() {
    let (app, _dir) = test_router();

    let (status, body) = send(&app, "POST", "/transient/minor/nope").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.contains("invalid_format"), "unexpected body: {body}");
}

#[tokio::test]
async fn test_corrupt_record_is_an_internal_error() {
    let (app, dir) = test_router();
    std::fs::write(dir.path().join("proj"), "garbage").unwrap();

    let (status, body) = send(&app, "GET", "/version/proj").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("corrupt_state"), "unexpected body: {body}");
}

#[tokio::test]
async fn test_metrics_endpoint_renders() {
    let (app, _dir) = test_router();

    let (status, _body) = send(&app, "GET", "/metrics").await;

    assert_eq!(status, StatusCode::OK);
}
