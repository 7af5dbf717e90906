//! Health endpoint tests.

mod common;

use http::StatusCode;

use common::TestApp;

#[tokio::test]
async fn test_health_reports_degraded_without_database() {
    let app = TestApp::lazy();

    let response = app.request("GET", "/api/health", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "degraded");
    assert_eq!(response.body["database"], "unreachable");
}

#[tokio::test]
async fn test_health_reports_ok_with_database() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let response = app.request("GET", "/api/health", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["database"], "connected");
    assert!(response.body["version"].is_string());
}
