//! End-to-end tests for upload metadata endpoints.

mod common;

use http::StatusCode;

use common::{TestApp, create_person, missing_id, unique_suffix};

fn upload_payload(parent_id: &str, model: &str) -> serde_json::Value {
    serde_json::json!({
        "fileName": "warrant.pdf",
        "fileURL": "https://files.example/warrant.pdf",
        "mimeType": "application/pdf",
        "associatedModel": model,
        "associatedId": parent_id
    })
}

#[tokio::test]
async fn test_unknown_associated_model_is_rejected() {
    let app = TestApp::lazy();

    let response = app
        .request(
            "POST",
            "/api/uploads",
            Some(upload_payload(&missing_id(), "Folder")),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_listing_requires_parent_parameter() {
    let app = TestApp::lazy();

    let response = app.request("GET", "/api/uploads", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");

    let response = app.request("GET", "/api/uploads?parent=bogus", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_and_list_by_parent() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let person_id = create_person(&app, &unique_suffix()).await;

    let response = app
        .request(
            "POST",
            "/api/uploads",
            Some(upload_payload(&person_id, "Person")),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    assert_eq!(response.body["fileURL"], "https://files.example/warrant.pdf");
    assert_eq!(response.body["associatedModel"], "Person");
    let upload_id = response.body["id"].as_str().expect("id").to_string();

    let response = app
        .request("GET", &format!("/api/uploads?parent={person_id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let uploads = response.body.as_array().expect("array");
    assert_eq!(uploads.len(), 1);
    assert_eq!(uploads[0]["id"], upload_id.as_str());
}

#[tokio::test]
async fn test_upload_may_reference_absent_parent() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    // parent existence is never checked
    let response = app
        .request(
            "POST",
            "/api/uploads",
            Some(upload_payload(&missing_id(), "Case")),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_uploads_survive_parent_deletion() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let person_id = create_person(&app, &unique_suffix()).await;
    let response = app
        .request(
            "POST",
            "/api/uploads",
            Some(upload_payload(&person_id, "Person")),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    let upload_id = response.body["id"].as_str().expect("id").to_string();

    let response = app
        .request("DELETE", &format!("/api/persons/{person_id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", &format!("/api/uploads/{upload_id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_delete_upload_then_fetch_is_not_found() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let person_id = create_person(&app, &unique_suffix()).await;
    let response = app
        .request(
            "POST",
            "/api/uploads",
            Some(upload_payload(&person_id, "Person")),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    let upload_id = response.body["id"].as_str().expect("id").to_string();

    let response = app
        .request("DELETE", &format!("/api/uploads/{upload_id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", &format!("/api/uploads/{upload_id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
