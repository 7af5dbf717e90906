//! End-to-end tests for the person endpoints.

mod common;

use http::StatusCode;

use common::{TestApp, create_person, missing_id, person_payload, unique_suffix};

#[tokio::test]
async fn test_malformed_id_is_rejected_before_store_access() {
    // lazy pool: these paths must short-circuit at the validation gate
    let app = TestApp::lazy();

    for method in ["GET", "PUT", "DELETE"] {
        let body = (method == "PUT").then(|| serde_json::json!({}));
        let response = app.request(method, "/api/persons/not-an-id", body).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{method}");
        assert_eq!(response.body["error"], "VALIDATION_ERROR");
    }
}

#[tokio::test]
async fn test_missing_required_group_is_rejected() {
    let app = TestApp::lazy();

    let mut payload = person_payload("1234567890");
    payload.as_object_mut().unwrap().remove("contactInfo");

    let response = app.request("POST", "/api/persons", Some(payload)).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_empty_required_field_is_rejected() {
    let app = TestApp::lazy();

    let mut payload = person_payload("1234567890");
    payload["personalInfo"]["firstName"] = serde_json::json!("");

    let response = app.request("POST", "/api/persons", Some(payload)).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(
        response.body["message"]
            .as_str()
            .unwrap_or_default()
            .contains("firstName"),
        "message should name the offending field: {:?}",
        response.body
    );
}

#[tokio::test]
async fn test_search_requires_name_parameter() {
    let app = TestApp::lazy();

    let response = app.request("GET", "/api/persons/search", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app.request("GET", "/api/persons/search?name=", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_and_fetch_person() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let national_id = unique_suffix();
    let id = create_person(&app, &national_id).await;

    let response = app.request("GET", &format!("/api/persons/{id}"), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], id.as_str());
    assert_eq!(response.body["personalInfo"]["nationalId"], national_id.as_str());
    assert_eq!(response.body["personalInfo"]["firstName"], "علي");
    assert!(response.body["createdAt"].is_string());
}

#[tokio::test]
async fn test_duplicate_national_id_conflicts() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let national_id = unique_suffix();
    create_person(&app, &national_id).await;

    let response = app
        .request("POST", "/api/persons", Some(person_payload(&national_id)))
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], "CONFLICT");
}

#[tokio::test]
async fn test_get_missing_person_is_not_found() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let response = app
        .request("GET", &format!("/api/persons/{}", missing_id()), None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_update_replaces_group_wholesale() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let id = create_person(&app, &unique_suffix()).await;

    // replacement group omits the optional workAddress the group could carry
    let patch = serde_json::json!({
        "professionalInfo": {
            "profession": "blacksmith",
            "academicQualification": "secondary",
            "fatherProfession": "مزارع",
            "motherProfession": "ربة منزل"
        }
    });

    let response = app
        .request("PUT", &format!("/api/persons/{id}"), Some(patch))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["professionalInfo"]["profession"], "blacksmith");
    // untouched group survives
    assert_eq!(response.body["personalInfo"]["firstName"], "علي");
}

#[tokio::test]
async fn test_update_missing_person_is_not_found() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let response = app
        .request(
            "PUT",
            &format!("/api/persons/{}", missing_id()),
            Some(serde_json::json!({})),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_person_then_fetch_is_not_found() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let id = create_person(&app, &unique_suffix()).await;

    let response = app
        .request("DELETE", &format!("/api/persons/{id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("GET", &format!("/api/persons/{id}"), None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    // a second delete reports not found as well
    let response = app
        .request("DELETE", &format!("/api/persons/{id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_envelope_is_internally_consistent() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    // ensure at least one record exists
    create_person(&app, &unique_suffix()).await;

    let response = app.request("GET", "/api/persons?page=1&limit=5", None).await;
    assert_eq!(response.status, StatusCode::OK);

    let body = &response.body;
    let docs = body["docs"].as_array().expect("docs array");
    let total_docs = body["totalDocs"].as_u64().expect("totalDocs");
    let limit = body["limit"].as_u64().expect("limit");
    let total_pages = body["totalPages"].as_u64().expect("totalPages");

    assert_eq!(limit, 5);
    assert!(docs.len() as u64 <= limit);
    assert_eq!(total_pages, total_docs.div_ceil(limit));
    assert_eq!(body["page"], 1);
    assert_eq!(body["hasPrevPage"], false);
    assert!(body["prevPage"].is_null());
    assert_eq!(
        body["hasNextPage"].as_bool().expect("hasNextPage"),
        limit < total_docs
    );
}

#[tokio::test]
async fn test_list_ignores_garbage_pagination_params() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let response = app
        .request("GET", "/api/persons?page=abc&limit=0", None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["page"], 1);
    assert_eq!(response.body["limit"], 10);
}

#[tokio::test]
async fn test_page_beyond_end_returns_empty_docs() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    create_person(&app, &unique_suffix()).await;

    let response = app
        .request("GET", "/api/persons?page=100000&limit=100", None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["docs"].as_array().map(Vec::len), Some(0));
    assert_eq!(response.body["page"], 100000);
    assert_eq!(response.body["hasNextPage"], false);
}

#[tokio::test]
async fn test_extreme_page_number_is_handled() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    create_person(&app, &unique_suffix()).await;

    // u64::MAX must not overflow the offset arithmetic
    let response = app
        .request(
            "GET",
            "/api/persons?page=18446744073709551615&limit=100",
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["docs"].as_array().map(Vec::len), Some(0));
    assert_eq!(response.body["hasNextPage"], false);
    assert!(response.body["nextPage"].is_null());
}

#[tokio::test]
async fn test_search_finds_person_by_name_part() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let family_name = unique_suffix();
    let mut payload = person_payload(&unique_suffix());
    payload["personalInfo"]["familyName"] = serde_json::json!(family_name);

    let response = app.request("POST", "/api/persons", Some(payload)).await;
    assert_eq!(response.status, StatusCode::CREATED);

    // substring, case-insensitive
    let needle = family_name[4..20].to_uppercase();
    let response = app
        .request("GET", &format!("/api/persons/search?name={needle}"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let results = response.body.as_array().expect("array");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["personalInfo"]["familyName"], family_name.as_str());
}

#[tokio::test]
async fn test_search_treats_wildcards_literally() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    // hex family name contains neither '%' nor '_'
    let family_name = unique_suffix();
    let mut payload = person_payload(&unique_suffix());
    payload["personalInfo"]["familyName"] = serde_json::json!(family_name);

    let response = app.request("POST", "/api/persons", Some(payload)).await;
    assert_eq!(response.status, StatusCode::CREATED);

    // '_' and '%' (encoded as %25) are literal characters, not wildcards
    for needle in ["_", "%25"] {
        let response = app
            .request("GET", &format!("/api/persons/search?name={needle}"), None)
            .await;
        assert_eq!(response.status, StatusCode::OK);

        let results = response.body.as_array().expect("array");
        assert!(
            results
                .iter()
                .all(|p| p["personalInfo"]["familyName"] != family_name.as_str()),
            "wildcard search must not match '{family_name}'"
        );
    }
}

#[tokio::test]
async fn test_national_id_lookup() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let national_id = unique_suffix();
    let id = create_person(&app, &national_id).await;

    let response = app
        .request("GET", &format!("/api/persons/national-id/{national_id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], id.as_str());

    let response = app
        .request(
            "GET",
            &format!("/api/persons/national-id/{}", unique_suffix()),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_resolved_person_degrades_unknown_values_to_null() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    // values that no option set can contain
    let mut payload = person_payload(&unique_suffix());
    payload["personalInfo"]["nationality"] = serde_json::json!(unique_suffix());
    payload["personalInfo"]["placeOfBirth"] = serde_json::json!(unique_suffix());

    let response = app.request("POST", "/api/persons", Some(payload)).await;
    assert_eq!(response.status, StatusCode::CREATED);
    let id = response.body["id"].as_str().expect("id").to_string();

    let response = app
        .request("GET", &format!("/api/persons/{id}/resolved"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], id.as_str());
    assert!(response.body["resolved"].is_object());
    assert!(response.body["resolved"]["nationality"].is_null());
    assert!(response.body["resolved"]["birthCity"].is_null());
}
