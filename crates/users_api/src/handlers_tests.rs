//! Tests for handlers module

use super::*;
use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use tracing_test::traced_test;

use crate::routes::create_router;

/// Helper function to create a router over a fresh seeded store
fn test_app() -> Router {
    create_router(AppState::seeded().unwrap())
}

fn ivan() -> Value {
    json!({
        "firstName": "Ivan",
        "lastName": "Ivanov",
        "dayOfBirth": "2000-01-01",
        "email": "asdas@asdas.tr"
    })
}

struct TestResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl TestResponse {
    fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("Response body should be JSON")
    }
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> TestResponse {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();

    TestResponse {
        status,
        headers,
        body,
    }
}

// ============================================================================
// Health Check Tests
// ============================================================================

/// Test that health check handler returns proper JSON response
#[tokio::test]
async fn test_health_check_returns_json() {
    let response = health_check().await;

    assert_eq!(response.0.status, "healthy");
    assert_eq!(response.0.version, Some(env!("CARGO_PKG_VERSION").to_string()));
    assert!(chrono::DateTime::parse_from_rfc3339(&response.0.timestamp).is_ok());
    assert!(response.0.error.is_none());
}

// ============================================================================
// List Tests
// ============================================================================

#[tokio::test]
async fn test_list_users_reports_seed_total() {
    let app = test_app();

    let response = send(&app, "GET", "/api/users", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let json = response.json();
    assert_eq!(json["page"]["totalElements"], 20);
    assert_eq!(json["page"]["size"], 20);
    assert_eq!(json["page"]["number"], 0);
    assert_eq!(json["page"]["totalPages"], 1);
    assert_eq!(json["_embedded"]["users"].as_array().unwrap().len(), 20);
    assert_eq!(json["_embedded"]["users"][0]["id"], 1);
}

#[tokio::test]
async fn test_list_users_paging() {
    let app = test_app();

    let response = send(&app, "GET", "/api/users?page=1&size=15", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let json = response.json();
    let users = json["_embedded"]["users"].as_array().unwrap();
    assert_eq!(users.len(), 5);
    assert_eq!(users[0]["id"], 16);
    assert_eq!(json["page"]["totalPages"], 2);
}

#[tokio::test]
async fn test_list_users_page_past_end_is_empty() {
    let app = test_app();

    let response = send(&app, "GET", "/api/users?page=5&size=10", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let json = response.json();
    assert!(json["_embedded"]["users"].as_array().unwrap().is_empty());
    assert_eq!(json["page"]["totalElements"], 20);
    assert_eq!(json["page"]["totalPages"], 2);
    assert_eq!(json["page"]["number"], 5);
}

#[tokio::test]
async fn test_list_users_invalid_paging() {
    let app = test_app();

    let response = send(&app, "GET", "/api/users?size=0", None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"]["details"]["field"], "size");
}

#[tokio::test]
async fn test_list_users_is_idempotent() {
    let app = test_app();

    for _ in 0..3 {
        let response = send(&app, "GET", "/api/users", None).await;
        assert_eq!(response.json()["page"]["totalElements"], 20);
    }
}

// ============================================================================
// Get Tests
// ============================================================================

#[tokio::test]
async fn test_get_user_existing() {
    let app = test_app();

    let response = send(&app, "GET", "/api/users/1", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let json = response.json();
    assert_eq!(json["id"], 1);
    assert!(json["firstName"].is_string());
    assert!(json["dayOfBirth"].is_string());
}

#[tokio::test]
async fn test_get_user_one_past_seed_not_found() {
    let app = test_app();

    let response = send(&app, "GET", "/api/users/21", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json()["error"]["code"], "NotFound");
}

#[tokio::test]
async fn test_get_user_invalid_id() {
    let app = test_app();

    for uri in ["/api/users/0", "/api/users/abc", "/api/users/-3"] {
        let response = send(&app, "GET", uri, None).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(response.json()["error"]["code"], "ValidationError");
    }
}

// ============================================================================
// Create Tests
// ============================================================================

/// Verifies that a valid creation request returns 201 Created with the
/// payload echoed back and a fresh id above the seed range.
#[tokio::test]
async fn test_create_user_success() {
    let app = test_app();

    let response = send(&app, "POST", "/api/users", Some(ivan())).await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(
        response.headers.get(header::LOCATION).unwrap(),
        "/api/users/21"
    );

    let mut json = response.json();
    assert_eq!(json["id"], 21);
    json.as_object_mut().unwrap().remove("id");
    assert_eq!(json, ivan());
}

/// Accepted payloads come back exactly as sent, padding and all
#[tokio::test]
async fn test_create_user_echoes_fields_verbatim() {
    let app = test_app();
    let body = json!({
        "firstName": " Anna-Maria ",
        "lastName": "O'Neil\t",
        "dayOfBirth": "1900-02-28",
        "email": "anna.maria+test@mail.example.org"
    });

    let response = send(&app, "POST", "/api/users", Some(body.clone())).await;

    assert_eq!(response.status, StatusCode::CREATED);
    let mut json = response.json();
    json.as_object_mut().unwrap().remove("id");
    assert_eq!(json, body);
}

#[tokio::test]
async fn test_create_user_rejects_values_that_would_not_echo() {
    let app = test_app();

    for (field, value) in [
        ("email", " asdas@asdas.tr"),
        ("dayOfBirth", "2000-1-1"),
        ("dayOfBirth", " 2000-01-01"),
    ] {
        let mut body = ivan();
        body[field] = json!(value);

        let response = send(&app, "POST", "/api/users", Some(body)).await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{}={:?}", field, value);
        assert_eq!(response.json()["error"]["details"]["field"], field);
    }
}

#[tokio::test]
async fn test_create_user_ids_keep_increasing() {
    let app = test_app();

    let first = send(&app, "POST", "/api/users", Some(ivan())).await.json();
    let second = send(&app, "POST", "/api/users", Some(ivan())).await.json();

    assert!(second["id"].as_u64().unwrap() > first["id"].as_u64().unwrap());

    let list = send(&app, "GET", "/api/users", None).await.json();
    assert_eq!(list["page"]["totalElements"], 22);
}

#[tokio::test]
async fn test_create_user_ignores_body_id() {
    let app = test_app();
    let mut body = ivan();
    body["id"] = json!(5);

    let response = send(&app, "POST", "/api/users", Some(body)).await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.json()["id"], 21);
}

/// Missing fields are reported as 400 with the field name, not axum's 422
#[tokio::test]
async fn test_create_user_missing_field() {
    let app = test_app();
    let mut body = ivan();
    body.as_object_mut().unwrap().remove("email");

    let response = send(&app, "POST", "/api/users", Some(body)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let json = response.json();
    assert_eq!(json["error"]["code"], "ValidationError");
    assert_eq!(json["error"]["details"]["field"], "email");
}

#[tokio::test]
async fn test_create_user_bad_date() {
    let app = test_app();
    let mut body = ivan();
    body["dayOfBirth"] = json!("2000-13-45");

    let response = send(&app, "POST", "/api/users", Some(body)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"]["details"]["field"], "dayOfBirth");
}

#[tokio::test]
async fn test_create_user_malformed_json() {
    let app = test_app();
    let request = Request::builder()
        .method("POST")
        .uri("/api/users")
        .header("content-type", "application/json")
        .body(Body::from("{\"firstName\": "))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_user_without_content_type() {
    let app = test_app();
    let request = Request::builder()
        .method("POST")
        .uri("/api/users")
        .body(Body::from(serde_json::to_string(&ivan()).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_user_unknown_field() {
    let app = test_app();
    let mut body = ivan();
    body["nickname"] = json!("Vanya");

    let response = send(&app, "POST", "/api/users", Some(body)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

// ============================================================================
// Update Tests
// ============================================================================

#[tokio::test]
async fn test_update_existing_user() {
    let app = test_app();

    let response = send(&app, "PUT", "/api/users/1", Some(ivan())).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.headers.get(header::LOCATION).is_none());
    let json = response.json();
    assert_eq!(json["id"], 1);
    assert_eq!(json["firstName"], "Ivan");
    assert_eq!(json["email"], "asdas@asdas.tr");

    let fetched = send(&app, "GET", "/api/users/1", None).await.json();
    assert_eq!(fetched, json);
}

#[tokio::test]
async fn test_update_absent_user_creates_it() {
    let app = test_app();

    let response = send(&app, "PUT", "/api/users/25", Some(ivan())).await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(
        response.headers.get(header::LOCATION).unwrap(),
        "/api/users/25"
    );
    let json = response.json();
    assert_eq!(json["id"], 25);
    assert_eq!(json["firstName"], "Ivan");

    let next = send(&app, "POST", "/api/users", Some(ivan())).await.json();
    assert_eq!(next["id"], 26);
}

/// An explicit id at the top of the range leaves nothing for POST to assign
#[tokio::test]
async fn test_create_after_largest_explicit_id_is_server_error() {
    let app = test_app();
    let max_uri = format!("/api/users/{}", u64::MAX);

    let response = send(&app, "PUT", &max_uri, Some(ivan())).await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.json()["id"], u64::MAX);

    let response = send(&app, "POST", "/api/users", Some(ivan())).await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json()["error"]["code"], "InternalError");

    // The service keeps answering and no id-0 user appeared
    assert_eq!(send(&app, "GET", "/api/users/1", None).await.status, StatusCode::OK);
    let list = send(&app, "GET", "/api/users", None).await.json();
    assert_eq!(list["page"]["totalElements"], 21);
}

#[tokio::test]
async fn test_update_path_id_above_range_is_bad_request() {
    let app = test_app();

    let response = send(&app, "PUT", "/api/users/18446744073709551616", Some(ivan())).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_with_mismatched_body_id() {
    let app = test_app();
    let mut body = ivan();
    body["id"] = json!(2);

    let response = send(&app, "PUT", "/api/users/1", Some(body)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"]["details"]["field"], "id");
}

#[tokio::test]
async fn test_update_deleted_user_conflicts() {
    let app = test_app();
    send(&app, "DELETE", "/api/users/4", None).await;

    let response = send(&app, "PUT", "/api/users/4", Some(ivan())).await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.json()["error"]["code"], "Conflict");
}

#[tokio::test]
async fn test_update_invalid_payload_leaves_user_untouched() {
    let app = test_app();
    let before = send(&app, "GET", "/api/users/2", None).await.json();
    let mut body = ivan();
    body["email"] = json!("broken");

    let response = send(&app, "PUT", "/api/users/2", Some(body)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let after = send(&app, "GET", "/api/users/2", None).await.json();
    assert_eq!(before, after);
}

// ============================================================================
// Delete Tests
// ============================================================================

#[tokio::test]
async fn test_delete_existing_user() {
    let app = test_app();

    let response = send(&app, "DELETE", "/api/users/1", None).await;

    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert!(response.body.is_empty());

    let fetched = send(&app, "GET", "/api/users/1", None).await;
    assert_eq!(fetched.status, StatusCode::NOT_FOUND);

    let list = send(&app, "GET", "/api/users", None).await.json();
    assert_eq!(list["page"]["totalElements"], 19);
}

#[tokio::test]
async fn test_delete_absent_user_not_found() {
    let app = test_app();

    let response = send(&app, "DELETE", "/api/users/21", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json()["error"]["code"], "NotFound");
}

// ============================================================================
// Request Id Tests
// ============================================================================

#[tokio::test]
#[traced_test]
async fn test_handler_logs_carry_request_id() {
    let app = test_app();
    let request = Request::builder()
        .method("DELETE")
        .uri("/api/users/3")
        .header("x-request-id", "req-delete-3")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    logs_assert(|lines: &[&str]| {
        lines
            .iter()
            .find(|line| line.contains("User deleted via DELETE"))
            .filter(|line| line.contains("req-delete-3"))
            .map(|_| ())
            .ok_or_else(|| "delete log line without request id".to_string())
    });
}
