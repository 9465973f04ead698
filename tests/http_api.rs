//! HTTP API Scenario Tests
//!
//! Drives the real router over an in-memory store, one `oneshot` request at
//! a time. Covers the login flow, the token gate, the validator chains as
//! seen from the wire, and the CRUD status-code contract.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use talkerd::http_server::build_router;
use talkerd::store::{MemoryStore, TalkerStore};
use tower::ServiceExt;

// =============================================================================
// Helper Functions
// =============================================================================

const TOKEN: &str = "0123456789abcdef";

fn app(store: &Arc<MemoryStore>) -> Router {
    build_router(Arc::clone(store) as Arc<dyn TalkerStore>)
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(path: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(path);
    if let Some(token) = token {
        builder = builder.header("authorization", token);
    }
    builder.body(Body::empty()).unwrap()
}

fn with_json(method: &str, path: &str, token: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", token);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn delete(path: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("DELETE").uri(path);
    if let Some(token) = token {
        builder = builder.header("authorization", token);
    }
    builder.body(Body::empty()).unwrap()
}

fn talker_body(name: &str) -> Value {
    json!({
        "name": name,
        "age": 30,
        "talk": { "watchedAt": "01/01/2020", "rate": 4 }
    })
}

// =============================================================================
// Liveness
// =============================================================================

#[tokio::test]
async fn test_root_ping_and_health() {
    let store = Arc::new(MemoryStore::new());

    let (status, body) = send(app(&store), get("/", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);

    let (status, body) = send(app(&store), get("/health", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

// =============================================================================
// Login
// =============================================================================

#[tokio::test]
async fn test_login_issues_16_char_token() {
    let store = Arc::new(MemoryStore::new());
    let body = json!({ "email": "a@a.com", "password": "123456" });

    let (status, body) = send(app(&store), with_json("POST", "/login", None, &body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["token"].as_str().unwrap().len(), 16);
}

#[tokio::test]
async fn test_login_bad_email_is_400_with_format_message() {
    let store = Arc::new(MemoryStore::new());
    let body = json!({ "email": "bad", "password": "123456" });

    let (status, body) = send(app(&store), with_json("POST", "/login", None, &body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "The \"email\" must have the format \"email@email.com\""
    );
}

#[tokio::test]
async fn test_login_missing_password_is_400() {
    let store = Arc::new(MemoryStore::new());
    let body = json!({ "email": "a@a.com" });

    let (status, body) = send(app(&store), with_json("POST", "/login", None, &body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "The \"password\" field is required");
}

// =============================================================================
// Token gate
// =============================================================================

#[tokio::test]
async fn test_protected_routes_require_a_token() {
    let store = Arc::new(MemoryStore::new());

    for request in [
        with_json("POST", "/talker", None, &talker_body("Ada")),
        with_json("PUT", "/talker/1", None, &talker_body("Ada")),
        delete("/talker/1", None),
        get("/talker/search?name=Ada", None),
    ] {
        let (status, body) = send(app(&store), request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "Token not found");
    }
}

#[tokio::test]
async fn test_wrong_length_token_is_invalid() {
    let store = Arc::new(MemoryStore::new());

    let (status, body) = send(
        app(&store),
        with_json("POST", "/talker", Some("short"), &talker_body("Ada")),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid token");
}

#[tokio::test]
async fn test_token_checked_before_body_validation() {
    let store = Arc::new(MemoryStore::new());

    // Invalid token and invalid body: the token error wins
    let (status, body) = send(
        app(&store),
        with_json("POST", "/talker", Some("bad"), &json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid token");
}

#[tokio::test]
async fn test_list_and_get_have_no_auth_gate() {
    let store = Arc::new(MemoryStore::new());

    let (status, body) = send(app(&store), get("/talker", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn test_create_returns_201_with_ordinal_id() {
    let store = Arc::new(MemoryStore::new());

    let (status, body) = send(
        app(&store),
        with_json("POST", "/talker", Some(TOKEN), &talker_body("Ada Lovelace")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Ada Lovelace");
    assert_eq!(body["talk"]["watchedAt"], "01/01/2020");

    // A subsequent get returns the same fields
    let (status, fetched) = send(app(&store), get("/talker/1", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, body);

    // And the list contains exactly that record
    let (_, list) = send(app(&store), get("/talker", None)).await;
    assert_eq!(list, json!([fetched]));
}

#[tokio::test]
async fn test_create_underage_is_rejected() {
    let store = Arc::new(MemoryStore::new());
    let mut body = talker_body("Ada");
    body["age"] = json!(17);

    let (status, body) = send(
        app(&store),
        with_json("POST", "/talker", Some(TOKEN), &body),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "The talker must be at least 18 years old");
}

#[tokio::test]
async fn test_create_age_zero_reports_required() {
    let store = Arc::new(MemoryStore::new());
    let mut body = talker_body("Ada");
    body["age"] = json!(0);

    let (status, body) = send(
        app(&store),
        with_json("POST", "/talker", Some(TOKEN), &body),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "The \"age\" field is required");
}

// =============================================================================
// Get by id
// =============================================================================

#[tokio::test]
async fn test_get_unknown_id_is_404() {
    let store = Arc::new(MemoryStore::new());

    let (status, body) = send(app(&store), get("/talker/99", None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Talker not found");

    // Non-numeric ids also 404
    let (status, _) = send(app(&store), get("/talker/abc", None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Update
// =============================================================================

#[tokio::test]
async fn test_update_replaces_record_and_keeps_id() {
    let store = Arc::new(MemoryStore::new());
    send(
        app(&store),
        with_json("POST", "/talker", Some(TOKEN), &talker_body("Ada")),
    )
    .await;

    let (status, body) = send(
        app(&store),
        with_json(
            "PUT",
            "/talker/1",
            Some(TOKEN),
            &talker_body("Ada Lovelace"),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Ada Lovelace");
}

#[tokio::test]
async fn test_update_unknown_id_is_400() {
    let store = Arc::new(MemoryStore::new());

    let (status, body) = send(
        app(&store),
        with_json("PUT", "/talker/9", Some(TOKEN), &talker_body("Ghost")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Talker does not exist");
}

#[tokio::test]
async fn test_update_runs_the_validator_chain() {
    let store = Arc::new(MemoryStore::new());
    send(
        app(&store),
        with_json("POST", "/talker", Some(TOKEN), &talker_body("Ada")),
    )
    .await;

    let mut body = talker_body("Ada");
    body["talk"]["rate"] = json!(0);
    let (status, body) = send(
        app(&store),
        with_json("PUT", "/talker/1", Some(TOKEN), &body),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "The \"rate\" field must be an integer from 1 to 5"
    );
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn test_delete_then_get_is_404() {
    let store = Arc::new(MemoryStore::new());
    send(
        app(&store),
        with_json("POST", "/talker", Some(TOKEN), &talker_body("Ada")),
    )
    .await;

    let (status, body) = send(app(&store), delete("/talker/1", Some(TOKEN))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Talker deleted successfully");

    let (status, _) = send(app(&store), get("/talker/1", None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_unknown_id_is_400() {
    let store = Arc::new(MemoryStore::new());

    let (status, body) = send(app(&store), delete("/talker/7", Some(TOKEN))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Talker does not exist");
}

// =============================================================================
// Search
// =============================================================================

#[tokio::test]
async fn test_search_semantics_over_the_wire() {
    let store = Arc::new(MemoryStore::new());
    for name in ["Ada Lovelace", "Grace Hopper"] {
        send(
            app(&store),
            with_json("POST", "/talker", Some(TOKEN), &talker_body(name)),
        )
        .await;
    }

    // Empty query: full collection
    let (status, body) = send(app(&store), get("/talker/search", Some(TOKEN))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    // Matching query
    let (status, body) = send(
        app(&store),
        get("/talker/search?name=Grace", Some(TOKEN)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["name"], "Grace Hopper");

    // Zero matches: empty array, still 200
    let (status, body) = send(
        app(&store),
        get("/talker/search?name=Turing", Some(TOKEN)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

// =============================================================================
// Storage faults
// =============================================================================

#[tokio::test]
async fn test_store_fault_surfaces_as_500() {
    let store = Arc::new(MemoryStore::new());
    store.set_failing(true);

    let (status, _) = send(app(&store), get("/talker", None)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}
