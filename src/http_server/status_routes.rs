//! # Status Routes
//!
//! Liveness ping at `/` (empty 200 body) and a small JSON health report.

use axum::{http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};

/// Status routes
pub fn status_routes() -> Router {
    Router::new()
        .route("/", get(ping_handler))
        .route("/health", get(health_handler))
}

async fn ping_handler() -> StatusCode {
    StatusCode::OK
}

async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "talkerd",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
