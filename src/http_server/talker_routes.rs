//! # Talker Routes
//!
//! CRUD and search over the talker collection. Mutating routes and search
//! are gated by the token shape check; plain list and get-by-id are open.
//! Create and update share one validator chain, run after the token gate.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;

use crate::auth::check_token;
use crate::model::{Talker, TalkerPayload};
use crate::service::TalkerService;
use crate::validation::validate_talker;

use super::response::Rejection;

/// Shared state for the talker routes
#[derive(Debug)]
pub struct TalkerState {
    pub service: TalkerService,
}

impl TalkerState {
    /// Create state over the given service
    pub fn new(service: TalkerService) -> Self {
        Self { service }
    }
}

/// Talker routes with shared state
pub fn talker_routes(state: Arc<TalkerState>) -> Router {
    Router::new()
        .route("/talker", get(list_handler).post(create_handler))
        .route("/talker/search", get(search_handler))
        .route(
            "/talker/:id",
            get(get_handler).put(update_handler).delete(delete_handler),
        )
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct DeletedResponse {
    message: String,
}

fn authorization(headers: &HeaderMap) -> Option<&str> {
    headers.get("authorization").and_then(|v| v.to_str().ok())
}

// ==================
// Handlers
// ==================

/// GET /talker — whole collection, no auth gate
async fn list_handler(
    State(state): State<Arc<TalkerState>>,
) -> Result<Json<Vec<Talker>>, Rejection> {
    Ok(Json(state.service.list()?))
}

/// GET /talker/search?name= — token-gated substring search
async fn search_handler(
    State(state): State<Arc<TalkerState>>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<Talker>>, Rejection> {
    check_token(authorization(&headers))?;
    let matches = state.service.search(params.get("name").map(String::as_str))?;
    Ok(Json(matches))
}

/// GET /talker/:id — direct lookup, no auth gate
async fn get_handler(
    State(state): State<Arc<TalkerState>>,
    Path(id): Path<String>,
) -> Result<Json<Talker>, Rejection> {
    Ok(Json(state.service.get(&id)?))
}

/// POST /talker — token gate, then the full validator chain
async fn create_handler(
    State(state): State<Arc<TalkerState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Talker>), Rejection> {
    check_token(authorization(&headers))?;
    validate_talker(&body)?;
    let talker = state.service.create(TalkerPayload::from_validated(&body))?;
    Ok((StatusCode::CREATED, Json(talker)))
}

/// PUT /talker/:id — same chain as create; keeps the path id
async fn update_handler(
    State(state): State<Arc<TalkerState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Talker>, Rejection> {
    check_token(authorization(&headers))?;
    validate_talker(&body)?;
    let talker = state
        .service
        .update(&id, TalkerPayload::from_validated(&body))?;
    Ok(Json(talker))
}

/// DELETE /talker/:id — token gate only
async fn delete_handler(
    State(state): State<Arc<TalkerState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<DeletedResponse>, Rejection> {
    check_token(authorization(&headers))?;
    state.service.delete(&id)?;
    Ok(Json(DeletedResponse {
        message: "Talker deleted successfully".to_string(),
    }))
}
