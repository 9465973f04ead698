//! # Login Route
//!
//! `POST /login`: runs the login validator chain over the raw body and, when
//! it passes, issues a fresh 16-character token. No credential store exists;
//! any syntactically valid email/password pair succeeds.

use axum::{routing::post, Json, Router};
use serde::Serialize;
use serde_json::Value;

use crate::auth::generate_token;
use crate::validation::validate_login;

use super::response::Rejection;

/// Login routes
pub fn login_routes() -> Router {
    Router::new().route("/login", post(login_handler))
}

#[derive(Debug, Serialize)]
struct TokenResponse {
    token: String,
}

async fn login_handler(Json(body): Json<Value>) -> Result<Json<TokenResponse>, Rejection> {
    validate_login(&body)?;
    Ok(Json(TokenResponse {
        token: generate_token(),
    }))
}
