//! # Error Response Mapping
//!
//! Every user-visible failure is a JSON body with a single `message` field,
//! paired with the status code the failing layer declares.

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::auth::AuthError;
use crate::service::ServiceError;
use crate::validation::ValidationError;

/// The uniform failure body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

/// Rejection type shared by all handlers
pub type Rejection = (StatusCode, Json<ErrorResponse>);

fn rejection(code: u16, message: String, fallback: StatusCode) -> Rejection {
    let status = StatusCode::from_u16(code).unwrap_or(fallback);
    (status, Json(ErrorResponse { message }))
}

impl From<ValidationError> for Rejection {
    fn from(err: ValidationError) -> Self {
        rejection(err.status_code(), err.to_string(), StatusCode::BAD_REQUEST)
    }
}

impl From<AuthError> for Rejection {
    fn from(err: AuthError) -> Self {
        rejection(err.status_code(), err.to_string(), StatusCode::UNAUTHORIZED)
    }
}

impl From<ServiceError> for Rejection {
    fn from(err: ServiceError) -> Self {
        rejection(
            err.status_code(),
            err.to_string(),
            StatusCode::INTERNAL_SERVER_ERROR,
        )
    }
}
