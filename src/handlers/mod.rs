// Handlers module
// HTTP handlers for the school website API

pub mod contact;
pub mod diagnostics;
pub mod info;

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::error::ApiError;

/// GET /
pub async fn root() -> impl IntoResponse {
    Json(json!({ "message": "Hello from the school website backend!" }))
}

/// GET /api/hello
pub async fn hello() -> impl IntoResponse {
    Json(json!({ "message": "Hello from the backend API!" }))
}

/// Health check handler
/// Returns "OK" with 200 status for monitoring purposes
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Fallback for unknown routes
pub async fn not_found() -> ApiError {
    ApiError::not_found("Not Found")
}

/// Known path, unsupported method
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
