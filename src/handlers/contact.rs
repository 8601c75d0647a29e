// Contact handler
// Validates and acknowledges contact-form messages. Nothing is stored or sent.

use axum::{
    body::Bytes,
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use tracing::{info, warn};

use crate::{
    error::{ApiError, ApiResult},
    models::contact::ContactRequest,
};

/// Receive a contact message from the website
/// POST /api/contact
pub async fn submit_contact(headers: HeaderMap, body: Bytes) -> ApiResult<impl IntoResponse> {
    let request = parse_body(&headers, &body).map_err(|err| {
        warn!("Malformed contact request: {}", err);
        err
    })?;

    request.validate()?;

    info!(
        name = %request.name,
        has_email = request.email.is_some(),
        has_phone = request.phone.is_some(),
        "Contact message received"
    );

    Ok((StatusCode::OK, Json(request.into_ack())))
}

/// Every body problem is a 422. A missing `Content-Type` is read as JSON;
/// any other non-JSON type leaves the body unread, so the fields are missing.
fn parse_body(headers: &HeaderMap, body: &[u8]) -> ApiResult<ContactRequest> {
    if let Some(content_type) = headers.get(header::CONTENT_TYPE) {
        let is_json = content_type
            .to_str()
            .map(is_json_content_type)
            .unwrap_or(false);
        if !is_json {
            return Err(ApiError::unprocessable("body: Field required"));
        }
    }

    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::unprocessable("body: Field required"));
    }

    serde_json::from_slice(body)
        .map_err(|e| ApiError::unprocessable(format!("body: invalid request: {}", e)))
}

fn is_json_content_type(value: &str) -> bool {
    let mime = value.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}
