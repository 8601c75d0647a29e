use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unprocessable entity: {0}")]
    Unprocessable(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::Unprocessable(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (error_code, message) = match self {
            ApiError::BadRequest(message) => {
                tracing::debug!("Rejected request: {}", message);
                ("BAD_REQUEST", message)
            }
            ApiError::Unprocessable(message) => {
                tracing::debug!("Request failed validation: {}", message);
                ("VALIDATION_ERROR", message)
            }
            ApiError::NotFound(message) => ("NOT_FOUND", message),
            ApiError::MethodNotAllowed => ("METHOD_NOT_ALLOWED", "Method Not Allowed".to_string()),
        };

        // `detail` is what the website frontend reads
        let body = Json(json!({
            "detail": message,
            "error": {
                "code": error_code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

// Result type alias for convenience
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Should read body");
        serde_json::from_slice(&bytes).expect("Should parse JSON")
    }

    #[tokio::test]
    async fn test_bad_request_body_shape() {
        let response = ApiError::bad_request("Le message est trop court.").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["detail"], "Le message est trop court.");
        assert_eq!(body["error"]["code"], "BAD_REQUEST");
        assert_eq!(body["error"]["message"], "Le message est trop court.");
    }

    #[tokio::test]
    async fn test_method_not_allowed_body_shape() {
        let response = ApiError::MethodNotAllowed.into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

        let body = body_json(response).await;
        assert_eq!(body["detail"], "Method Not Allowed");
        assert_eq!(body["error"]["code"], "METHOD_NOT_ALLOWED");
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::unprocessable("x").status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(ApiError::not_found("x").status(), StatusCode::NOT_FOUND);
    }
}
