use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::classifier::ClassifierError;

/// An error reported to the HTTP caller.
///
/// Every failure is rendered the same way: a status code and a flat
/// `{"error": <message>}` body. There are no structured error codes.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

// The prediction path reports every failure, validation or internal, as a
// client error.
impl From<ClassifierError> for ApiError {
    fn from(err: ClassifierError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        log::warn!("request failed ({}): {}", self.status, self.message);
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
