use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::repositories::RepositoryError;

/// API error type with HTTP status code, message and optional identifier
/// context echoed back to the caller
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub id: Option<String>,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            id: None,
        }
    }

    /// Creates a 400 Bad Request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Creates a 404 Not Found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Creates a 409 Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    /// Creates a 502 Bad Gateway error (store unavailable)
    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, message)
    }

    /// Attaches the requested identifier to the error body
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self.id {
            Some(id) => Json(json!({
                "message": self.message,
                "id": id,
            })),
            None => Json(json!({
                "message": self.message,
            })),
        };

        (self.status, body).into_response()
    }
}

impl From<RepositoryError> for ApiError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::Duplicate { .. } => Self::conflict(error.to_string()),
            RepositoryError::Store(e) => {
                tracing::error!("store error: {}", e);
                Self::bad_gateway("Store unavailable")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_carries_the_requested_id() {
        let err = ApiError::not_found("Product not found").with_id("abc123");
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.id.as_deref(), Some("abc123"));
    }

    #[test]
    fn duplicate_maps_to_conflict() {
        let err: ApiError = RepositoryError::Duplicate {
            field: "email",
            value: "a@x.com".to_string(),
        }
        .into();
        assert_eq!(err.status, StatusCode::CONFLICT);
    }
}
