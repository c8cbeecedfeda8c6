pub mod bids;
pub mod products;
pub mod users;

use axum::extract::rejection::JsonRejection;
use serde::Serialize;

use crate::api::errors::ApiError;

/// Acknowledgment of an insert, carrying the new store-assigned identifier
#[derive(Debug, Serialize)]
pub struct InsertAck {
    pub inserted_id: String,
}

/// Maps a malformed request body to the uniform 400 JSON error contract
pub(crate) fn reject_body(rejection: JsonRejection) -> ApiError {
    ApiError::bad_request(rejection.body_text())
}

/// Liveness probe
///
/// GET /
pub async fn liveness() -> &'static str {
    "Smart Server is Running"
}
