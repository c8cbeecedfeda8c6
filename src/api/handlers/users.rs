use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use mongodb::Database;
use serde::Deserialize;

use crate::api::errors::ApiError;
use crate::api::handlers::{reject_body, InsertAck};
use crate::domain::email::Email;
use crate::domain::models::User;
use crate::domain::repositories::{RepositoryError, UserRepository};
use crate::infrastructure::repositories::MongoUserRepository;

/// Request body for registering a user
///
/// `email` is checked explicitly so a missing field yields 400 rather than a
/// body-rejection status.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: Option<String>,
    #[serde(default)]
    pub name: String,
}

/// Register a new user, rejecting duplicate emails
///
/// POST /users
///
/// The lookup is awaited before the insert decision; the unique index on
/// `email` remains the authoritative guard, so a concurrent duplicate insert
/// still maps to 409.
pub async fn create_user(
    State(db): State<Database>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<InsertAck>), ApiError> {
    let Json(req) = payload.map_err(reject_body)?;

    let email = req
        .email
        .ok_or_else(|| ApiError::bad_request("Missing required field: email"))?;
    let email = Email::new(email).map_err(ApiError::bad_request)?;

    let repo = MongoUserRepository::new(&db);

    if repo.find_by_email(email.as_str()).await?.is_some() {
        return Err(ApiError::conflict("User already exist"));
    }

    let user = User {
        id: None,
        email: email.as_str().to_string(),
        name: req.name,
    };

    let inserted_id = repo.insert(user).await.map_err(|e| match e {
        RepositoryError::Duplicate { .. } => ApiError::conflict("User already exist"),
        other => other.into(),
    })?;

    Ok((
        StatusCode::CREATED,
        Json(InsertAck {
            inserted_id: inserted_id.to_hex(),
        }),
    ))
}
