use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::{Collection, Database};

use crate::domain::models::User;
use crate::domain::repositories::{RepositoryError, UserRepository};
use crate::infrastructure::database::USERS;

/// Server error code for a unique-index violation
const DUPLICATE_KEY: i32 = 11000;

/// MongoDB implementation of UserRepository
///
/// Relies on the unique index on `email` (see `database::ensure_indexes`) to
/// reject concurrent duplicate registrations at the store level.
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    /// Creates a new MongoUserRepository over the shared database handle
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(USERS),
        }
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn insert(&self, mut user: User) -> Result<ObjectId, RepositoryError> {
        let id = ObjectId::new();
        user.id = Some(id);

        match self.collection.insert_one(&user).await {
            Ok(_) => Ok(id),
            Err(e) if is_duplicate_key(&e) => Err(RepositoryError::Duplicate {
                field: "email",
                value: user.email,
            }),
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self.collection.find_one(doc! { "email": email }).await?)
    }
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    matches!(
        *error.kind,
        ErrorKind::Write(WriteFailure::WriteError(ref write_error))
            if write_error.code == DUPLICATE_KEY
    )
}
