use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use serde::Serialize;
use thiserror::Error;

use crate::domain::models::{Bid, Product, User};

/// Errors surfaced by the repository layer
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("duplicate {field}: {value}")]
    Duplicate { field: &'static str, value: String },

    #[error("store error: {0}")]
    Store(#[from] mongodb::error::Error),
}

/// Acknowledgment of a partial update: how many records matched the
/// identifier and how many were actually modified
#[derive(Debug, Clone, Copy, Serialize)]
pub struct UpdateAck {
    pub matched_count: u64,
    pub modified_count: u64,
}

/// Acknowledgment of a delete by identifier
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DeleteAck {
    pub deleted_count: u64,
}

/// Repository contract for the products collection
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Inserts a new product and returns its store-assigned identifier
    async fn insert(&self, product: Product) -> Result<ObjectId, RepositoryError>;

    /// Lists all products, optionally filtered by exact owner email
    async fn find_all(&self, owner_email: Option<&str>) -> Result<Vec<Product>, RepositoryError>;

    /// Lists up to `limit` products, newest `created_at` first
    async fn find_latest(&self, limit: i64) -> Result<Vec<Product>, RepositoryError>;

    /// Looks up a single product by identifier
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Product>, RepositoryError>;

    /// Overwrites only `name` and `price` of the identified product
    async fn update_name_and_price(
        &self,
        id: ObjectId,
        name: &str,
        price: f64,
    ) -> Result<UpdateAck, RepositoryError>;

    /// Removes a product by identifier
    async fn delete(&self, id: ObjectId) -> Result<DeleteAck, RepositoryError>;
}

/// Repository contract for the bids collection
#[async_trait]
pub trait BidRepository: Send + Sync {
    /// Inserts a new bid and returns its store-assigned identifier
    async fn insert(&self, bid: Bid) -> Result<ObjectId, RepositoryError>;

    /// Lists all bids, optionally filtered by exact buyer email
    async fn find_all(&self, buyer_email: Option<&str>) -> Result<Vec<Bid>, RepositoryError>;

    /// Lists all bids referencing a product, highest bid price first
    async fn find_by_product(&self, product_id: &str) -> Result<Vec<Bid>, RepositoryError>;

    /// Removes a bid by identifier
    async fn delete(&self, id: ObjectId) -> Result<DeleteAck, RepositoryError>;
}

/// Repository contract for the users collection
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a new user; fails with [`RepositoryError::Duplicate`] when the
    /// email is already taken (unique index on the collection)
    async fn insert(&self, user: User) -> Result<ObjectId, RepositoryError>;

    /// Finds a user by email address
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
}
