use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::{Collection, Database};

use crate::domain::models::Bid;
use crate::domain::repositories::{BidRepository, DeleteAck, RepositoryError};
use crate::infrastructure::database::BIDS;

/// MongoDB implementation of BidRepository
pub struct MongoBidRepository {
    collection: Collection<Bid>,
}

impl MongoBidRepository {
    /// Creates a new MongoBidRepository over the shared database handle
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(BIDS),
        }
    }
}

#[async_trait]
impl BidRepository for MongoBidRepository {
    async fn insert(&self, mut bid: Bid) -> Result<ObjectId, RepositoryError> {
        let id = ObjectId::new();
        bid.id = Some(id);
        self.collection.insert_one(&bid).await?;

        Ok(id)
    }

    async fn find_all(&self, buyer_email: Option<&str>) -> Result<Vec<Bid>, RepositoryError> {
        let filter = match buyer_email {
            Some(email) => doc! { "email": email },
            None => doc! {},
        };

        let cursor = self.collection.find(filter).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_by_product(&self, product_id: &str) -> Result<Vec<Bid>, RepositoryError> {
        // product_id is a plain string reference, matched by equality
        let cursor = self
            .collection
            .find(doc! { "product_id": product_id })
            .sort(doc! { "price": -1 })
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn delete(&self, id: ObjectId) -> Result<DeleteAck, RepositoryError> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(DeleteAck {
            deleted_count: result.deleted_count,
        })
    }
}
