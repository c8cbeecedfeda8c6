use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::{Collection, Database};

use crate::domain::models::Product;
use crate::domain::repositories::{DeleteAck, ProductRepository, RepositoryError, UpdateAck};
use crate::infrastructure::database::PRODUCTS;

/// MongoDB implementation of ProductRepository
pub struct MongoProductRepository {
    collection: Collection<Product>,
}

impl MongoProductRepository {
    /// Creates a new MongoProductRepository over the shared database handle
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(PRODUCTS),
        }
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    async fn insert(&self, mut product: Product) -> Result<ObjectId, RepositoryError> {
        let id = ObjectId::new();
        product.id = Some(id);
        self.collection.insert_one(&product).await?;

        Ok(id)
    }

    async fn find_all(&self, owner_email: Option<&str>) -> Result<Vec<Product>, RepositoryError> {
        let filter = match owner_email {
            Some(email) => doc! { "email": email },
            None => doc! {},
        };

        let cursor = self.collection.find(filter).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_latest(&self, limit: i64) -> Result<Vec<Product>, RepositoryError> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "created_at": -1 })
            .limit(limit)
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Product>, RepositoryError> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    async fn update_name_and_price(
        &self,
        id: ObjectId,
        name: &str,
        price: f64,
    ) -> Result<UpdateAck, RepositoryError> {
        // Only name and price are writable after creation; anything else the
        // caller sent is discarded at the handler boundary.
        let update = doc! {
            "$set": {
                "name": name,
                "price": price,
            }
        };

        let result = self.collection.update_one(doc! { "_id": id }, update).await?;
        Ok(UpdateAck {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        })
    }

    async fn delete(&self, id: ObjectId) -> Result<DeleteAck, RepositoryError> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(DeleteAck {
            deleted_count: result.deleted_count,
        })
    }
}
