use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use mongodb::bson::oid::ObjectId;
use mongodb::Database;
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::api::handlers::{reject_body, InsertAck};
use crate::domain::models::Bid;
use crate::domain::repositories::{BidRepository, DeleteAck};
use crate::infrastructure::repositories::MongoBidRepository;

/// Optional exact-match buyer email filter for bid listings
#[derive(Debug, Deserialize)]
pub struct ListBidsQuery {
    pub email: Option<String>,
}

/// Request body for placing a bid
///
/// `product_id` is stored as-is and matched by string equality; it is not
/// checked against the products collection.
#[derive(Debug, Deserialize)]
pub struct CreateBidRequest {
    pub product_id: String,
    /// Buyer email
    pub email: String,
    pub price: f64,
}

/// A bid as exposed over HTTP
#[derive(Debug, Serialize)]
pub struct BidResponse {
    pub id: String,
    pub product_id: String,
    pub email: String,
    pub price: f64,
}

impl From<&Bid> for BidResponse {
    fn from(bid: &Bid) -> Self {
        Self {
            id: bid.id.map(|id| id.to_hex()).unwrap_or_default(),
            product_id: bid.product_id.clone(),
            email: bid.email.clone(),
            price: bid.price,
        }
    }
}

/// List all bids, optionally filtered by buyer email
///
/// GET /bids?email=
pub async fn list_bids(
    State(db): State<Database>,
    Query(query): Query<ListBidsQuery>,
) -> Result<Json<Vec<BidResponse>>, ApiError> {
    let repo = MongoBidRepository::new(&db);
    let bids = repo.find_all(query.email.as_deref()).await?;

    Ok(Json(bids.iter().map(BidResponse::from).collect()))
}

/// List all bids for a product, highest bid first
///
/// GET /products/bids/:product_id
pub async fn bids_for_product(
    State(db): State<Database>,
    Path(product_id): Path<String>,
) -> Result<Json<Vec<BidResponse>>, ApiError> {
    let repo = MongoBidRepository::new(&db);
    let bids = repo.find_by_product(&product_id).await?;

    Ok(Json(bids.iter().map(BidResponse::from).collect()))
}

/// Place a new bid
///
/// POST /bids
pub async fn create_bid(
    State(db): State<Database>,
    payload: Result<Json<CreateBidRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<InsertAck>), ApiError> {
    let Json(req) = payload.map_err(reject_body)?;

    let bid = Bid {
        id: None,
        product_id: req.product_id,
        email: req.email,
        price: req.price,
    };

    let repo = MongoBidRepository::new(&db);
    let inserted_id = repo.insert(bid).await?;

    Ok((
        StatusCode::CREATED,
        Json(InsertAck {
            inserted_id: inserted_id.to_hex(),
        }),
    ))
}

/// Delete a bid by id
///
/// DELETE /bids/:id
pub async fn delete_bid(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> Result<Json<DeleteAck>, ApiError> {
    let object_id = ObjectId::parse_str(&id)
        .map_err(|_| ApiError::bad_request("Invalid bid id").with_id(id.as_str()))?;

    let repo = MongoBidRepository::new(&db);
    let ack = repo.delete(object_id).await?;

    Ok(Json(ack))
}
