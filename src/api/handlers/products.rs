use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use mongodb::Database;
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::api::handlers::{reject_body, InsertAck};
use crate::domain::models::Product;
use crate::domain::repositories::{DeleteAck, ProductRepository, UpdateAck};
use crate::infrastructure::repositories::MongoProductRepository;

/// Maximum number of records returned by the latest-products listing
const LATEST_LIMIT: i64 = 6;

/// Optional exact-match owner email filter for product listings
#[derive(Debug, Deserialize)]
pub struct ListProductsQuery {
    pub email: Option<String>,
}

/// Request body for creating a product
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub price: f64,
    /// Owner (seller) email
    pub email: String,
}

/// Request body for a partial product update; only these fields are writable
#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub name: String,
    pub price: f64,
}

/// A product as exposed over HTTP
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: product.name.clone(),
            price: product.price,
            email: product.email.clone(),
            created_at: product.created_at,
        }
    }
}

/// List all products, optionally filtered by owner email
///
/// GET /products?email=
pub async fn list_products(
    State(db): State<Database>,
    Query(query): Query<ListProductsQuery>,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let repo = MongoProductRepository::new(&db);
    let products = repo.find_all(query.email.as_deref()).await?;

    Ok(Json(products.iter().map(ProductResponse::from).collect()))
}

/// List up to six products, newest first
///
/// GET /latest-products
pub async fn latest_products(
    State(db): State<Database>,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let repo = MongoProductRepository::new(&db);
    let products = repo.find_latest(LATEST_LIMIT).await?;

    Ok(Json(products.iter().map(ProductResponse::from).collect()))
}

/// Get a single product by id
///
/// GET /products/:id
pub async fn get_product(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> Result<Json<ProductResponse>, ApiError> {
    let object_id = parse_product_id(&id)?;

    let repo = MongoProductRepository::new(&db);
    let product = repo
        .find_by_id(object_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Product not found").with_id(id))?;

    Ok(Json(ProductResponse::from(&product)))
}

/// Create a new product
///
/// POST /products
pub async fn create_product(
    State(db): State<Database>,
    payload: Result<Json<CreateProductRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<InsertAck>), ApiError> {
    let Json(req) = payload.map_err(reject_body)?;

    let product = Product {
        id: None,
        name: req.name,
        price: req.price,
        email: req.email,
        created_at: Utc::now(),
    };

    let repo = MongoProductRepository::new(&db);
    let inserted_id = repo.insert(product).await?;

    Ok((
        StatusCode::CREATED,
        Json(InsertAck {
            inserted_id: inserted_id.to_hex(),
        }),
    ))
}

/// Partially update a product; only name and price are overwritten
///
/// PATCH /products/:id
pub async fn update_product(
    State(db): State<Database>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateProductRequest>, JsonRejection>,
) -> Result<Json<UpdateAck>, ApiError> {
    let Json(req) = payload.map_err(reject_body)?;
    let object_id = parse_product_id(&id)?;

    let repo = MongoProductRepository::new(&db);
    let ack = repo
        .update_name_and_price(object_id, &req.name, req.price)
        .await?;

    Ok(Json(ack))
}

/// Delete a product by id
///
/// DELETE /products/:id
pub async fn delete_product(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> Result<Json<DeleteAck>, ApiError> {
    let object_id = parse_product_id(&id)?;

    let repo = MongoProductRepository::new(&db);
    let ack = repo.delete(object_id).await?;

    Ok(Json(ack))
}

/// Validates a path identifier before any store query is built
fn parse_product_id(id: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(id).map_err(|_| ApiError::bad_request("Invalid product id").with_id(id))
}
