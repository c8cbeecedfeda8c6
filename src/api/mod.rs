// API layer: router construction, error mapping and the resource handlers.

pub mod errors;
pub mod handlers;

use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use mongodb::Database;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use handlers::{bids, products, users};

/// Builds the application router
///
/// Each (method, path) pair is registered exactly once; handlers share the
/// database handle through axum state.
pub fn router(db: Database) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::liveness))
        // Product routes
        .route("/products", get(products::list_products))
        .route("/products", post(products::create_product))
        .route("/latest-products", get(products::latest_products))
        .route("/products/:id", get(products::get_product))
        .route("/products/:id", patch(products::update_product))
        .route("/products/:id", delete(products::delete_product))
        // Bid routes
        .route("/bids", get(bids::list_bids))
        .route("/bids", post(bids::create_bid))
        .route("/bids/:id", delete(bids::delete_bid))
        .route("/products/bids/:product_id", get(bids::bids_for_product))
        // User routes
        .route("/users", post(users::create_user))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(db)
}
