use mongodb::bson::doc;
use mongodb::options::{ClientOptions, IndexOptions, ServerApi, ServerApiVersion};
use mongodb::{Client, Database, IndexModel};

use crate::config::Config;
use crate::domain::models::User;

/// Name of the application database
pub const DB_NAME: &str = "smart_db";

/// Collection names
pub const PRODUCTS: &str = "products";
pub const BIDS: &str = "bids";
pub const USERS: &str = "users";

/// Connects to the configured cluster and prepares the application database
pub async fn connect(config: &Config) -> Result<Client, mongodb::error::Error> {
    connect_with_uri(&config.connection_uri()).await
}

/// Connects with an explicit connection string (Stable API v1), confirms the
/// connection with a ping and ensures the required indexes exist
pub async fn connect_with_uri(uri: &str) -> Result<Client, mongodb::error::Error> {
    let mut options = ClientOptions::parse(uri).await?;
    options.server_api = Some(ServerApi::builder().version(ServerApiVersion::V1).build());
    let client = Client::with_options(options)?;

    // Confirm the connection before accepting any traffic
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await?;
    tracing::info!("Database connected successfully");

    ensure_indexes(&client.database(DB_NAME)).await?;

    Ok(client)
}

/// Creates the unique index on `users.email`
///
/// The index is the authoritative guard against concurrent duplicate
/// registrations; the handler's pre-check only gives the friendly answer.
pub async fn ensure_indexes(db: &Database) -> Result<(), mongodb::error::Error> {
    let users = db.collection::<User>(USERS);
    let index = IndexModel::builder()
        .keys(doc! { "email": 1 })
        .options(IndexOptions::builder().unique(true).build())
        .build();
    users.create_index(index).await?;

    Ok(())
}
