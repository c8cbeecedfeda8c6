// Infrastructure layer: store connection bootstrap and the MongoDB adapters
// implementing the domain repository interfaces.

pub mod database;
pub mod repositories;
