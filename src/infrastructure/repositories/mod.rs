// Repository implementations (data access layer)
// Adapters that implement the domain repository interfaces over MongoDB

pub mod mongo_bid_repository;
pub mod mongo_product_repository;
pub mod mongo_user_repository;

pub use mongo_bid_repository::MongoBidRepository;
pub use mongo_product_repository::MongoProductRepository;
pub use mongo_user_repository::MongoUserRepository;
