// Domain layer: record types, boundary value objects and repository traits.
// Independent of the HTTP layer and the store driver implementations.

pub mod email;
pub mod models;
pub mod repositories;
