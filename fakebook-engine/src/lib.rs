// Library exports for fakebook-engine
// The binary and integration tests reach the engine through these modules

pub mod config;
pub mod db;
pub mod error;
pub mod index;
pub mod query;
pub mod store;

pub use error::{QueryError, QueryResult};
pub use query::QueryEngine;
pub use store::{DatasetStore, Snapshot};
