//! Database layer - connection pool, schema bootstrap and repositories
//!
//! - One pool per process, passed to handlers via router state
//! - One SQL statement per operation, no explicit locking
//! - Missing rows surface as `DbError::NotFound`

pub mod pool;
pub mod schema;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
pub use repos::*;
