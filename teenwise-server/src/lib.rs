//! teenwise-server: JSON API for content, support tickets and analytics
//!
//! Every endpoint is a thin pass-through from an HTTP request to a single
//! Postgres statement and back.
//!
//! - `models`: validated field types built from client input
//! - `db`: pool, table bootstrap and per-table repositories
//! - `http`: router, handlers, error mapping

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, DbError};
pub use http::{build_router, run_server, ApiError, ServerConfig, ServerError};
