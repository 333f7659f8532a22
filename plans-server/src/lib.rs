//! plans-server: HTTP API over a single-table plan catalogue
//!
//! Lists subscription plans from a SQLite store and simulates a
//! purchase action. The store is seeded with fixed rows at startup.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::{ConfigError, ServerConfig};
pub use db::{create_pool, initialize, DbError, PlanRepo};
pub use http::{build_router, run_server, ApiError, AppState, ServerError};
pub use models::Plan;
