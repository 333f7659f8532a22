//! Database layer - connection pool and repositories
//!
//! # Design Principles
//!
//! - One pool opened at startup, handed to handlers through state
//! - Rely on the primary key for idempotent seeding - no check-then-insert
//! - Store errors are returned to the caller, never turned into empty results

pub mod pool;
pub mod repos;

pub use pool::{create_pool, ping};
pub use repos::*;

use sqlx::SqlitePool;

use crate::models::Plan;

/// Ensure the `plans` table exists and carries the seed rows.
///
/// Safe to call on every start: rows whose id is already present are left
/// untouched.
pub async fn initialize(pool: &SqlitePool, seeds: &[Plan]) -> Result<(), DbError> {
    let repo = PlanRepo::new(pool);

    repo.ensure_schema().await.inspect_err(|e| {
        tracing::error!("Failed to create plans table: {}", e);
    })?;

    let inserted = repo.seed(seeds).await.inspect_err(|e| {
        tracing::error!("Failed to seed plans: {}", e);
    })?;

    tracing::info!(inserted, seeds = seeds.len(), "Plan store initialized");
    Ok(())
}
