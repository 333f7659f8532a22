//! Plan repository
//!
//! - ensure_schema: CREATE TABLE IF NOT EXISTS
//! - seed: INSERT OR IGNORE (idempotent on id)
//! - list: every row, in store order

use sqlx::SqlitePool;

use crate::models::Plan;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Plan repository
pub struct PlanRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> PlanRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the `plans` table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), DbError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS plans (id INTEGER PRIMARY KEY, name TEXT, price INTEGER)",
        )
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// Insert plans whose id is not present yet.
    ///
    /// Returns how many rows were actually written; conflicting ids are
    /// skipped without error.
    pub async fn seed(&self, plans: &[Plan]) -> Result<u64, DbError> {
        let mut tx = self.pool.begin().await?;
        let mut inserted = 0;

        for plan in plans {
            let result = sqlx::query("INSERT OR IGNORE INTO plans (id, name, price) VALUES (?, ?, ?)")
                .bind(plan.id)
                .bind(&plan.name)
                .bind(plan.price)
                .execute(&mut *tx)
                .await?;
            inserted += result.rows_affected();
        }

        tx.commit().await?;
        Ok(inserted)
    }

    /// List all plans.
    ///
    /// An empty table is `Ok(vec![])`. A NULL `name` lists as `""`.
    /// A failed query, or a row whose `price` is not an integer, is an error.
    pub async fn list(&self) -> Result<Vec<Plan>, DbError> {
        let plans = sqlx::query_as::<_, Plan>(
            "SELECT id, COALESCE(name, '') AS name, price FROM plans",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(plans)
    }
}
