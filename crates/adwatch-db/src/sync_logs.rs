//! Database operations for the `ad_sync_logs` table.
//!
//! A sync run is created directly in `RUNNING` (the stub has no queue), then
//! transitions to `COMPLETED` or `FAILED`. Transitions are guarded: an
//! UPDATE that matches zero rows is an invalid-transition error, never a
//! silent no-op.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use adwatch_core::SyncStatus;

use crate::DbError;

/// A row from the `ad_sync_logs` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AdSyncLogRow {
    pub id: i64,
    pub public_id: Uuid,
    pub platform: String,
    pub status: String,
    pub records_fetched: i32,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub error_message: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Creates a new sync run in `RUNNING` status with `started_at = NOW()`.
///
/// Generates a UUID in Rust and binds it to `public_id`. Returns the full
/// newly-created row.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the insert fails.
pub async fn create_sync_log(pool: &PgPool, platform: &str) -> Result<AdSyncLogRow, DbError> {
    let public_id = Uuid::new_v4();

    let row = sqlx::query_as::<_, AdSyncLogRow>(
        "INSERT INTO ad_sync_logs (public_id, platform, status, started_at) \
         VALUES ($1, $2, $3, NOW()) \
         RETURNING id, public_id, platform, status, records_fetched, \
                   started_at, completed_at, error_message, created_at",
    )
    .bind(public_id)
    .bind(platform)
    .bind(SyncStatus::Running.as_str())
    .fetch_one(pool)
    .await?;

    Ok(row)
}

/// Marks a run as `COMPLETED`, sets `completed_at = NOW()` and `records_fetched`.
///
/// # Errors
///
/// Returns [`DbError::InvalidSyncTransition`] if the run is not `RUNNING`,
/// or [`DbError::Sqlx`] if the update fails.
pub async fn complete_sync_log(
    pool: &PgPool,
    id: i64,
    records_fetched: i32,
) -> Result<(), DbError> {
    let result = sqlx::query(
        "UPDATE ad_sync_logs \
         SET status = $1, completed_at = NOW(), records_fetched = $2 \
         WHERE id = $3 AND status = $4",
    )
    .bind(SyncStatus::Completed.as_str())
    .bind(records_fetched)
    .bind(id)
    .bind(SyncStatus::Running.as_str())
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DbError::InvalidSyncTransition {
            id,
            expected_status: "RUNNING",
        });
    }

    Ok(())
}

/// Marks a run as `FAILED`, sets `completed_at = NOW()` and `error_message`.
///
/// # Errors
///
/// Returns [`DbError::InvalidSyncTransition`] if the run is not `RUNNING`,
/// or [`DbError::Sqlx`] if the update fails.
pub async fn fail_sync_log(pool: &PgPool, id: i64, error_message: &str) -> Result<(), DbError> {
    let result = sqlx::query(
        "UPDATE ad_sync_logs \
         SET status = $1, completed_at = NOW(), error_message = $2 \
         WHERE id = $3 AND status = $4",
    )
    .bind(SyncStatus::Failed.as_str())
    .bind(error_message)
    .bind(id)
    .bind(SyncStatus::Running.as_str())
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DbError::InvalidSyncTransition {
            id,
            expected_status: "RUNNING",
        });
    }

    Ok(())
}

/// Fetches a single run by its internal `id`.
///
/// # Errors
///
/// Returns [`DbError::NotFound`] if no row exists with the given `id`, or
/// [`DbError::Sqlx`] if the query fails.
pub async fn get_sync_log(pool: &PgPool, id: i64) -> Result<AdSyncLogRow, DbError> {
    let row = sqlx::query_as::<_, AdSyncLogRow>(
        "SELECT id, public_id, platform, status, records_fetched, \
                started_at, completed_at, error_message, created_at \
         FROM ad_sync_logs \
         WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(DbError::NotFound)?;

    Ok(row)
}

/// Returns the most recent `limit` runs, ordered by `created_at DESC`.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_sync_logs(pool: &PgPool, limit: i64) -> Result<Vec<AdSyncLogRow>, DbError> {
    let rows = sqlx::query_as::<_, AdSyncLogRow>(
        "SELECT id, public_id, platform, status, records_fetched, \
                started_at, completed_at, error_message, created_at \
         FROM ad_sync_logs \
         ORDER BY created_at DESC, id DESC \
         LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
