//! Persistence boundary for user and save-game records.
//!
//! Handlers perform one logical read or write per invocation through this
//! trait; there are no cross-request transactions and no in-process caching
//! of records. "Not found" is always an `Ok(None)`/empty result, never an
//! error.

use async_trait::async_trait;
use serde::Serialize;
use time::OffsetDateTime;

use crate::error::AppError;

/// A stored user row, as the auth handler needs it.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub pass_hash: String,
}

/// Save-game payload accepted by `upsert_save`.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveInput {
    pub level: i32,
    pub ascii_map: String,
    /// JSON blob for the hero sheet, stored verbatim
    pub char_json: String,
    pub position_tile_x: i32,
    pub position_tile_y: i32,
}

/// One row of the loadList response.
#[derive(Debug, Clone, Serialize)]
pub struct SaveSummary {
    pub id: i64,
    pub map_level: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub updated: OffsetDateTime,
}

/// Full save record returned by `get_save_by_id`.
#[derive(Debug, Clone)]
pub struct SaveDetail {
    pub id: i64,
    pub map_level: i32,
    pub ascii_map: String,
    pub char_json: String,
    pub updated: OffsetDateTime,
    pub position_tile_x: i32,
    pub position_tile_y: i32,
}

#[async_trait]
pub trait Store: Send + Sync {
    async fn find_user_by_name(&self, username: &str) -> Result<Option<UserRecord>, AppError>;

    /// Create a user with a freshly hashed password, returning the new id.
    async fn create_user(&self, username: &str, password: &str) -> Result<i64, AppError>;

    /// `Some(user id)` when the password matches; `None` for an unknown
    /// username or a mismatch.
    async fn verify_password(&self, username: &str, password: &str)
        -> Result<Option<i64>, AppError>;

    /// Insert or replace the caller's save slot for the given level,
    /// refreshing its `updated` timestamp.
    async fn upsert_save(&self, user_id: i64, save: SaveInput) -> Result<(), AppError>;

    /// Newest-first save summaries for the caller, capped at 4.
    async fn list_recent_saves(&self, user_id: i64) -> Result<Vec<SaveSummary>, AppError>;

    /// A single save, scoped to the caller (other users' ids read as absent).
    async fn get_save_by_id(&self, user_id: i64, save_id: i64)
        -> Result<Option<SaveDetail>, AppError>;
}
