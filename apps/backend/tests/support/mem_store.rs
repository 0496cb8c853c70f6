//! In-memory persistence store for integration tests.
//!
//! Mirrors the SeaORM adapter's semantics (unique usernames, one save slot
//! per (user, level), newest-first list capped at 4) and counts every call
//! so tests can assert that short-circuited requests never reach the store.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use backend::error::AppError;
use backend::repos::store::{SaveDetail, SaveInput, SaveSummary, Store, UserRecord};
use time::{Duration, OffsetDateTime};

// Low bcrypt cost keeps the test suite fast; production hashing uses the
// adapter's DEFAULT_COST.
const TEST_BCRYPT_COST: u32 = 4;

struct SaveRow {
    user_id: i64,
    detail: SaveDetail,
}

#[derive(Default)]
pub struct MemStore {
    users: Mutex<Vec<UserRecord>>,
    saves: Mutex<Vec<SaveRow>>,
    calls: AtomicUsize,
    writes: AtomicUsize,
}

impl MemStore {
    /// Total store invocations of any kind.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn user_count(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub fn save_count(&self) -> usize {
        self.saves.lock().unwrap().len()
    }

    fn bump(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl Store for MemStore {
    async fn find_user_by_name(&self, username: &str) -> Result<Option<UserRecord>, AppError> {
        self.bump();
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn create_user(&self, username: &str, password: &str) -> Result<i64, AppError> {
        self.bump();
        let pass_hash = bcrypt::hash(password, TEST_BCRYPT_COST)
            .map_err(|e| AppError::internal(format!("Failed to hash password: {e}")))?;

        let mut users = self.users.lock().unwrap();
        let id = users.len() as i64 + 1;
        users.push(UserRecord { id, username: username.to_string(), pass_hash });
        Ok(id)
    }

    async fn verify_password(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<i64>, AppError> {
        self.bump();
        let users = self.users.lock().unwrap();
        let Some(user) = users.iter().find(|u| u.username == username) else {
            return Ok(None);
        };
        let matches = bcrypt::verify(password, &user.pass_hash).unwrap_or(false);
        Ok(matches.then_some(user.id))
    }

    async fn upsert_save(&self, user_id: i64, save: SaveInput) -> Result<(), AppError> {
        self.bump();
        // Strictly increasing timestamps keep recency ordering deterministic
        // even when writes land within the same clock tick.
        let seq = self.writes.fetch_add(1, Ordering::SeqCst) as i64;
        let updated = OffsetDateTime::now_utc() + Duration::microseconds(seq);

        let mut saves = self.saves.lock().unwrap();
        if let Some(row) = saves
            .iter_mut()
            .find(|r| r.user_id == user_id && r.detail.map_level == save.level)
        {
            row.detail.ascii_map = save.ascii_map;
            row.detail.char_json = save.char_json;
            row.detail.position_tile_x = save.position_tile_x;
            row.detail.position_tile_y = save.position_tile_y;
            row.detail.updated = updated;
            return Ok(());
        }

        let id = saves.len() as i64 + 1;
        saves.push(SaveRow {
            user_id,
            detail: SaveDetail {
                id,
                map_level: save.level,
                ascii_map: save.ascii_map,
                char_json: save.char_json,
                updated,
                position_tile_x: save.position_tile_x,
                position_tile_y: save.position_tile_y,
            },
        });
        Ok(())
    }

    async fn list_recent_saves(&self, user_id: i64) -> Result<Vec<SaveSummary>, AppError> {
        self.bump();
        let saves = self.saves.lock().unwrap();
        let mut rows: Vec<&SaveRow> = saves.iter().filter(|r| r.user_id == user_id).collect();
        rows.sort_by(|a, b| b.detail.updated.cmp(&a.detail.updated));
        Ok(rows
            .into_iter()
            .take(4)
            .map(|r| SaveSummary {
                id: r.detail.id,
                map_level: r.detail.map_level,
                updated: r.detail.updated,
            })
            .collect())
    }

    async fn get_save_by_id(
        &self,
        user_id: i64,
        save_id: i64,
    ) -> Result<Option<SaveDetail>, AppError> {
        self.bump();
        let saves = self.saves.lock().unwrap();
        Ok(saves
            .iter()
            .find(|r| r.user_id == user_id && r.detail.id == save_id)
            .map(|r| r.detail.clone()))
    }
}
