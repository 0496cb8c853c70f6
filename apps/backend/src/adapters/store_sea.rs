//! SeaORM adapter for the persistence store.

use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use time::OffsetDateTime;

use crate::entities::{saves, users};
use crate::error::AppError;
use crate::repos::store::{SaveDetail, SaveInput, SaveSummary, Store, UserRecord};

/// loadList returns at most this many summaries.
const RECENT_SAVES_LIMIT: u64 = 4;

/// SeaORM implementation of [`Store`].
#[derive(Debug, Clone)]
pub struct StoreSea {
    db: DatabaseConnection,
}

impl StoreSea {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Store for StoreSea {
    async fn find_user_by_name(&self, username: &str) -> Result<Option<UserRecord>, AppError> {
        let user = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.db)
            .await?;

        Ok(user.map(|u| UserRecord {
            id: u.id,
            username: u.username,
            pass_hash: u.pass_hash,
        }))
    }

    async fn create_user(&self, username: &str, password: &str) -> Result<i64, AppError> {
        let pass_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)
            .map_err(|e| AppError::internal(format!("Failed to hash password: {e}")))?;

        let user = users::ActiveModel {
            id: NotSet,
            username: Set(username.to_string()),
            pass_hash: Set(pass_hash),
            created_at: Set(OffsetDateTime::now_utc()),
        }
        .insert(&self.db)
        .await?;

        Ok(user.id)
    }

    async fn verify_password(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<i64>, AppError> {
        let Some(user) = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };

        // An unreadable stored hash counts as a mismatch, not a fault
        let matches = bcrypt::verify(password, &user.pass_hash).unwrap_or(false);
        Ok(matches.then_some(user.id))
    }

    async fn upsert_save(&self, user_id: i64, save: SaveInput) -> Result<(), AppError> {
        let row = saves::ActiveModel {
            id: NotSet,
            user_id: Set(user_id),
            map_level: Set(save.level),
            ascii_map: Set(save.ascii_map),
            char_json: Set(save.char_json),
            position_tile_x: Set(save.position_tile_x),
            position_tile_y: Set(save.position_tile_y),
            updated: Set(OffsetDateTime::now_utc()),
        };

        saves::Entity::insert(row)
            .on_conflict(
                OnConflict::columns([saves::Column::UserId, saves::Column::MapLevel])
                    .update_columns([
                        saves::Column::AsciiMap,
                        saves::Column::CharJson,
                        saves::Column::PositionTileX,
                        saves::Column::PositionTileY,
                        saves::Column::Updated,
                    ])
                    .to_owned(),
            )
            .exec(&self.db)
            .await?;

        Ok(())
    }

    async fn list_recent_saves(&self, user_id: i64) -> Result<Vec<SaveSummary>, AppError> {
        let rows = saves::Entity::find()
            .filter(saves::Column::UserId.eq(user_id))
            .order_by_desc(saves::Column::Updated)
            .limit(RECENT_SAVES_LIMIT)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|s| SaveSummary {
                id: s.id,
                map_level: s.map_level,
                updated: s.updated,
            })
            .collect())
    }

    async fn get_save_by_id(
        &self,
        user_id: i64,
        save_id: i64,
    ) -> Result<Option<SaveDetail>, AppError> {
        let row = saves::Entity::find()
            .filter(saves::Column::UserId.eq(user_id))
            .filter(saves::Column::Id.eq(save_id))
            .one(&self.db)
            .await?;

        Ok(row.map(|s| SaveDetail {
            id: s.id,
            map_level: s.map_level,
            ascii_map: s.ascii_map,
            char_json: s.char_json,
            updated: s.updated,
            position_tile_x: s.position_tile_x,
            position_tile_y: s.position_tile_y,
        }))
    }
}
