use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "saves")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "user_id")]
    pub user_id: i64,
    #[sea_orm(column_name = "map_level")]
    pub map_level: i32,
    #[sea_orm(column_name = "ascii_map", column_type = "Text")]
    pub ascii_map: String,
    #[sea_orm(column_name = "char_json", column_type = "Text")]
    pub char_json: String,
    #[sea_orm(column_name = "position_tile_x")]
    pub position_tile_x: i32,
    #[sea_orm(column_name = "position_tile_y")]
    pub position_tile_y: i32,
    pub updated: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
