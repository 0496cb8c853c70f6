use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Users {
    Table,
    Id,
    Username,
    PassHash,
    CreatedAt,
}

#[derive(Iden)]
enum Saves {
    Table,
    Id,
    UserId,
    MapLevel,
    AsciiMap,
    CharJson,
    PositionTileX,
    PositionTileY,
    Updated,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // users
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Users::Username).string().not_null())
                    .col(ColumnDef::new(Users::PassHash).string().not_null())
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Username is the login key
        manager
            .create_index(
                Index::create()
                    .name("ux_users_username")
                    .table(Users::Table)
                    .col(Users::Username)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // saves
        manager
            .create_table(
                Table::create()
                    .table(Saves::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Saves::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Saves::UserId).big_integer().not_null())
                    .col(ColumnDef::new(Saves::MapLevel).integer().not_null())
                    .col(ColumnDef::new(Saves::AsciiMap).text().not_null())
                    .col(ColumnDef::new(Saves::CharJson).text().not_null())
                    .col(ColumnDef::new(Saves::PositionTileX).integer().not_null())
                    .col(ColumnDef::new(Saves::PositionTileY).integer().not_null())
                    .col(
                        ColumnDef::new(Saves::Updated)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_saves_user_id")
                            .from(Saves::Table, Saves::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One save slot per (user, level); upserts replace the slot
        manager
            .create_index(
                Index::create()
                    .name("ux_saves_user_id_map_level")
                    .table(Saves::Table)
                    .col(Saves::UserId)
                    .col(Saves::MapLevel)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // loadList orders by recency per user
        manager
            .create_index(
                Index::create()
                    .name("idx_saves_user_id_updated")
                    .table(Saves::Table)
                    .col(Saves::UserId)
                    .col(Saves::Updated)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Saves::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}
