use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum GameSessions {
    Table,
    Id,
    TargetWord,
    Tries,
    GameStatus,
    Mode,
    MaxTries,
    WordSize,
    CreatedAt,
    UpdatedAt,
    LockVersion,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Ids are assigned by the application (MAX(id) + 1), not by the database.
        manager
            .create_table(
                Table::create()
                    .table(GameSessions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GameSessions::Id)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(GameSessions::TargetWord).string_len(16).not_null())
                    .col(
                        ColumnDef::new(GameSessions::Tries)
                            .text()
                            .not_null()
                            .default("[]"),
                    )
                    .col(
                        ColumnDef::new(GameSessions::GameStatus)
                            .string_len(16)
                            .not_null()
                            .default("playing"),
                    )
                    .col(
                        ColumnDef::new(GameSessions::Mode)
                            .string_len(16)
                            .not_null()
                            .default("speed"),
                    )
                    .col(ColumnDef::new(GameSessions::MaxTries).small_integer().not_null())
                    .col(
                        ColumnDef::new(GameSessions::WordSize)
                            .small_integer()
                            .not_null()
                            .default(5),
                    )
                    .col(
                        ColumnDef::new(GameSessions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GameSessions::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GameSessions::LockVersion)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_game_sessions_status")
                    .table(GameSessions::Table)
                    .col(GameSessions::GameStatus)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("ix_game_sessions_status")
                    .table(GameSessions::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(GameSessions::Table).to_owned())
            .await
    }
}
