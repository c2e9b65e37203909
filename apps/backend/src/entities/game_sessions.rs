use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stored as plain strings so the schema is identical on SQLite and Postgres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum SessionStatus {
    #[sea_orm(string_value = "playing")]
    Playing,
    #[sea_orm(string_value = "won")]
    Won,
    #[sea_orm(string_value = "lost")]
    Lost,
    #[sea_orm(string_value = "timeout")]
    Timeout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum SessionMode {
    #[sea_orm(string_value = "speed")]
    Speed,
    #[sea_orm(string_value = "classic")]
    Classic,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "game_sessions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    #[sea_orm(column_name = "target_word")]
    pub target_word: String,
    /// JSON array of guess records.
    #[sea_orm(column_type = "Text")]
    pub tries: String,
    #[sea_orm(column_name = "game_status")]
    pub game_status: SessionStatus,
    pub mode: SessionMode,
    #[sea_orm(column_name = "max_tries", column_type = "SmallInteger")]
    pub max_tries: i16,
    #[sea_orm(column_name = "word_size", column_type = "SmallInteger")]
    pub word_size: i16,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
    #[sea_orm(column_name = "lock_version")]
    pub lock_version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
