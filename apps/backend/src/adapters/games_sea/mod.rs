//! SeaORM adapter for game sessions.

pub mod dto;

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use time::OffsetDateTime;
use tracing::{debug, warn};

use crate::domain::mode::GameConfig;
use crate::domain::session::{GameSession, GameUpdate};
use crate::entities::game_sessions;
use crate::errors::domain::{ConflictKind, DomainError};
use crate::infra::db_errors::map_db_err;
use crate::repos::GameStore;

/// Run an UPDATE guarded by `lock_version`, bump the version and return the
/// fresh row. Zero affected rows is reported as `RecordNotFound` when the
/// row is gone and as a structured `OPTIMISTIC_LOCK` error otherwise.
async fn optimistic_update_then_fetch<C, F>(
    conn: &C,
    id: i64,
    expected_version: i32,
    configure_update: F,
) -> Result<game_sessions::Model, sea_orm::DbErr>
where
    C: ConnectionTrait + Send + Sync,
    F: FnOnce(
        sea_orm::UpdateMany<game_sessions::Entity>,
    ) -> sea_orm::UpdateMany<game_sessions::Entity>,
{
    let result = configure_update(game_sessions::Entity::update_many())
        .col_expr(
            game_sessions::Column::LockVersion,
            Expr::col(game_sessions::Column::LockVersion).add(1),
        )
        .filter(game_sessions::Column::Id.eq(id))
        .filter(game_sessions::Column::LockVersion.eq(expected_version))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        return match game_sessions::Entity::find_by_id(id).one(conn).await? {
            Some(row) => Err(sea_orm::DbErr::Custom(format!(
                "OPTIMISTIC_LOCK:{{\"expected\":{},\"actual\":{}}}",
                expected_version, row.lock_version
            ))),
            None => Err(sea_orm::DbErr::Custom(format!("GAME_NOT_FOUND:{id}"))),
        };
    }

    game_sessions::Entity::find_by_id(id)
        .one(conn)
        .await?
        .ok_or_else(|| sea_orm::DbErr::Custom(format!("GAME_NOT_FOUND:{id}")))
}

/// Id allocation is `MAX(id) + 1` followed by an insert; a racing writer can
/// take the same id in between, so a duplicate is retried with a fresh one.
const CREATE_ATTEMPTS: usize = 16;

pub async fn max_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Option<i64>, sea_orm::DbErr> {
    let max: Option<Option<i64>> = game_sessions::Entity::find()
        .select_only()
        .column_as(game_sessions::Column::Id.max(), "max_id")
        .into_tuple()
        .one(conn)
        .await?;
    Ok(max.flatten())
}

pub async fn insert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    session: &GameSession,
) -> Result<game_sessions::Model, DomainError> {
    let active = game_sessions::ActiveModel {
        id: Set(session.id),
        target_word: Set(session.target_word.clone()),
        tries: Set(dto::encode_tries(&session.tries)?),
        game_status: Set(session.status.into()),
        mode: Set(session.mode.into()),
        max_tries: Set(i16::from(session.max_guesses)),
        word_size: Set(i16::from(session.word_length)),
        created_at: Set(session.created_at),
        updated_at: Set(session.updated_at),
        lock_version: Set(session.version),
    };
    active.insert(conn).await.map_err(map_db_err)
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<game_sessions::Model>, sea_orm::DbErr> {
    game_sessions::Entity::find_by_id(id).one(conn).await
}

pub async fn find_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<game_sessions::Model>, sea_orm::DbErr> {
    game_sessions::Entity::find()
        .order_by_asc(game_sessions::Column::Id)
        .all(conn)
        .await
}

pub async fn update_progress<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    update: GameUpdate,
) -> Result<game_sessions::Model, DomainError> {
    let tries = dto::encode_tries(&update.tries)?;
    let status: game_sessions::SessionStatus = update.status.into();

    optimistic_update_then_fetch(conn, update.id, update.expected_version, |q| {
        q.col_expr(game_sessions::Column::Tries, Expr::value(tries))
            .col_expr(game_sessions::Column::GameStatus, Expr::value(status))
            .col_expr(game_sessions::Column::UpdatedAt, Expr::value(update.updated_at))
    })
    .await
    .map_err(map_db_err)
}

/// [`GameStore`] over a SeaORM connection pool (Postgres or SQLite).
#[derive(Debug, Clone)]
pub struct SeaOrmGameStore {
    db: DatabaseConnection,
}

impl SeaOrmGameStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GameStore for SeaOrmGameStore {
    async fn create(
        &self,
        target_word: &str,
        config: GameConfig,
        now: OffsetDateTime,
    ) -> Result<GameSession, DomainError> {
        for attempt in 1..=CREATE_ATTEMPTS {
            let id = max_id(&self.db).await.map_err(map_db_err)?.map_or(1, |m| m + 1);
            let session = GameSession::new(id, target_word, config, now);

            match insert(&self.db, &session).await {
                Ok(row) => {
                    debug!(game_id = id, attempt, "Game session inserted");
                    return GameSession::try_from(row);
                }
                Err(DomainError::Conflict(ConflictKind::DuplicateId, _)) => {
                    debug!(game_id = id, attempt, "Game id taken concurrently, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        warn!(attempts = CREATE_ATTEMPTS, "Gave up allocating a game id");
        Err(DomainError::conflict(
            ConflictKind::DuplicateId,
            format!("Could not allocate a game id after {CREATE_ATTEMPTS} attempts"),
        ))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<GameSession>, DomainError> {
        find_by_id(&self.db, id)
            .await
            .map_err(map_db_err)?
            .map(GameSession::try_from)
            .transpose()
    }

    async fn find_all(&self) -> Result<Vec<GameSession>, DomainError> {
        find_all(&self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(GameSession::try_from)
            .collect()
    }

    async fn apply_update(&self, update: GameUpdate) -> Result<GameSession, DomainError> {
        let row = update_progress(&self.db, update).await?;
        GameSession::try_from(row)
    }

    async fn ping(&self) -> Result<(), DomainError> {
        self.db.ping().await.map_err(map_db_err)
    }
}
