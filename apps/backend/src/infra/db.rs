use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, DbKind, PoolSettings};
use crate::error::AppError;

/// Open a pool for `kind`. Does NOT run migrations.
///
/// Returns `Ok(None)` for [`DbKind::Memory`], which has no database.
pub async fn connect_db(kind: DbKind) -> Result<Option<DatabaseConnection>, AppError> {
    let Some(url) = db_url(kind)? else {
        return Ok(None);
    };
    connect_url(&url, PoolSettings::for_kind(kind)).await.map(Some)
}

/// Open a pool for an explicit URL.
pub async fn connect_url(
    url: &str,
    pool: PoolSettings,
) -> Result<DatabaseConnection, AppError> {
    let mut opts = ConnectOptions::new(url.to_owned());
    opts.max_connections(pool.max_connections)
        .min_connections(pool.min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    // An in-memory SQLite database lives only as long as its connection.
    if url.starts_with("sqlite::memory:") {
        let forever = Duration::from_secs(60 * 60 * 24 * 365);
        opts.idle_timeout(forever).max_lifetime(forever);
    }

    let conn = Database::connect(opts).await?;
    Ok(conn)
}

/// Connect and bring the schema up to date. Single entrypoint used by
/// the state builder.
pub async fn bootstrap_db(kind: DbKind) -> Result<Option<DatabaseConnection>, AppError> {
    let Some(conn) = connect_db(kind).await? else {
        return Ok(None);
    };
    migrate(&conn, MigrationCommand::Up).await?;
    info!(db_kind = kind.as_str(), "Database ready");
    Ok(Some(conn))
}
