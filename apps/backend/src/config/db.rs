use std::env;
use std::str::FromStr;

use crate::error::AppError;

/// Which backing store the service runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DbKind {
    /// Process-local map; nothing survives a restart.
    Memory,
    /// SQLite `:memory:` database with a single pooled connection.
    SqliteMemory,
    /// SQLite database file at `SQLITE_DB_PATH`.
    #[default]
    SqliteFile,
    Postgres,
}

impl DbKind {
    /// Read `WORDLE_DB_KIND`, defaulting to a SQLite file.
    pub fn from_env() -> Result<Self, AppError> {
        match env::var("WORDLE_DB_KIND") {
            Ok(raw) if !raw.trim().is_empty() => raw.parse(),
            _ => Ok(DbKind::default()),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DbKind::Memory => "memory",
            DbKind::SqliteMemory => "sqlite-memory",
            DbKind::SqliteFile => "sqlite-file",
            DbKind::Postgres => "postgres",
        }
    }
}

impl FromStr for DbKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(DbKind::Memory),
            "sqlite-memory" => Ok(DbKind::SqliteMemory),
            "sqlite-file" | "sqlite" => Ok(DbKind::SqliteFile),
            "postgres" | "postgresql" => Ok(DbKind::Postgres),
            other => Err(AppError::config(format!(
                "WORDLE_DB_KIND must be one of memory, sqlite-memory, sqlite-file, postgres; got '{other}'"
            ))),
        }
    }
}

/// Connection pool bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub min_connections: u32,
}

impl PoolSettings {
    pub fn for_kind(kind: DbKind) -> Self {
        match kind {
            // Every connection to sqlite::memory: opens its own database.
            DbKind::SqliteMemory => Self {
                max_connections: 1,
                min_connections: 1,
            },
            _ => Self {
                max_connections: 10,
                min_connections: 5,
            },
        }
    }
}

/// Builds the connection URL for `kind` from environment variables.
/// `Memory` has no URL.
pub fn db_url(kind: DbKind) -> Result<Option<String>, AppError> {
    let url = match kind {
        DbKind::Memory => return Ok(None),
        DbKind::SqliteMemory => "sqlite::memory:".to_string(),
        DbKind::SqliteFile => {
            let path = env::var("SQLITE_DB_PATH").unwrap_or_else(|_| "api.db".to_string());
            sqlite_file_url(&path)
        }
        DbKind::Postgres => {
            let host = env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string());
            let port = env::var("POSTGRES_PORT").unwrap_or_else(|_| "5432".to_string());
            let db_name = must_var("WORDLE_DB")?;
            let username = must_var("WORDLE_DB_USER")?;
            let password = must_var("WORDLE_DB_PASSWORD")?;
            format!("postgresql://{username}:{password}@{host}:{port}/{db_name}")
        }
    };
    Ok(Some(url))
}

/// `mode=rwc` creates the file on first use.
pub fn sqlite_file_url(path: &str) -> String {
    format!("sqlite://{path}?mode=rwc")
}

/// Get required environment variable or return error
fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}
