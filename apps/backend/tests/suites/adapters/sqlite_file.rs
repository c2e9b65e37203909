//! File-backed SQLite: sessions survive closing and reopening the database.

use std::env;

use backend::domain::{GameConfig, GameMode, GameStatus};
use backend::infra::db::bootstrap_db;
use backend::{DbKind, GameStore, SeaOrmGameStore};
use serial_test::serial;
use time::OffsetDateTime;

async fn open(path: &std::path::Path) -> SeaOrmGameStore {
    env::set_var("SQLITE_DB_PATH", path);
    let conn = bootstrap_db(DbKind::SqliteFile)
        .await
        .expect("bootstrap sqlite file")
        .expect("sqlite file has a connection");
    SeaOrmGameStore::new(conn)
}

fn config_classic() -> GameConfig {
    GameMode::Classic.configure(None, None).unwrap()
}

#[tokio::test]
#[serial]
async fn sessions_persist_across_reconnect() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wordle.db");

    {
        let store = open(&path).await;
        let session = store
            .create("crane", config_classic(), OffsetDateTime::now_utc())
            .await
            .unwrap();
        assert_eq!(session.id, 1);
        let update = session
            .forfeit_update(OffsetDateTime::now_utc())
            .unwrap()
            .unwrap();
        store.apply_update(update).await.unwrap();
    }

    // Reopening runs migrations again; they must be a no-op.
    let store = open(&path).await;
    let loaded = store.find_by_id(1).await.unwrap().unwrap();
    assert_eq!(loaded.target_word, "CRANE");
    assert_eq!(loaded.mode, GameMode::Classic);
    assert_eq!(loaded.status, GameStatus::Lost);
    assert_eq!(loaded.version, 2);

    let next = store
        .create("slate", config_classic(), OffsetDateTime::now_utc())
        .await
        .unwrap();
    assert_eq!(next.id, 2);

    env::remove_var("SQLITE_DB_PATH");
}
