//! SeaOrmGameStore against a migrated in-memory SQLite database.

use std::collections::BTreeSet;

use backend::adapters::games_sea;
use backend::domain::{GameMode, GameSession, GameStatus};
use backend::errors::domain::{ConflictKind, NotFoundKind};
use backend::infra::db::bootstrap_db;
use backend::{DbKind, DomainError, GameService, GameStore, NewGame, SeaOrmGameStore};
use sea_orm::DatabaseConnection;
use time::OffsetDateTime;

use crate::support::sqlite_state;

async fn connect() -> DatabaseConnection {
    bootstrap_db(DbKind::SqliteMemory)
        .await
        .expect("bootstrap sqlite")
        .expect("sqlite has a connection")
}

async fn store() -> SeaOrmGameStore {
    SeaOrmGameStore::new(connect().await)
}

fn config(len: usize) -> backend::domain::GameConfig {
    GameMode::Speed.configure(Some(5), Some(len as u8)).unwrap()
}

fn session(id: i64, target: &str) -> GameSession {
    GameSession::new(id, target, config(target.len()), OffsetDateTime::now_utc())
}

#[tokio::test]
async fn round_trip_preserves_every_field() {
    let store = store().await;

    let original = store
        .create("CRANE", config(5), OffsetDateTime::now_utc())
        .await
        .unwrap();
    assert_eq!(original.id, 1);

    let update = original
        .guess_update("SLATE", OffsetDateTime::now_utc())
        .unwrap();
    let updated = store.apply_update(update).await.unwrap();
    assert_eq!(updated.version, 2);

    let loaded = store.find_by_id(1).await.unwrap().unwrap();
    assert_eq!(loaded.target_word, "CRANE");
    assert_eq!(loaded.mode, GameMode::Speed);
    assert_eq!(loaded.max_guesses, 5);
    assert_eq!(loaded.word_length, 5);
    assert_eq!(loaded.status, GameStatus::Playing);
    assert_eq!(loaded.tries, updated.tries);
    assert_eq!(loaded.tries[0].guess_word, "SLATE");
    assert_eq!(loaded.version, 2);
    assert_eq!(loaded.created_at, original.created_at);

    let next = store
        .create("TREE", config(4), OffsetDateTime::now_utc())
        .await
        .unwrap();
    assert_eq!(next.id, 2);
}

#[tokio::test]
async fn created_session_matches_stored_row() {
    let store = store().await;
    let created = store
        .create("CRANE", config(5), OffsetDateTime::now_utc())
        .await
        .unwrap();
    let loaded = store.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(created, loaded);
}

#[tokio::test]
async fn find_all_is_ordered_and_missing_is_none() {
    let conn = connect().await;
    for (id, word) in [(3, "TREE"), (1, "CRANE"), (2, "YELLOW")] {
        games_sea::insert(&conn, &session(id, word)).await.unwrap();
    }
    let store = SeaOrmGameStore::new(conn);

    let ids: Vec<i64> = store.find_all().await.unwrap().iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert!(store.find_by_id(99).await.unwrap().is_none());

    let next = store
        .create("SLATE", config(5), OffsetDateTime::now_utc())
        .await
        .unwrap();
    assert_eq!(next.id, 4);
}

#[tokio::test]
async fn duplicate_id_conflicts() {
    let conn = connect().await;
    games_sea::insert(&conn, &session(1, "CRANE")).await.unwrap();
    let err = games_sea::insert(&conn, &session(1, "SLATE"))
        .await
        .unwrap_err();
    assert!(
        matches!(err, DomainError::Conflict(ConflictKind::DuplicateId, _)),
        "{err:?}"
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_get_distinct_ids() {
    const N: i64 = 8;
    let state = sqlite_state(7).await;

    let handles: Vec<_> = (0..N)
        .map(|_| {
            let state = state.clone();
            tokio::spawn(async move {
                GameService::new()
                    .create(state.store(), state.words(), NewGame::default())
                    .await
            })
        })
        .collect();

    let mut ids = BTreeSet::new();
    for handle in handles {
        let session = handle.await.unwrap().expect("every create succeeds");
        ids.insert(session.id);
    }
    assert_eq!(ids, (1..=N).collect::<BTreeSet<i64>>());
    assert_eq!(state.store().find_all().await.unwrap().len(), N as usize);
}

#[tokio::test]
async fn optimistic_lock_rejects_stale_version() {
    let store = store().await;
    let original = store
        .create("CRANE", config(5), OffsetDateTime::now_utc())
        .await
        .unwrap();

    let now = OffsetDateTime::now_utc();
    let first = original.guess_update("SLATE", now).unwrap();
    let stale = original.guess_update("CRATE", now).unwrap();

    store.apply_update(first).await.unwrap();
    let err = store.apply_update(stale).await.unwrap_err();
    match err {
        DomainError::Conflict(ConflictKind::OptimisticLock, detail) => {
            assert!(detail.contains("expected version 1"), "{detail}");
            assert!(detail.contains("actual version 2"), "{detail}");
        }
        other => panic!("expected optimistic lock conflict, got {other:?}"),
    }

    let loaded = store.find_by_id(1).await.unwrap().unwrap();
    assert_eq!(loaded.tries.len(), 1);
    assert_eq!(loaded.tries[0].guess_word, "SLATE");
}

#[tokio::test]
async fn update_of_missing_row_is_not_found() {
    let store = store().await;
    let ghost = session(7, "CRANE");
    let update = ghost.forfeit_update(OffsetDateTime::now_utc()).unwrap().unwrap();
    let err = store.apply_update(update).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Game, _)));
}

#[tokio::test]
async fn ping_succeeds() {
    let store = store().await;
    store.ping().await.unwrap();
}
