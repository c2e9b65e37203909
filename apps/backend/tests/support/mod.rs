#![allow(dead_code)]

use std::sync::Arc;

use backend::domain::GameSession;
use backend::words::embedded::{FIVE_LETTER_WORDS, FOUR_LETTER_WORDS, SIX_LETTER_WORDS};
use backend::{build_state, AppState, DbKind, StaticWordSource};

/// In-memory state with a deterministic word picker.
pub async fn memory_state(seed: u64) -> AppState {
    build_state()
        .with_db(DbKind::Memory)
        .with_words(Arc::new(StaticWordSource::with_seed(seed)))
        .build()
        .await
        .expect("build in-memory state")
}

/// State backed by a migrated `sqlite::memory:` database.
pub async fn sqlite_state(seed: u64) -> AppState {
    build_state()
        .with_db(DbKind::SqliteMemory)
        .with_words(Arc::new(StaticWordSource::with_seed(seed)))
        .build()
        .await
        .expect("build sqlite state")
}

pub async fn load(state: &AppState, id: i64) -> GameSession {
    state
        .store()
        .find_by_id(id)
        .await
        .expect("store lookup")
        .expect("session exists")
}

/// A dictionary word of the same length as `target` that is not `target`.
pub fn wrong_guess(target: &str) -> &'static str {
    words_of_len(target.len())
        .iter()
        .copied()
        .find(|w| *w != target)
        .expect("word list has more than one word")
}

pub fn words_of_len(len: usize) -> &'static [&'static str] {
    match len {
        4 => FOUR_LETTER_WORDS,
        5 => FIVE_LETTER_WORDS,
        6 => SIX_LETTER_WORDS,
        other => panic!("no word list for length {other}"),
    }
}
