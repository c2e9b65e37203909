use std::sync::Arc;

use crate::adapters::{InMemoryGameStore, SeaOrmGameStore};
use crate::config::db::DbKind;
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::repos::GameStore;
use crate::state::app_state::AppState;
use crate::words::{StaticWordSource, WordSource};

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    db_kind: DbKind,
    words: Option<Arc<dyn WordSource>>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            db_kind: DbKind::Memory,
            words: None,
        }
    }

    pub fn with_db(mut self, kind: DbKind) -> Self {
        self.db_kind = kind;
        self
    }

    pub fn with_words(mut self, words: Arc<dyn WordSource>) -> Self {
        self.words = Some(words);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let words = self
            .words
            .unwrap_or_else(|| Arc::new(StaticWordSource::new()));

        let conn = bootstrap_db(self.db_kind).await?;

        let store: Arc<dyn GameStore> = match &conn {
            Some(conn) => Arc::new(SeaOrmGameStore::new(conn.clone())),
            None => Arc::new(InMemoryGameStore::new()),
        };

        Ok(AppState::new(store, words, conn))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
