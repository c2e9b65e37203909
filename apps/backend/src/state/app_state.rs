use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::repos::GameStore;
use crate::words::WordSource;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn GameStore>,
    pub words: Arc<dyn WordSource>,
    /// Database connection behind `store`, if any (used by health reporting)
    db: Option<DatabaseConnection>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn GameStore>,
        words: Arc<dyn WordSource>,
        db: Option<DatabaseConnection>,
    ) -> Self {
        Self { store, words, db }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }

    pub fn store(&self) -> &dyn GameStore {
        self.store.as_ref()
    }

    pub fn words(&self) -> &dyn WordSource {
        self.words.as_ref()
    }
}
