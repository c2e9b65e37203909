//! In-memory game store, used by the `memory` profile and by tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::Mutex;
use time::OffsetDateTime;
use tracing::debug;

use crate::domain::mode::GameConfig;
use crate::domain::session::{GameSession, GameUpdate};
use crate::errors::domain::{ConflictKind, DomainError};
use crate::repos::GameStore;

#[derive(Debug, Default)]
struct Sessions {
    by_id: BTreeMap<i64, GameSession>,
    last_id: i64,
}

#[derive(Debug, Default)]
pub struct InMemoryGameStore {
    inner: Mutex<Sessions>,
}

impl InMemoryGameStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GameStore for InMemoryGameStore {
    async fn create(
        &self,
        target_word: &str,
        config: GameConfig,
        now: OffsetDateTime,
    ) -> Result<GameSession, DomainError> {
        let mut inner = self.inner.lock();
        inner.last_id += 1;
        let session = GameSession::new(inner.last_id, target_word, config, now);
        inner.by_id.insert(session.id, session.clone());
        Ok(session)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<GameSession>, DomainError> {
        Ok(self.inner.lock().by_id.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<GameSession>, DomainError> {
        Ok(self.inner.lock().by_id.values().cloned().collect())
    }

    async fn apply_update(&self, update: GameUpdate) -> Result<GameSession, DomainError> {
        let mut inner = self.inner.lock();
        let session = inner
            .by_id
            .get_mut(&update.id)
            .ok_or_else(|| DomainError::game_not_found(update.id))?;

        if session.version != update.expected_version {
            debug!(
                game_id = update.id,
                expected = update.expected_version,
                actual = session.version,
                "Stale update rejected"
            );
            return Err(DomainError::conflict(
                ConflictKind::OptimisticLock,
                format!(
                    "Game {} was modified concurrently (expected version {}, actual version {})",
                    update.id, update.expected_version, session.version
                ),
            ));
        }

        session.apply(update);
        Ok(session.clone())
    }
}
