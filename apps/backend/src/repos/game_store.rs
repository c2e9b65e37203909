//! Persistence contract for game sessions.

use async_trait::async_trait;
use time::OffsetDateTime;

use crate::domain::mode::GameConfig;
use crate::domain::session::{GameSession, GameUpdate};
use crate::errors::domain::DomainError;

/// Store for the single record kind this service owns.
///
/// Implementations must apply [`GameUpdate`]s atomically and only when
/// `expected_version` matches the stored version, answering a mismatch with
/// `ConflictKind::OptimisticLock`.
#[async_trait]
pub trait GameStore: Send + Sync {
    /// Persist a new `Playing` session under a fresh id, greater than any
    /// stored one, and return it as stored. Concurrent calls never share an id.
    async fn create(
        &self,
        target_word: &str,
        config: GameConfig,
        now: OffsetDateTime,
    ) -> Result<GameSession, DomainError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<GameSession>, DomainError>;

    /// All sessions ordered by id.
    async fn find_all(&self) -> Result<Vec<GameSession>, DomainError>;

    /// Apply `update` and return the refreshed session.
    async fn apply_update(&self, update: GameUpdate) -> Result<GameSession, DomainError>;

    /// Cheap liveness probe for health reporting.
    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }
}
