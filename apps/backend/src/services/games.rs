//! Game session use cases: create, guess, list, forfeit, timeout.
//!
//! Every operation receives the store and word source explicitly and
//! re-reads the session before changing it. Writes are single conditional
//! updates, so two racing requests on one session cannot both succeed.

use time::OffsetDateTime;
use tracing::{debug, info, warn};

use crate::domain::evaluation::normalize_word;
use crate::domain::mode::GameMode;
use crate::domain::session::{GameSession, GameUpdate};
use crate::errors::domain::DomainError;
use crate::repos::GameStore;
use crate::words::WordSource;

/// Current time at the precision every store keeps (microseconds), so a
/// returned session compares equal to the same session read back later.
fn now() -> OffsetDateTime {
    let now = OffsetDateTime::now_utc();
    now.replace_microsecond(now.microsecond()).unwrap_or(now)
}

/// Parameters for starting a game. Omitted values take the mode's defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NewGame {
    pub mode: GameMode,
    pub max_guesses: Option<u8>,
    pub word_length: Option<u8>,
}

/// Game domain service.
#[derive(Debug, Default, Clone, Copy)]
pub struct GameService;

impl GameService {
    pub fn new() -> Self {
        Self
    }

    pub async fn create(
        &self,
        store: &dyn GameStore,
        words: &dyn WordSource,
        request: NewGame,
    ) -> Result<GameSession, DomainError> {
        let config = request
            .mode
            .configure(request.max_guesses, request.word_length)?;
        let target = words.random_word(config.word_length())?;
        let session = store.create(&target, config, now()).await?;

        info!(
            game_id = session.id,
            mode = %config.mode(),
            max_tries = config.max_guesses(),
            word_size = config.word_length(),
            "Game created"
        );
        debug!(game_id = session.id, target = %session.target_word, "Target word selected");
        Ok(session)
    }

    pub async fn find(&self, store: &dyn GameStore, id: i64) -> Result<GameSession, DomainError> {
        store
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::game_not_found(id))
    }

    pub async fn find_all(&self, store: &dyn GameStore) -> Result<Vec<GameSession>, DomainError> {
        store.find_all().await
    }

    /// Evaluate and record one guess.
    ///
    /// Order of checks: the session must exist, must be playing, and the
    /// guess must be a dictionary word of the session's length.
    pub async fn submit_guess(
        &self,
        store: &dyn GameStore,
        words: &dyn WordSource,
        id: i64,
        guess: &str,
    ) -> Result<GameSession, DomainError> {
        let session = self.find(store, id).await?;
        session.ensure_playable()?;

        let guess = normalize_word(guess);
        if guess.chars().count() != usize::from(session.word_length) || !words.contains(&guess) {
            warn!(game_id = id, guess = %guess, "Guess rejected: not a valid word");
            return Err(DomainError::invalid_word(guess));
        }

        let update = session.guess_update(&guess, now())?;
        let updated = store.apply_update(update).await?;

        info!(
            game_id = id,
            tries = updated.tries.len(),
            status = %updated.status,
            "Guess recorded"
        );
        Ok(updated)
    }

    /// Give up: the session becomes `Lost`. Repeating a forfeit is a no-op.
    pub async fn forfeit(&self, store: &dyn GameStore, id: i64) -> Result<GameSession, DomainError> {
        let session = self.find(store, id).await?;
        let update = session.forfeit_update(now())?;
        self.finish(store, session, update, "Game forfeited").await
    }

    /// The client clock ran out: the session becomes `TimedOut`.
    pub async fn timeout(&self, store: &dyn GameStore, id: i64) -> Result<GameSession, DomainError> {
        let session = self.find(store, id).await?;
        let update = session.timeout_update(now())?;
        self.finish(store, session, update, "Game timed out").await
    }

    async fn finish(
        &self,
        store: &dyn GameStore,
        session: GameSession,
        update: Option<GameUpdate>,
        message: &'static str,
    ) -> Result<GameSession, DomainError> {
        let Some(update) = update else {
            debug!(game_id = session.id, status = %session.status, "Already ended; nothing to do");
            return Ok(session);
        };
        let updated = store.apply_update(update).await?;
        info!(game_id = updated.id, status = %updated.status, "{message}");
        Ok(updated)
    }
}
