//! The game session entity and its state machine.
//!
//! Sessions never mutate themselves in place from service code. Every
//! transition is computed as a [`GameUpdate`] that names the version it was
//! derived from; stores apply it only if that version is still current.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::evaluation::{evaluate, normalize_word, LetterOutcome};
use super::mode::{GameConfig, GameMode};
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    #[serde(rename = "playing")]
    Playing,
    #[serde(rename = "won")]
    Won,
    #[serde(rename = "lost")]
    Lost,
    #[serde(rename = "timeout")]
    TimedOut,
}

impl GameStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            GameStatus::Playing => "playing",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
            GameStatus::TimedOut => "timeout",
        }
    }

    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "playing" => Ok(GameStatus::Playing),
            "won" => Ok(GameStatus::Won),
            "lost" => Ok(GameStatus::Lost),
            "timeout" => Ok(GameStatus::TimedOut),
            other => Err(DomainError::validation(
                ValidationKind::Other("GameStatus".into()),
                format!("unknown game status '{other}'"),
            )),
        }
    }
}

/// One accepted guess. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess_word: String,
    pub outcomes: Vec<LetterOutcome>,
    pub is_correct: bool,
}

impl GuessRecord {
    pub fn new(guess: &str, target: &str) -> Self {
        let guess_word = normalize_word(guess);
        let outcomes = evaluate(&guess_word, target);
        let is_correct = guess_word == normalize_word(target);
        Self {
            guess_word,
            outcomes,
            is_correct,
        }
    }

    /// Pairs each guessed letter with its outcome.
    pub fn letters(&self) -> impl Iterator<Item = (char, LetterOutcome)> + '_ {
        self.guess_word.chars().zip(self.outcomes.iter().copied())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    pub id: i64,
    pub target_word: String,
    pub tries: Vec<GuessRecord>,
    pub status: GameStatus,
    pub mode: GameMode,
    pub max_guesses: u8,
    pub word_length: u8,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    /// Optimistic concurrency token, bumped on every applied update.
    pub version: i32,
}

/// A pending change to a stored session.
///
/// `tries` is the full history after the change. It always extends the
/// history the update was derived from, so applying it against the expected
/// version is an append.
#[derive(Debug, Clone, PartialEq)]
pub struct GameUpdate {
    pub id: i64,
    pub expected_version: i32,
    pub tries: Vec<GuessRecord>,
    pub status: GameStatus,
    pub updated_at: OffsetDateTime,
}

impl GameSession {
    /// A fresh `Playing` session with empty history.
    pub fn new(id: i64, target_word: &str, config: GameConfig, now: OffsetDateTime) -> Self {
        Self {
            id,
            target_word: normalize_word(target_word),
            tries: Vec::new(),
            status: GameStatus::Playing,
            mode: config.mode(),
            max_guesses: config.max_guesses(),
            word_length: config.word_length(),
            created_at: now,
            updated_at: now,
            version: 1,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn ensure_playable(&self) -> Result<(), DomainError> {
        if self.status.is_terminal() {
            return Err(DomainError::not_playable(format!(
                "Game {} is over ({})",
                self.id, self.status
            )));
        }
        Ok(())
    }

    /// Status after one more guess, before it is appended.
    pub fn determine_status(&self, is_exact: bool) -> GameStatus {
        if is_exact {
            GameStatus::Won
        } else if self.tries.len() + 1 >= usize::from(self.max_guesses) {
            GameStatus::Lost
        } else {
            self.status
        }
    }

    /// Evaluate `guess` against the target and build the resulting update.
    ///
    /// Dictionary membership is the caller's concern; this only enforces the
    /// lifecycle rules.
    pub fn guess_update(&self, guess: &str, now: OffsetDateTime) -> Result<GameUpdate, DomainError> {
        self.ensure_playable()?;

        let record = GuessRecord::new(guess, &self.target_word);
        let status = self.determine_status(record.is_correct);

        let mut tries = self.tries.clone();
        tries.push(record);

        Ok(self.update_to(tries, status, now))
    }

    /// Force the session to `Lost`. `None` when it already is.
    pub fn forfeit_update(&self, now: OffsetDateTime) -> Result<Option<GameUpdate>, DomainError> {
        self.end_update(GameStatus::Lost, now)
    }

    /// Force the session to `TimedOut`. `None` when it already is.
    pub fn timeout_update(&self, now: OffsetDateTime) -> Result<Option<GameUpdate>, DomainError> {
        if !self.mode.supports_timeout() {
            return Err(DomainError::validation(
                ValidationKind::ModeRule,
                format!("{} games cannot time out", self.mode),
            ));
        }
        self.end_update(GameStatus::TimedOut, now)
    }

    fn end_update(
        &self,
        target: GameStatus,
        now: OffsetDateTime,
    ) -> Result<Option<GameUpdate>, DomainError> {
        if self.status == target {
            return Ok(None);
        }
        self.ensure_playable()?;
        Ok(Some(self.update_to(self.tries.clone(), target, now)))
    }

    fn update_to(&self, tries: Vec<GuessRecord>, status: GameStatus, now: OffsetDateTime) -> GameUpdate {
        GameUpdate {
            id: self.id,
            expected_version: self.version,
            tries,
            status,
            updated_at: now,
        }
    }

    /// Apply an update whose version has already been checked by the store.
    pub fn apply(&mut self, update: GameUpdate) {
        self.tries = update.tries;
        self.status = update.status;
        self.updated_at = update.updated_at;
        self.version += 1;
    }
}
