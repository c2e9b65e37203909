//! Row <-> domain conversions for the game_sessions table.

use serde::{Deserialize, Serialize};

use crate::domain::evaluation::LetterOutcome;
use crate::domain::mode::GameMode;
use crate::domain::session::{GameSession, GameStatus, GuessRecord};
use crate::entities::game_sessions::{Model, SessionMode, SessionStatus};
use crate::errors::domain::{DomainError, InfraErrorKind};

/// One element of the JSON array in the `tries` column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredTry {
    pub guess_word: String,
    pub letter_results: Vec<LetterOutcome>,
    pub is_correct: bool,
}

impl From<&GuessRecord> for StoredTry {
    fn from(r: &GuessRecord) -> Self {
        Self {
            guess_word: r.guess_word.clone(),
            letter_results: r.outcomes.clone(),
            is_correct: r.is_correct,
        }
    }
}

impl From<StoredTry> for GuessRecord {
    fn from(t: StoredTry) -> Self {
        Self {
            guess_word: t.guess_word,
            outcomes: t.letter_results,
            is_correct: t.is_correct,
        }
    }
}

pub fn encode_tries(tries: &[GuessRecord]) -> Result<String, DomainError> {
    let stored: Vec<StoredTry> = tries.iter().map(StoredTry::from).collect();
    serde_json::to_string(&stored).map_err(|e| {
        DomainError::infra(
            InfraErrorKind::Other("Serialize".into()),
            format!("failed to encode tries: {e}"),
        )
    })
}

pub fn decode_tries(id: i64, raw: &str) -> Result<Vec<GuessRecord>, DomainError> {
    let stored: Vec<StoredTry> = serde_json::from_str(raw).map_err(|e| {
        DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!("game {id} has unreadable tries: {e}"),
        )
    })?;
    Ok(stored.into_iter().map(GuessRecord::from).collect())
}

impl From<GameStatus> for SessionStatus {
    fn from(s: GameStatus) -> Self {
        match s {
            GameStatus::Playing => SessionStatus::Playing,
            GameStatus::Won => SessionStatus::Won,
            GameStatus::Lost => SessionStatus::Lost,
            GameStatus::TimedOut => SessionStatus::Timeout,
        }
    }
}

impl From<SessionStatus> for GameStatus {
    fn from(s: SessionStatus) -> Self {
        match s {
            SessionStatus::Playing => GameStatus::Playing,
            SessionStatus::Won => GameStatus::Won,
            SessionStatus::Lost => GameStatus::Lost,
            SessionStatus::Timeout => GameStatus::TimedOut,
        }
    }
}

impl From<GameMode> for SessionMode {
    fn from(m: GameMode) -> Self {
        match m {
            GameMode::Speed => SessionMode::Speed,
            GameMode::Classic => SessionMode::Classic,
        }
    }
}

impl From<SessionMode> for GameMode {
    fn from(m: SessionMode) -> Self {
        match m {
            SessionMode::Speed => GameMode::Speed,
            SessionMode::Classic => GameMode::Classic,
        }
    }
}

fn small_to_u8(id: i64, column: &str, value: i16) -> Result<u8, DomainError> {
    u8::try_from(value).map_err(|_| {
        DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!("game {id} has out-of-range {column}: {value}"),
        )
    })
}

impl TryFrom<Model> for GameSession {
    type Error = DomainError;

    fn try_from(row: Model) -> Result<Self, Self::Error> {
        Ok(GameSession {
            id: row.id,
            tries: decode_tries(row.id, &row.tries)?,
            max_guesses: small_to_u8(row.id, "max_tries", row.max_tries)?,
            word_length: small_to_u8(row.id, "word_size", row.word_size)?,
            target_word: row.target_word,
            status: row.game_status.into(),
            mode: row.mode.into(),
            created_at: row.created_at,
            updated_at: row.updated_at,
            version: row.lock_version,
        })
    }
}
