//! Wire shapes for game sessions.
//!
//! The target word is only exposed once the game has ended.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::evaluation::LetterOutcome;
use crate::domain::mode::GameMode;
use crate::domain::session::{GameSession, GameStatus, GuessRecord};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterResult {
    pub letter: String,
    pub status: LetterOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TryView {
    pub guess_word: String,
    pub letter_result_array: Vec<LetterResult>,
    pub is_correct: bool,
}

impl From<&GuessRecord> for TryView {
    fn from(record: &GuessRecord) -> Self {
        Self {
            guess_word: record.guess_word.clone(),
            letter_result_array: record
                .letters()
                .map(|(letter, status)| LetterResult {
                    letter: letter.to_string(),
                    status,
                })
                .collect(),
            is_correct: record.is_correct,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_word: Option<String>,
    pub tries: Vec<TryView>,
    pub game_status: GameStatus,
    pub mode: GameMode,
    pub max_tries: u8,
    pub word_size: u8,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<&GameSession> for GameView {
    fn from(session: &GameSession) -> Self {
        Self {
            id: session.id,
            target_word: session
                .is_terminal()
                .then(|| session.target_word.clone()),
            tries: session.tries.iter().map(TryView::from).collect(),
            game_status: session.status,
            mode: session.mode,
            max_tries: session.max_guesses,
            word_size: session.word_length,
            created_at: session.created_at,
            updated_at: session.updated_at,
        }
    }
}

/// Body of every mutating game endpoint: a message alongside the view fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEnvelope {
    pub message: String,
    #[serde(flatten)]
    pub game: GameView,
}

impl GameEnvelope {
    pub fn new(message: impl Into<String>, session: &GameSession) -> Self {
        Self {
            message: message.into(),
            game: GameView::from(session),
        }
    }
}
