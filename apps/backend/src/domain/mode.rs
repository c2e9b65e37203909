//! Game modes and the configuration rules each one owns.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, ValidationKind};

/// Guess budgets any mode may allow.
pub const MAX_GUESSES_RANGE: RangeInclusive<u8> = 5..=7;
/// Word lengths the word lists cover.
pub const WORD_LENGTHS: [u8; 3] = [4, 5, 6];

pub const DEFAULT_MAX_GUESSES: u8 = 6;
pub const DEFAULT_WORD_LENGTH: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Client-timed game; guess budget and word length are configurable.
    #[default]
    Speed,
    /// The standard game: six guesses, five letters, no clock.
    Classic,
}

impl GameMode {
    pub fn as_str(self) -> &'static str {
        match self {
            GameMode::Speed => "speed",
            GameMode::Classic => "classic",
        }
    }

    pub fn allowed_max_guesses(self) -> RangeInclusive<u8> {
        match self {
            GameMode::Speed => MAX_GUESSES_RANGE,
            GameMode::Classic => DEFAULT_MAX_GUESSES..=DEFAULT_MAX_GUESSES,
        }
    }

    pub fn allowed_word_lengths(self) -> &'static [u8] {
        match self {
            GameMode::Speed => &WORD_LENGTHS,
            GameMode::Classic => &[DEFAULT_WORD_LENGTH],
        }
    }

    /// Only clocked games can run out of time.
    pub fn supports_timeout(self) -> bool {
        matches!(self, GameMode::Speed)
    }

    /// Resolve optional request values against this mode's defaults and rules.
    pub fn configure(
        self,
        max_guesses: Option<u8>,
        word_length: Option<u8>,
    ) -> Result<GameConfig, DomainError> {
        let max_guesses = max_guesses.unwrap_or(DEFAULT_MAX_GUESSES);
        let word_length = word_length.unwrap_or(DEFAULT_WORD_LENGTH);

        let allowed = self.allowed_max_guesses();
        if !allowed.contains(&max_guesses) {
            return Err(DomainError::validation(
                ValidationKind::MaxGuesses,
                format!(
                    "maxTries must be between {} and {} for {} mode, got {max_guesses}",
                    allowed.start(),
                    allowed.end(),
                    self
                ),
            ));
        }

        let lengths = self.allowed_word_lengths();
        if !lengths.contains(&word_length) {
            return Err(DomainError::validation(
                ValidationKind::WordLength,
                format!(
                    "wordSize must be one of {lengths:?} for {} mode, got {word_length}",
                    self
                ),
            ));
        }

        Ok(GameConfig {
            mode: self,
            max_guesses,
            word_length,
        })
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "speed" => Ok(GameMode::Speed),
            "classic" => Ok(GameMode::Classic),
            other => Err(DomainError::validation(
                ValidationKind::Other("Mode".into()),
                format!("unknown game mode '{other}'"),
            )),
        }
    }
}

/// Validated session configuration. Only obtainable through
/// [`GameMode::configure`], so holding one means the rules were checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    mode: GameMode,
    max_guesses: u8,
    word_length: u8,
}

impl GameConfig {
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn max_guesses(&self) -> u8 {
        self.max_guesses
    }

    pub fn word_length(&self) -> u8 {
        self.word_length
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::Speed,
            max_guesses: DEFAULT_MAX_GUESSES,
            word_length: DEFAULT_WORD_LENGTH,
        }
    }
}
