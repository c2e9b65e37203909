//! Domain-level error type used across services and adapters.
//!
//! This error type is HTTP- and DB-agnostic. Handlers return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the `From<DomainError> for AppError` implementation in `crate::error`.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Which rule a rejected configuration or request broke.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// maxTries outside the range the game mode allows
    MaxGuesses,
    /// wordSize outside the lengths the game mode allows
    WordLength,
    /// Operation not supported by the session's game mode
    ModeRule,
    InvalidGameId,
    Other(String),
}

/// Infra error kinds to distinguish operational failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    Timeout,
    DbUnavailable,
    DataCorruption,
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Game,
    /// No word of the requested length in the word source
    Word,
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    /// The session changed between read and write
    OptimisticLock,
    /// Identifier already taken on insert
    DuplicateId,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Bad configuration or request parameters
    Validation(ValidationKind, String),
    /// Guess not present in the dictionary; carries the normalized word
    InvalidWord(String),
    /// Session is in a terminal state and accepts no further moves
    NotPlayable(String),
    NotFound(NotFoundKind, String),
    Conflict(ConflictKind, String),
    /// Persistence/operational failures
    Infra(InfraErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation error {kind:?}: {d}"),
            DomainError::InvalidWord(w) => write!(f, "invalid word: {w} is not a valid word"),
            DomainError::NotPlayable(d) => write!(f, "not playable: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::Conflict(kind, d) => write!(f, "conflict {kind:?}: {d}"),
            DomainError::Infra(kind, d) => write!(f, "infra {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn invalid_word(word: impl Into<String>) -> Self {
        Self::InvalidWord(word.into())
    }
    pub fn not_playable(detail: impl Into<String>) -> Self {
        Self::NotPlayable(detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }

    /// Shorthand for the common "game {id} not found" case.
    pub fn game_not_found(id: i64) -> Self {
        Self::not_found(NotFoundKind::Game, format!("Game {id} not found"))
    }
}
