//! Error codes for the Wordle backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that appear
//! in HTTP responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Invalid game ID provided
    InvalidGameId,
    /// maxTries outside the allowed range
    InvalidMaxTries,
    /// wordSize outside the allowed lengths
    InvalidWordSize,
    /// Operation or parameter not allowed for this game mode
    ModeRuleViolation,
    /// Guess is not in the dictionary
    InvalidWord,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,

    // Resource Not Found
    /// Game not found
    GameNotFound,
    /// Word source has no word of the requested length
    WordNotFound,
    /// General not found error
    NotFound,

    // Business Logic Conflicts
    /// Game has already ended
    GameNotPlayable,
    /// Optimistic lock conflict
    OptimisticLock,
    /// Identifier already in use
    DuplicateId,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Database timeout (gateway timeout)
    DbTimeout,
    /// Stored data could not be decoded
    DataCorruption,
    /// Internal server error
    InternalError,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidGameId => "INVALID_GAME_ID",
            Self::InvalidMaxTries => "INVALID_MAX_TRIES",
            Self::InvalidWordSize => "INVALID_WORD_SIZE",
            Self::ModeRuleViolation => "MODE_RULE_VIOLATION",
            Self::InvalidWord => "INVALID_WORD",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::WordNotFound => "WORD_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::GameNotPlayable => "GAME_NOT_PLAYABLE",
            Self::OptimisticLock => "OPTIMISTIC_LOCK",
            Self::DuplicateId => "DUPLICATE_ID",
            Self::Conflict => "CONFLICT",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }

    /// Every code, for uniqueness checks.
    pub const ALL: &'static [ErrorCode] = &[
        Self::InvalidGameId,
        Self::InvalidMaxTries,
        Self::InvalidWordSize,
        Self::ModeRuleViolation,
        Self::InvalidWord,
        Self::ValidationError,
        Self::BadRequest,
        Self::GameNotFound,
        Self::WordNotFound,
        Self::NotFound,
        Self::GameNotPlayable,
        Self::OptimisticLock,
        Self::DuplicateId,
        Self::Conflict,
        Self::DbError,
        Self::DbUnavailable,
        Self::DbTimeout,
        Self::DataCorruption,
        Self::InternalError,
        Self::ConfigError,
    ];
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
