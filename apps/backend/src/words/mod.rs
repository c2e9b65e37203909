//! Dictionary access: target selection and guess membership.

pub mod embedded;
pub mod static_source;

pub use static_source::StaticWordSource;

use crate::errors::domain::DomainError;

/// Source of target words and judge of valid guesses.
pub trait WordSource: Send + Sync {
    /// A random upper-case word of exactly `length` letters.
    fn random_word(&self, length: u8) -> Result<String, DomainError>;

    /// Whether `word` (trimmed, case-insensitive) is in the dictionary.
    fn contains(&self, word: &str) -> bool;
}
