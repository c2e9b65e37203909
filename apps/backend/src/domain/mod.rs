//! Domain layer: pure game logic types and helpers.

pub mod evaluation;
pub mod mode;
pub mod session;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_props_evaluation;

// Re-exports for ergonomics
pub use evaluation::{evaluate, normalize_word, LetterOutcome};
pub use mode::{GameConfig, GameMode};
pub use session::{GameSession, GameStatus, GameUpdate, GuessRecord};
