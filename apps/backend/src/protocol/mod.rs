pub mod game_view;

pub use game_view::{GameEnvelope, GameView, LetterResult, TryView};
