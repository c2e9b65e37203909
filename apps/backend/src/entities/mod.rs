pub mod game_sessions;

pub use game_sessions::Entity as GameSessions;
pub use game_sessions::Model as GameSessionRow;
