pub mod game_id;
pub mod validated_json;

pub use game_id::GameId;
pub use validated_json::{JsonOrDefault, ValidatedJson};
