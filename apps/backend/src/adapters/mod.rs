pub mod games_sea;
pub mod in_memory;

pub use games_sea::SeaOrmGameStore;
pub use in_memory::InMemoryGameStore;
