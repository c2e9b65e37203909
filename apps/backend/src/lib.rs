#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod entities;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod infra;
pub mod middleware;
pub mod protocol;
pub mod repos;
pub mod routes;
pub mod services;
pub mod state;
pub mod telemetry;
pub mod test_support;
pub mod trace_ctx;
pub mod words;

// Re-exports for public API
pub use adapters::{InMemoryGameStore, SeaOrmGameStore};
pub use config::db::{db_url, DbKind};
pub use domain::{GameMode, GameSession, GameStatus, LetterOutcome};
pub use error::AppError;
pub use errors::{DomainError, ErrorCode};
pub use extractors::game_id::GameId;
pub use infra::db::connect_db;
pub use infra::state::{build_state, StateBuilder};
pub use middleware::cors::cors_middleware;
pub use middleware::request_trace::RequestTrace;
pub use middleware::structured_logger::StructuredLogger;
pub use middleware::trace_span::TraceSpan;
pub use repos::GameStore;
pub use services::{GameService, NewGame};
pub use state::app_state::AppState;
pub use words::{StaticWordSource, WordSource};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
