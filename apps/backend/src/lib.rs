#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod realtime;
pub mod repos;
pub mod services;
pub mod utils;

// Re-exports for public API
pub use adapters::games_memory::InMemoryGameStore;
pub use config::engine::EngineConfig;
pub use domain::{Game, GamePhase, Move, Player, RoundEndReason, RoundResult, Scores, Team, Tile, TileId};
pub use error::AppError;
pub use errors::ErrorCode;
pub use realtime::hub::Subscription;
pub use realtime::protocol::GameUpdate;
pub use repos::games::{GameStore, StoreWrite};
pub use services::game_flow::{ActionOutcome, GameFlowService};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
