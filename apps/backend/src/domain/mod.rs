//! Domain layer: pure game logic types and helpers.

pub mod dealing;
pub mod fixtures;
pub mod game_transition;
pub mod layout;
pub mod legality;
pub mod lobby;
pub mod moves;
pub mod resolution;
pub mod round_start;
pub mod rules;
pub mod scoring;
pub mod state;
pub mod tiles_parsing;
pub mod tiles_serde;
pub mod tiles_types;
pub mod turns;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_props_conservation;

// Re-exports for ergonomics
pub use dealing::deal_hands;
pub use game_transition::{derive_game_transitions, GameTransition};
pub use layout::Placement;
pub use legality::{has_legal_play, is_legal, legal_tiles};
pub use lobby::LeaveOutcome;
pub use moves::{apply_move, MoveResult};
pub use state::{Game, GamePhase, Move, Player, RoundEndReason, RoundResult, Scores, Seat, Team};
pub use tiles_parsing::try_parse_tiles;
pub use tiles_types::{Ends, Side, Tile, TileId};
