use tracing::debug;

use super::{ActionOutcome, GameFlowService};
use crate::domain::moves::apply_move;
use crate::domain::state::Move;
use crate::error::AppError;
use crate::repos::games::GameStore;

impl<S: GameStore> GameFlowService<S> {
    /// Play a tile or pass for `player_id`.
    ///
    /// Seat, turn and legality are checked against the stored record inside
    /// the transaction; anything the rules reject is ignored.
    pub fn make_move(&self, game_id: &str, player_id: &str, mv: &Move) -> Result<ActionOutcome, AppError> {
        debug!(game_id, player_id, mv = ?mv, "Move submitted");
        let result = self.run_mutation(game_id, "make_move", |game, _rng| {
            let seat = game.require_seat(player_id)?;
            apply_move(game, seat, mv)
        })?;
        Ok(result.into())
    }
}
