use super::{ActionOutcome, GameFlowService};
use crate::domain::lobby;
use crate::error::AppError;
use crate::repos::games::GameStore;

impl<S: GameStore> GameFlowService<S> {
    /// Host deals the first round from the lobby.
    pub fn start_game(&self, game_id: &str, player_id: &str) -> Result<ActionOutcome, AppError> {
        let result = self.run_mutation(game_id, "start_game", |game, rng| {
            lobby::start_game(game, player_id, rng)
        })?;
        Ok(result.into())
    }

    /// Host deals the next round after a round ended short of the target.
    pub fn start_new_round(&self, game_id: &str, player_id: &str) -> Result<ActionOutcome, AppError> {
        let result = self.run_mutation(game_id, "start_new_round", |game, rng| {
            lobby::next_round(game, player_id, rng)
        })?;
        Ok(result.into())
    }

    /// Host starts a new match once one has been won.
    pub fn reset_game(&self, game_id: &str, player_id: &str) -> Result<ActionOutcome, AppError> {
        let result = self.run_mutation(game_id, "reset_game", |game, rng| {
            lobby::reset_game(game, player_id, rng)
        })?;
        Ok(result.into())
    }
}
