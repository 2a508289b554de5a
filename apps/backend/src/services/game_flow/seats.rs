use tracing::info;

use super::mutation::log_transitions;
use super::{ActionOutcome, GameFlowService};
use crate::domain::game_transition::derive_game_transitions;
use crate::domain::lobby::{self, LeaveOutcome};
use crate::domain::state::{Game, Player};
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError};
use crate::repos::games::{GameStore, StoreWrite};
use crate::utils::join_code::{generate_join_code, generate_player_id};

/// Fresh ids to try before giving up on creation.
const CREATE_ATTEMPTS: usize = 8;

impl<S: GameStore> GameFlowService<S> {
    /// Open a new game with `player_name` seated at 0 as host.
    pub fn create_game(&self, player_name: &str) -> Result<(Game, Player), AppError> {
        let host_id = generate_player_id();
        for _ in 0..CREATE_ATTEMPTS {
            let game_id = {
                let mut rng = self.rng.lock();
                generate_join_code(&mut *rng, self.config.game_id_len)
            };
            let game = lobby::new_game(game_id.as_str(), host_id.as_str(), player_name);

            let created = self.store.transact(&game_id, |current| match current {
                Some(_) => (StoreWrite::Keep, false),
                None => (StoreWrite::Put(game.clone()), true),
            })?;
            if !created {
                continue;
            }

            info!(game_id = %game.id, host_id = %host_id, "Game created");
            log_transitions(&game_id, "create_game", &derive_game_transitions(None, Some(&game)));
            self.publish(&game_id)?;
            let host = game.players[0].clone();
            return Ok((game, host));
        }
        Err(DomainError::conflict(
            ConflictKind::GameIdTaken,
            format!("No free game id after {CREATE_ATTEMPTS} attempts"),
        )
        .into())
    }

    /// Seat `player_name` at the next free index. Unknown games and full
    /// tables are reported, not ignored.
    pub fn join_game(&self, game_id: &str, player_name: &str) -> Result<(Game, Player), AppError> {
        let player_id = generate_player_id();
        let result = self.run_mutation(game_id, "join_game", |game, _rng| {
            lobby::join(game, player_id.as_str(), player_name)
        })?;
        let applied = result.map_err(AppError::from)?;
        let game = applied.final_game.ok_or_else(|| {
            AppError::internal(format!("Game {game_id} vanished during join"))
        })?;
        Ok((game, applied.value))
    }

    /// Remove `player_id` from the table. The last player out deletes the
    /// game. Unknown games and unseated players are ignored.
    pub fn leave_game(&self, game_id: &str, player_id: &str) -> Result<ActionOutcome, AppError> {
        let result = self.run_mutation(game_id, "leave_game", |game, _rng| lobby::leave(game, player_id))?;
        if let Ok(applied) = &result {
            if applied.value == LeaveOutcome::Emptied {
                info!(game_id, "Last player left; game deleted");
            }
        }
        Ok(result.into())
    }
}
