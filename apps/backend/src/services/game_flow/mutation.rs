use rand_chacha::ChaCha20Rng;
use tracing::{debug, info};

use super::GameFlowService;
use crate::domain::game_transition::{derive_game_transitions, GameTransition};
use crate::domain::state::Game;
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::games::{GameStore, StoreWrite};

#[derive(Debug)]
pub struct GameFlowMutationResult<R> {
    /// Stored record after the mutation; None once the game was deleted.
    pub final_game: Option<Game>,
    pub transitions: Vec<GameTransition>,
    pub value: R,
}

impl<S: GameStore> GameFlowService<S> {
    /// Apply `mutation` to a copy of the stored record under the per-id lock.
    ///
    /// The copy is written back only when `mutation` succeeds; a game left
    /// without players is deleted. The outer `Result` carries store failures,
    /// the inner one rule rejections.
    pub(super) fn run_mutation<R, F>(
        &self,
        game_id: &str,
        action: &'static str,
        mutation: F,
    ) -> Result<Result<GameFlowMutationResult<R>, DomainError>, AppError>
    where
        F: FnOnce(&mut Game, &mut ChaCha20Rng) -> Result<R, DomainError>,
    {
        let result = self.store.transact(game_id, |current| {
            let Some(current) = current else {
                let err = DomainError::not_found(NotFoundKind::Game, format!("Game {game_id} not found"));
                return (StoreWrite::Keep, Err(err));
            };

            let mut next = current.clone();
            let value = {
                let mut rng = self.rng.lock();
                mutation(&mut next, &mut *rng)
            };
            match value {
                Err(err) => (StoreWrite::Keep, Err(err)),
                Ok(value) => {
                    let deleted = next.players.is_empty();
                    let final_game = (!deleted).then_some(next);
                    let transitions = derive_game_transitions(Some(current), final_game.as_ref());
                    let write = match &final_game {
                        Some(game) => StoreWrite::Put(game.clone()),
                        None => StoreWrite::Delete,
                    };
                    let out = GameFlowMutationResult {
                        final_game,
                        transitions,
                        value,
                    };
                    (write, Ok(out))
                }
            }
        })?;

        match &result {
            Ok(applied) => {
                log_transitions(game_id, action, &applied.transitions);
                self.publish(game_id)?;
            }
            Err(err) => {
                debug!(game_id, action, error = %err, "Request ignored");
            }
        }
        Ok(result)
    }
}

pub(super) fn log_transitions(game_id: &str, action: &'static str, transitions: &[GameTransition]) {
    for transition in transitions {
        info!(game_id, action, transition = ?transition, "Game transition");
    }
}
