//! Round initialisation: deal, choose the opener, reset round-scoped state.

use rand::Rng;
use tracing::{debug, warn};

use crate::domain::dealing::deal_hands;
use crate::domain::rules::{MAX_PIP, PLAYERS};
use crate::domain::state::{Game, GamePhase, Seat};
use crate::errors::domain::DomainError;

/// Seat holding the double-six, if any.
pub fn double_six_holder(game: &Game) -> Option<Seat> {
    game.players.iter().position(|p| {
        p.hand
            .iter()
            .any(|t| t.is_double() && t.a() == MAX_PIP)
    })
}

/// Deal a fresh round and put the game into Playing.
///
/// On the first round of a match (both scores zero) the double-six holder
/// opens, falling back to seat 0. Any later round opens at `starter_index`;
/// rotation is the caller's concern. Returns the opening seat.
pub fn start_round<R: Rng>(
    game: &mut Game,
    starter_index: Seat,
    rng: &mut R,
) -> Result<Seat, DomainError> {
    game.require_full_table()?;
    if starter_index >= PLAYERS {
        return Err(DomainError::validation_other(format!(
            "Invariant violated: starter seat {starter_index} out of range"
        )));
    }

    let hands = deal_hands(rng);
    for (player, hand) in game.players.iter_mut().zip(hands) {
        player.hand = hand;
    }

    let starter = if game.scores.is_fresh() {
        double_six_holder(game).unwrap_or_else(|| {
            warn!(game_id = %game.id, "No double-six dealt; seat 0 opens");
            0
        })
    } else {
        starter_index
    };

    game.layout.clear();
    game.layout_ends = None;
    game.passes = 0;
    game.round_result = None;
    game.phase = GamePhase::Playing;
    game.current_player_index = starter;
    game.round_starter_index = starter;
    game.game_message = format!("Inicia la ronda. Empieza {}.", game.players[starter].name);

    debug!(game_id = %game.id, starter, "Round dealt");
    Ok(starter)
}
