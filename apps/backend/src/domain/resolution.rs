//! Round termination: domino (a hand emptied) and trancado (blocked).

use tracing::debug;

use crate::domain::layout::Placement;
use crate::domain::state::{Game, RoundEndReason, RoundResult, Seat};
use crate::errors::domain::DomainError;

/// Capicúa: the winning tile also matches the end it leaves open.
pub fn is_capicua(placement: &Placement) -> bool {
    placement.placed.has_face(placement.free_end)
}

/// Result for a round won by `winner` emptying their hand with `placement`.
///
/// Points are the pips left in the opposing team's hands only.
pub fn domino_result(
    game: &Game,
    winner: Seat,
    placement: &Placement,
) -> Result<RoundResult, DomainError> {
    let player = game.players.get(winner).ok_or_else(|| {
        DomainError::validation_other(format!("Invariant violated: no player at seat {winner}"))
    })?;
    let points: u32 = game
        .players
        .iter()
        .filter(|p| p.team != player.team)
        .map(|p| p.hand_pips())
        .sum();

    Ok(RoundResult {
        winning_team: player.team,
        points,
        reason: RoundEndReason::Domino,
        capicua: is_capicua(placement),
        winner_name: player.name.clone(),
    })
}

/// Winner of a blocked round: lowest remaining pips.
///
/// On a tie the earliest tied seat is kept, unless a later tied seat is on
/// the round starter's team and the kept one is not. Three-way ties are
/// resolved by the same pairwise rule, which is known not to generalise.
pub fn blocked_winner(game: &Game) -> Option<Seat> {
    let starter_team = game.players.get(game.round_starter_index)?.team;

    let mut best: Option<(Seat, u32)> = None;
    for (seat, player) in game.players.iter().enumerate() {
        let pips = player.hand_pips();
        best = match best {
            None => Some((seat, pips)),
            Some((_, best_pips)) if pips < best_pips => Some((seat, pips)),
            Some((best_seat, best_pips)) if pips == best_pips => {
                let incumbent_on_starter_team = game.players[best_seat].team == starter_team;
                if player.team == starter_team && !incumbent_on_starter_team {
                    Some((seat, pips))
                } else {
                    Some((best_seat, best_pips))
                }
            }
            keep => keep,
        };
    }
    best.map(|(seat, _)| seat)
}

/// Result for a blocked round.
///
/// Points are the pips of every other player, the winner's partner included.
/// Capicúa never applies.
pub fn blocked_result(game: &Game) -> Result<RoundResult, DomainError> {
    let winner = blocked_winner(game).ok_or_else(|| {
        DomainError::validation_other("Invariant violated: blocked round without players")
    })?;
    let points: u32 = game
        .players
        .iter()
        .enumerate()
        .filter(|(seat, _)| *seat != winner)
        .map(|(_, p)| p.hand_pips())
        .sum();
    let player = &game.players[winner];
    debug!(
        game_id = %game.id,
        winner_seat = winner,
        winner_pips = player.hand_pips(),
        points,
        "Blocked round resolved"
    );

    Ok(RoundResult {
        winning_team: player.team,
        points,
        reason: RoundEndReason::Blocked,
        capicua: false,
        winner_name: player.name.clone(),
    })
}
