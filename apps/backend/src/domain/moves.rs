use tracing::debug;

use crate::domain::layout::{play_tile, Placement};
use crate::domain::legality::has_legal_play;
use crate::domain::resolution::{blocked_result, domino_result};
use crate::domain::rules::PASSES_TO_BLOCK;
use crate::domain::scoring::apply_round_result;
use crate::domain::state::{Game, GamePhase, Move, RoundResult, Seat};
use crate::domain::turns::{advance_turn, require_turn};
use crate::domain::TileId;
use crate::errors::domain::{DomainError, ValidationKind};

/// What a successful move changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    pub seat: Seat,
    /// Set for plays.
    pub placement: Option<Placement>,
    /// Set when the move ended the round.
    pub round_result: Option<RoundResult>,
    /// Seat to act next while the round continues.
    pub next_turn: Option<Seat>,
}

/// Apply a play or a pass by `seat`, enforcing phase, turn and legality.
///
/// Rule checks run before the first write; callers still apply moves to a
/// copy so that an `Err` never leaves a half-updated record behind.
pub fn apply_move(game: &mut Game, seat: Seat, mv: &Move) -> Result<MoveResult, DomainError> {
    game.require_phase(GamePhase::Playing, "apply_move")?;
    if seat >= game.players.len() {
        return Err(DomainError::validation(
            ValidationKind::NotSeated,
            format!("No player at seat {seat}"),
        ));
    }
    require_turn(game, seat)?;

    match mv {
        Move::Pass => pass(game, seat),
        Move::Play { tile } => play(game, seat, tile.id()),
    }
}

fn pass(game: &mut Game, seat: Seat) -> Result<MoveResult, DomainError> {
    if has_legal_play(&game.players[seat].hand, game.layout_ends) {
        return Err(DomainError::validation(
            ValidationKind::MustPlay,
            format!("Seat {seat} holds a playable tile and cannot pass"),
        ));
    }

    game.passes = game.passes.saturating_add(1);
    game.game_message = format!("{} pasó.", game.players[seat].name);
    debug!(game_id = %game.id, seat, passes = game.passes, "Pass");

    if game.passes >= PASSES_TO_BLOCK {
        let result = blocked_result(game)?;
        apply_round_result(game, result.clone());
        return Ok(MoveResult {
            seat,
            placement: None,
            round_result: Some(result),
            next_turn: None,
        });
    }

    let next = advance_turn(game);
    Ok(MoveResult {
        seat,
        placement: None,
        round_result: None,
        next_turn: Some(next),
    })
}

fn play(game: &mut Game, seat: Seat, id: TileId) -> Result<MoveResult, DomainError> {
    let placement = play_tile(game, seat, id)?;
    let placed = placement.placed;
    game.game_message = format!(
        "{} jugó {}|{}.",
        game.players[seat].name,
        placed.a(),
        placed.b()
    );
    debug!(game_id = %game.id, seat, tile = %placed, side = ?placement.side, "Play");

    if game.players[seat].hand.is_empty() {
        let result = domino_result(game, seat, &placement)?;
        apply_round_result(game, result.clone());
        return Ok(MoveResult {
            seat,
            placement: Some(placement),
            round_result: Some(result),
            next_turn: None,
        });
    }

    let next = advance_turn(game);
    Ok(MoveResult {
        seat,
        placement: Some(placement),
        round_result: None,
        next_turn: Some(next),
    })
}
