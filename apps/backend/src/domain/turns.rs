use crate::domain::state::{next_seat, Game, Seat};
use crate::errors::domain::{DomainError, ValidationKind};

/// Only the current seat may act.
pub fn require_turn(game: &Game, seat: Seat) -> Result<(), DomainError> {
    if game.current_player_index == seat {
        Ok(())
    } else {
        Err(DomainError::validation(
            ValidationKind::OutOfTurn,
            format!(
                "Seat {seat} acted but it is seat {}'s turn",
                game.current_player_index
            ),
        ))
    }
}

/// Hand the turn to the next seat. No seat is ever skipped: a player without
/// a legal tile still has to pass explicitly.
pub fn advance_turn(game: &mut Game) -> Seat {
    game.current_player_index = next_seat(game.current_player_index);
    game.current_player_index
}
