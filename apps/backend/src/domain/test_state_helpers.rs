//! Test-only game builders for domain unit tests.

use crate::domain::lobby::{join, new_game};
use crate::domain::rules::PLAYERS;
use crate::domain::state::{Game, GamePhase, Seat};
use crate::domain::{Ends, Tile};

pub const NAMES: [&str; PLAYERS] = ["Ana", "Beto", "Carla", "Dario"];

pub fn player_id(seat: Seat) -> String {
    format!("p{seat}")
}

/// Four seated players in the lobby; seat 0 is host.
pub fn full_lobby() -> Game {
    let mut game = new_game("TEST01", player_id(0), NAMES[0]);
    for (seat, name) in NAMES.iter().enumerate().skip(1) {
        #[allow(clippy::expect_used)]
        join(&mut game, player_id(seat), *name).expect("seat available");
    }
    game
}

/// A round in progress with hand-picked hands and layout.
pub fn round_with(
    hands: [Vec<Tile>; PLAYERS],
    layout: Vec<Tile>,
    current: Seat,
    starter: Seat,
) -> Game {
    let mut game = full_lobby();
    for (player, hand) in game.players.iter_mut().zip(hands) {
        player.hand = hand;
    }
    game.layout_ends = match (layout.first(), layout.last()) {
        (Some(first), Some(last)) => Some(Ends {
            left: first.a(),
            right: last.b(),
        }),
        _ => None,
    };
    game.layout = layout;
    game.phase = GamePhase::Playing;
    game.current_player_index = current;
    game.round_starter_index = starter;
    game
}
