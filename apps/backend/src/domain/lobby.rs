//! Seats and host-driven lifecycle transitions:
//! WAITING_FOR_PLAYERS → PLAYING → ROUND_OVER/GAME_OVER → PLAYING.

use rand::Rng;
use tracing::info;

use crate::domain::round_start::start_round;
use crate::domain::rules::PLAYERS;
use crate::domain::state::{
    next_seat, team_for_seat, Game, GamePhase, Player, Scores, Seat,
};
use crate::errors::domain::{ConflictKind, DomainError};

pub const WAITING_MESSAGE: &str = "Esperando a que se unan los jugadores...";

/// Fresh match record with the creator seated at 0 as host.
pub fn new_game(game_id: impl Into<String>, host_id: impl Into<String>, host_name: impl Into<String>) -> Game {
    let host = Player::new(host_id, host_name, 0, true);
    Game {
        id: game_id.into(),
        host_id: host.id.clone(),
        players: vec![host],
        phase: GamePhase::WaitingForPlayers,
        layout: Vec::new(),
        layout_ends: None,
        current_player_index: 0,
        scores: Scores::default(),
        round_starter_index: 0,
        passes: 0,
        round_result: None,
        game_message: WAITING_MESSAGE.to_string(),
    }
}

/// Seat a new player at the next free index.
pub fn join(game: &mut Game, player_id: impl Into<String>, name: impl Into<String>) -> Result<Player, DomainError> {
    if game.players.len() >= PLAYERS {
        return Err(DomainError::conflict(
            ConflictKind::GameFull,
            format!("Game {} already has {PLAYERS} players", game.id),
        ));
    }
    let seat = game.players.len();
    let player = Player::new(player_id, name, seat, false);
    game.game_message = format!("{} se ha unido a la partida.", player.name);
    game.players.push(player.clone());
    Ok(player)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveOutcome {
    /// Others remain; the game is back in the lobby.
    Left { seat: Seat, host_changed: bool },
    /// The last player left; the record should be destroyed.
    Emptied,
}

/// Remove a player. Any round in progress is discarded, not paused.
pub fn leave(game: &mut Game, player_id: &str) -> Result<LeaveOutcome, DomainError> {
    let seat = game.require_seat(player_id)?;
    game.players.remove(seat);
    if game.players.is_empty() {
        return Ok(LeaveOutcome::Emptied);
    }

    discard_round(game);
    game.phase = GamePhase::WaitingForPlayers;
    game.game_message = "Un jugador ha abandonado la partida.".to_string();
    // Seats shifted down; keep even → A, odd → B.
    for (idx, player) in game.players.iter_mut().enumerate() {
        player.team = team_for_seat(idx);
    }

    let host_changed = game.host_id == player_id;
    if host_changed {
        let heir = &mut game.players[0];
        heir.is_host = true;
        game.host_id = heir.id.clone();
        info!(game_id = %game.id, new_host = %game.host_id, "Host transferred");
    }
    Ok(LeaveOutcome::Left { seat, host_changed })
}

fn discard_round(game: &mut Game) {
    for player in game.players.iter_mut() {
        player.hand.clear();
    }
    game.layout.clear();
    game.layout_ends = None;
    game.passes = 0;
    game.round_result = None;
    game.current_player_index = 0;
    game.round_starter_index = 0;
}

/// Host starts the match from the lobby once four players are seated.
pub fn start_game<R: Rng>(game: &mut Game, actor_id: &str, rng: &mut R) -> Result<Seat, DomainError> {
    game.require_host(actor_id)?;
    game.require_phase(GamePhase::WaitingForPlayers, "start_game")?;
    game.require_full_table()?;
    start_round(game, 0, rng)
}

/// Host deals the next round; the opener rotates one seat.
pub fn next_round<R: Rng>(game: &mut Game, actor_id: &str, rng: &mut R) -> Result<Seat, DomainError> {
    game.require_host(actor_id)?;
    game.require_phase(GamePhase::RoundOver, "next_round")?;
    game.require_full_table()?;
    let starter = next_seat(game.round_starter_index);
    start_round(game, starter, rng)
}

/// Host restarts a finished match: scores zeroed, played as a first round.
pub fn reset_game<R: Rng>(game: &mut Game, actor_id: &str, rng: &mut R) -> Result<Seat, DomainError> {
    game.require_host(actor_id)?;
    game.require_phase(GamePhase::GameOver, "reset_game")?;
    game.require_full_table()?;
    game.scores = Scores::default();
    start_round(game, 0, rng)
}
