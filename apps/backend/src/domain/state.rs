use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::rules::{CAPICUA_BONUS, PLAYERS};
use crate::domain::tiles_serde::layout_ends;
use crate::domain::{Ends, Tile};
use crate::errors::domain::{DomainError, ValidationKind};

pub type Seat = usize; // 0..=3, index into `Game::players`

/// Partnership. Even seats play for A, odd seats for B.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Team {
    A,
    B,
}

impl Team {
    pub fn other(self) -> Team {
        match self {
            Team::A => Team::B,
            Team::B => Team::A,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::A => f.write_str("A"),
            Team::B => f.write_str("B"),
        }
    }
}

/// Overall game progression.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GamePhase {
    /// Lobby: fewer than four players, or a player left mid-match.
    WaitingForPlayers,
    /// A round is in progress.
    Playing,
    /// Round resolved, waiting for the host to deal the next one.
    RoundOver,
    /// A team reached the winning score.
    GameOver,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub name: String,
    /// Display order only: descending pip sum, then descending `a`.
    pub hand: Vec<Tile>,
    pub team: Team,
    pub is_host: bool,
}

impl Player {
    pub fn new(id: impl Into<String>, name: impl Into<String>, seat: Seat, is_host: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            hand: Vec::new(),
            team: team_for_seat(seat),
            is_host,
        }
    }

    pub fn hand_pips(&self) -> u32 {
        self.hand.iter().map(Tile::pips).sum()
    }
}

/// Team score ledger. Written only when a round resolves.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Scores {
    #[serde(rename = "A")]
    pub a: u32,
    #[serde(rename = "B")]
    pub b: u32,
}

impl Scores {
    pub fn get(&self, team: Team) -> u32 {
        match team {
            Team::A => self.a,
            Team::B => self.b,
        }
    }

    /// Both teams still at zero: the next deal is the first round of a match.
    pub fn is_fresh(&self) -> bool {
        self.a == 0 && self.b == 0
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum RoundEndReason {
    /// A player emptied their hand.
    #[serde(rename = "Dominó")]
    Domino,
    /// Every seat passed in a row.
    #[serde(rename = "Trancado")]
    Blocked,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundResult {
    pub winning_team: Team,
    /// Pip points before the capicúa bonus.
    pub points: u32,
    pub reason: RoundEndReason,
    pub capicua: bool,
    pub winner_name: String,
}

impl RoundResult {
    /// Points credited to the winning team, bonus included.
    pub fn awarded(&self) -> u32 {
        if self.capicua {
            self.points + CAPICUA_BONUS
        } else {
            self.points
        }
    }
}

/// A player action during a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Move {
    Play { tile: Tile },
    Pass,
}

/// Entire authoritative match record, sufficient for pure domain operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: String,
    /// Seating order, fixed at join; defines turn order and teams.
    pub players: Vec<Player>,
    #[serde(rename = "gameState")]
    pub phase: GamePhase,
    /// Left-to-right chain of oriented tiles.
    pub layout: Vec<Tile>,
    /// None iff `layout` is empty.
    #[serde(with = "layout_ends")]
    pub layout_ends: Option<Ends>,
    pub current_player_index: Seat,
    pub scores: Scores,
    /// Seat that opened the current round.
    pub round_starter_index: Seat,
    /// Consecutive passes since the last play.
    pub passes: u8,
    pub round_result: Option<RoundResult>,
    pub game_message: String,
    pub host_id: String,
}

impl Game {
    pub fn seat_of(&self, player_id: &str) -> Option<Seat> {
        self.players.iter().position(|p| p.id == player_id)
    }

    pub fn require_seat(&self, player_id: &str) -> Result<Seat, DomainError> {
        self.seat_of(player_id).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::NotSeated,
                format!("Player {player_id} is not seated at game {}", self.id),
            )
        })
    }

    pub fn is_host(&self, player_id: &str) -> bool {
        self.host_id == player_id
            && self
                .players
                .iter()
                .any(|p| p.id == player_id && p.is_host)
    }

    pub fn require_host(&self, player_id: &str) -> Result<(), DomainError> {
        if self.is_host(player_id) {
            Ok(())
        } else {
            Err(DomainError::validation(
                ValidationKind::NotHost,
                format!("Player {player_id} is not the host of game {}", self.id),
            ))
        }
    }

    pub fn require_phase(&self, expected: GamePhase, ctx: &'static str) -> Result<(), DomainError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                format!("{ctx} requires {expected:?}, game is {:?}", self.phase),
            ))
        }
    }

    pub fn require_full_table(&self) -> Result<(), DomainError> {
        if self.players.len() == PLAYERS {
            Ok(())
        } else {
            Err(DomainError::validation(
                ValidationKind::NotEnoughPlayers,
                format!("Need {PLAYERS} players, have {}", self.players.len()),
            ))
        }
    }

    /// Pips still in hands plus pips on the layout.
    pub fn pips_in_play(&self) -> u32 {
        let in_hands: u32 = self.players.iter().map(Player::hand_pips).sum();
        let on_layout: u32 = self.layout.iter().map(Tile::pips).sum();
        in_hands + on_layout
    }

    /// Tiles in hands plus tiles on the layout.
    pub fn tiles_in_play(&self) -> usize {
        self.players.iter().map(|p| p.hand.len()).sum::<usize>() + self.layout.len()
    }
}

/// Seat math helpers (4 fixed seats: 0..=3).
///
/// Turn order and round-starter rotation both use raw seat order.
#[inline]
pub fn seat_offset(seat: Seat, delta: i8) -> Seat {
    ((seat as i16 + delta as i16).rem_euclid(PLAYERS as i16)) as Seat
}

/// Returns the next seat (0 → 1 → 2 → 3 → 0).
#[inline]
pub fn next_seat(seat: Seat) -> Seat {
    seat_offset(seat, 1)
}

#[inline]
pub fn team_for_seat(seat: Seat) -> Team {
    if seat % 2 == 0 {
        Team::A
    } else {
        Team::B
    }
}
