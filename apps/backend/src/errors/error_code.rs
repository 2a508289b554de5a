//! Error codes for the domino engine.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and are the strings surfaced to callers.

use core::fmt;

/// Centralized error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Action not allowed in the current game state
    PhaseMismatch,
    /// Out of turn
    OutOfTurn,
    /// Host-only action
    NotHost,
    /// Fewer than four seated players
    NotEnoughPlayers,
    /// Player not seated at the game
    NotSeated,
    /// Tile not in hand
    TileNotInHand,
    /// Tile matches neither open end
    IllegalTile,
    /// Pass while holding a playable tile
    MustPlay,
    /// Pip outside 0..=6
    InvalidPip,
    /// Malformed tile token
    ParseTile,
    /// General validation error
    ValidationError,

    // Resource Not Found
    GameNotFound,
    NotFound,

    // Conflicts
    /// Game already has four players
    GameFull,
    /// Generated game id already in use
    GameIdTaken,
    Conflict,

    // System Errors
    Internal,
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PhaseMismatch => "PHASE_MISMATCH",
            Self::OutOfTurn => "OUT_OF_TURN",
            Self::NotHost => "NOT_HOST",
            Self::NotEnoughPlayers => "NOT_ENOUGH_PLAYERS",
            Self::NotSeated => "NOT_SEATED",
            Self::TileNotInHand => "TILE_NOT_IN_HAND",
            Self::IllegalTile => "ILLEGAL_TILE",
            Self::MustPlay => "MUST_PLAY",
            Self::InvalidPip => "INVALID_PIP",
            Self::ParseTile => "PARSE_TILE",
            Self::ValidationError => "VALIDATION_ERROR",

            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::GameFull => "GAME_FULL",
            Self::GameIdTaken => "GAME_ID_TAKEN",
            Self::Conflict => "CONFLICT",

            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
