//! Domain-level error type used across the engine and the lifecycle service.
//!
//! This error type is storage- and transport-agnostic. Operations that must
//! report failures to the caller convert it into `crate::error::AppError`
//! via the provided `From<DomainError> for AppError` implementation; all
//! other rejections travel inside `ActionOutcome::Ignored`.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Rule or request violations detected before any state is touched.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Action not allowed in the current game state.
    PhaseMismatch,
    /// Move submitted by a seat other than the current one.
    OutOfTurn,
    /// Host-only action requested by a non-host.
    NotHost,
    /// Action requires exactly four seated players.
    NotEnoughPlayers,
    /// Player id is not seated at this game.
    NotSeated,
    /// Tile id is not in the acting player's hand.
    TileNotInHand,
    /// Tile does not match either open end.
    IllegalTile,
    /// Pass submitted while holding a playable tile.
    MustPlay,
    /// Pip value outside 0..=6.
    InvalidPip,
    /// Malformed tile token.
    ParseTile,
    Other(String),
}

/// Domain-level not found entities.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Game,
    Other(String),
}

/// Domain-level conflict kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    GameFull,
    GameIdTaken,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input validation or game rule violation
    Validation(ValidationKind, String),
    /// Semantic conflict
    Conflict(ConflictKind, String),
    /// Missing resource in domain terms
    NotFound(NotFoundKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation error {kind:?}: {d}"),
            DomainError::Conflict(kind, d) => write!(f, "conflict {kind:?}: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn validation_other(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::Validation(ValidationKind::Other(detail.clone()), detail)
    }
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }

    /// The validation kind, if this is a validation error.
    pub fn validation_kind(&self) -> Option<&ValidationKind> {
        match self {
            DomainError::Validation(kind, _) => Some(kind),
            _ => None,
        }
    }
}
