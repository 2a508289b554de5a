//! Core tile-related types: Tile, TileId, Ends, Side

use std::fmt;

use crate::domain::rules::MAX_PIP;
use crate::errors::domain::{DomainError, ValidationKind};

/// Canonical identity of a tile: the unordered pair of faces, low face first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct TileId {
    pub low: u8,
    pub high: u8,
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

/// A domino tile.
///
/// `a` and `b` carry orientation once the tile sits on the layout: `a` faces
/// left and `b` faces right. Orientation is a placement detail; two tiles with
/// swapped faces are the same tile (`id()` is equal).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Tile {
    a: u8,
    b: u8,
}

impl Tile {
    /// Build a tile, rejecting pips outside 0..=6.
    pub fn new(a: u8, b: u8) -> Result<Self, DomainError> {
        if a > MAX_PIP || b > MAX_PIP {
            return Err(DomainError::validation(
                ValidationKind::InvalidPip,
                format!("Pips must be within 0..={MAX_PIP}, got {a}|{b}"),
            ));
        }
        Ok(Self { a, b })
    }

    /// Build a tile from faces already known to be in range.
    pub(crate) const fn from_faces(a: u8, b: u8) -> Self {
        Self { a, b }
    }

    pub fn a(&self) -> u8 {
        self.a
    }

    pub fn b(&self) -> u8 {
        self.b
    }

    pub fn id(&self) -> TileId {
        TileId {
            low: self.a.min(self.b),
            high: self.a.max(self.b),
        }
    }

    pub fn pips(&self) -> u32 {
        self.a as u32 + self.b as u32
    }

    pub fn is_double(&self) -> bool {
        self.a == self.b
    }

    pub fn has_face(&self, value: u8) -> bool {
        self.a == value || self.b == value
    }

    /// Same tile with faces swapped.
    pub fn flipped(&self) -> Self {
        Self {
            a: self.b,
            b: self.a,
        }
    }

    /// Same tile in canonical orientation (low face as `a`).
    pub fn canonical(&self) -> Self {
        let id = self.id();
        Self {
            a: id.low,
            b: id.high,
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.a, self.b)
    }
}

/// The two open pip values at the extremities of a non-empty layout.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Ends {
    pub left: u8,
    pub right: u8,
}

impl Ends {
    pub fn matches(&self, value: u8) -> bool {
        self.left == value || self.right == value
    }
}

/// Which extremity of the layout a tile was attached to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Side {
    /// First tile of the round; it defines both ends.
    Opening,
    Left,
    Right,
}
