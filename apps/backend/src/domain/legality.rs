//! Move legality. The single predicate used both to grey out tiles for a
//! viewer and to authorise a play or a pass.

use crate::domain::{Ends, Tile};

/// Anything opens an empty layout; otherwise a face must match an open end.
#[inline]
pub fn is_legal(ends: Option<Ends>, tile: &Tile) -> bool {
    match ends {
        None => true,
        Some(ends) => ends.matches(tile.a()) || ends.matches(tile.b()),
    }
}

/// Tiles in `hand` that may be played, in hand order.
pub fn legal_tiles(hand: &[Tile], ends: Option<Ends>) -> Vec<Tile> {
    hand.iter().copied().filter(|t| is_legal(ends, t)).collect()
}

/// False means the only permitted action is a pass.
pub fn has_legal_play(hand: &[Tile], ends: Option<Ends>) -> bool {
    hand.iter().any(|t| is_legal(ends, t))
}
