//! Layout (board) management: attaching tiles to the chain and tracking the
//! two open ends.

use crate::domain::legality::is_legal;
use crate::domain::state::{Game, Seat};
use crate::domain::{Ends, Side, Tile, TileId};
use crate::errors::domain::{DomainError, ValidationKind};

/// Where and how a tile landed.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Placement {
    pub side: Side,
    /// The tile as oriented on the layout.
    pub placed: Tile,
    /// Open end the placement did not consume; for the opening tile, its own
    /// played value.
    pub free_end: u8,
}

/// Attach `tile` to the chain. The left end is always tried first, so a tile
/// that fits both ends (doubles included) goes left.
///
/// Returns None when the tile matches neither end; `layout` is untouched then.
pub fn attach(layout: &mut Vec<Tile>, ends: Option<Ends>, tile: Tile) -> Option<(Ends, Placement)> {
    let Some(ends) = ends else {
        layout.clear();
        layout.push(tile);
        let opened = Ends {
            left: tile.a(),
            right: tile.b(),
        };
        return Some((
            opened,
            Placement {
                side: Side::Opening,
                placed: tile,
                free_end: tile.a(),
            },
        ));
    };

    if tile.has_face(ends.left) {
        // Matching face goes on the inside (b touches the old left end).
        let placed = if tile.b() == ends.left {
            tile
        } else {
            tile.flipped()
        };
        layout.insert(0, placed);
        let next = Ends {
            left: placed.a(),
            right: ends.right,
        };
        return Some((
            next,
            Placement {
                side: Side::Left,
                placed,
                free_end: ends.right,
            },
        ));
    }

    if tile.has_face(ends.right) {
        let placed = if tile.a() == ends.right {
            tile
        } else {
            tile.flipped()
        };
        layout.push(placed);
        let next = Ends {
            left: ends.left,
            right: placed.b(),
        };
        return Some((
            next,
            Placement {
                side: Side::Right,
                placed,
                free_end: ends.left,
            },
        ));
    }

    None
}

/// Move a tile from `seat`'s hand onto the layout.
///
/// All checks run before anything changes: the tile must be in the hand
/// (matched by id; the hand's own copy is used) and must fit an open end.
/// A successful placement resets the pass counter.
pub fn play_tile(game: &mut Game, seat: Seat, id: TileId) -> Result<Placement, DomainError> {
    let player = game.players.get(seat).ok_or_else(|| {
        DomainError::validation(ValidationKind::NotSeated, format!("No player at seat {seat}"))
    })?;
    let pos = player
        .hand
        .iter()
        .position(|t| t.id() == id)
        .ok_or_else(|| {
            DomainError::validation(
                ValidationKind::TileNotInHand,
                format!("Tile {id} not in hand of seat {seat}"),
            )
        })?;
    let tile = player.hand[pos];
    if !is_legal(game.layout_ends, &tile) {
        return Err(DomainError::validation(
            ValidationKind::IllegalTile,
            format!("Tile {tile} matches neither open end"),
        ));
    }

    let (ends, placement) = attach(&mut game.layout, game.layout_ends, tile).ok_or_else(|| {
        DomainError::validation_other("Invariant violated: legal tile failed to attach")
    })?;
    game.players[seat].hand.remove(pos);
    game.layout_ends = Some(ends);
    game.passes = 0;
    Ok(placement)
}
