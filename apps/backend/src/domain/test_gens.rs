// Proptest generators for domain types.
// Tiles come from the real double-six set, so uniqueness holds by construction.

use proptest::prelude::*;

use crate::domain::dealing::full_set;
use crate::domain::rules::{HAND_SIZE, MAX_PIP, TILE_COUNT};
use crate::domain::{Ends, Tile};

pub fn pip() -> impl Strategy<Value = u8> {
    0..=MAX_PIP
}

/// Any tile, in either orientation.
pub fn tile() -> impl Strategy<Value = Tile> {
    (pip(), pip()).prop_map(|(a, b)| Tile::from_faces(a, b))
}

/// Open ends, or None for an empty layout.
pub fn ends() -> impl Strategy<Value = Option<Ends>> {
    prop_oneof![
        1 => Just(None),
        4 => (pip(), pip()).prop_map(|(left, right)| Some(Ends { left, right })),
    ]
}

/// `count` distinct tiles drawn from the set.
pub fn unique_tiles(count: usize) -> impl Strategy<Value = Vec<Tile>> {
    let count = count.min(TILE_COUNT);
    Just(full_set()).prop_shuffle().prop_map(move |set| set[..count].to_vec())
}

/// A hand of 0..=HAND_SIZE distinct tiles.
pub fn hand() -> impl Strategy<Value = Vec<Tile>> {
    (0..=HAND_SIZE).prop_flat_map(unique_tiles)
}

/// Seed for a seeded deal.
pub fn seed() -> impl Strategy<Value = u64> {
    any::<u64>()
}
