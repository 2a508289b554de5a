//! Tile set generation, shuffling and dealing.

use rand::Rng;

use crate::domain::rules::{HAND_SIZE, MAX_PIP, PLAYERS, TILE_COUNT};
use crate::domain::Tile;

/// Generate the 28 tiles of a double-six set in canonical order.
pub fn full_set() -> Vec<Tile> {
    let mut set = Vec::with_capacity(TILE_COUNT);
    for a in 0..=MAX_PIP {
        for b in a..=MAX_PIP {
            set.push(Tile::from_faces(a, b));
        }
    }
    set
}

/// Fisher-Yates shuffle.
pub fn shuffle<R: Rng>(tiles: &mut [Tile], rng: &mut R) {
    for i in (1..tiles.len()).rev() {
        let j = rng.random_range(0..=i);
        tiles.swap(i, j);
    }
}

/// Order a hand for display: highest pip sum first, ties by higher `a`.
pub fn sort_hand(hand: &mut [Tile]) {
    hand.sort_by(|x, y| y.pips().cmp(&x.pips()).then(y.a().cmp(&x.a())));
}

/// Shuffle a fresh set and deal seven tiles to each seat.
///
/// Tiles are drawn from the end of the shuffled sequence, one per seat in
/// seat order, seven times over. Hands come back sorted.
pub fn deal_hands<R: Rng>(rng: &mut R) -> [Vec<Tile>; PLAYERS] {
    let mut deck = full_set();
    shuffle(&mut deck, rng);

    let mut hands: [Vec<Tile>; PLAYERS] = Default::default();
    for _ in 0..HAND_SIZE {
        for hand in hands.iter_mut() {
            if let Some(tile) = deck.pop() {
                hand.push(tile);
            }
        }
    }
    for hand in hands.iter_mut() {
        sort_hand(hand);
    }
    hands
}
