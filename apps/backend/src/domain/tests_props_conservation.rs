/// Property-based tests: seeded rounds played out with random legal moves.
use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::domain::legality::legal_tiles;
use crate::domain::lobby::start_game;
use crate::domain::moves::apply_move;
use crate::domain::rules::{PASSES_TO_BLOCK, TILE_COUNT, TOTAL_PIPS};
use crate::domain::state::{next_seat, GamePhase, Move};
use crate::domain::test_state_helpers::full_lobby;
use crate::domain::{test_gens, test_prelude};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: from deal to resolution the 28 tiles stay partitioned
    /// between hands and layout, turns go round in seat order, and scores
    /// only grow.
    #[test]
    fn prop_round_conserves_tiles(seed in test_gens::seed()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut game = full_lobby();
        start_game(&mut game, "p0", &mut rng).unwrap();

        let mut moves = 0;
        while game.phase == GamePhase::Playing {
            prop_assert_eq!(game.tiles_in_play(), TILE_COUNT);
            prop_assert_eq!(game.pips_in_play(), TOTAL_PIPS);
            prop_assert!(game.passes < PASSES_TO_BLOCK);

            let seat = game.current_player_index;
            let legal = legal_tiles(&game.players[seat].hand, game.layout_ends);
            let mv = if legal.is_empty() {
                Move::Pass
            } else {
                Move::Play { tile: legal[rng.random_range(0..legal.len())] }
            };
            let scores_before = game.scores;
            let out = apply_move(&mut game, seat, &mv).unwrap();
            if let Some(next) = out.next_turn {
                prop_assert_eq!(next, next_seat(seat));
            }
            prop_assert!(game.scores.a >= scores_before.a);
            prop_assert!(game.scores.b >= scores_before.b);

            // Ends always mirror the chain.
            if let (Some(ends), Some(first), Some(last)) =
                (game.layout_ends, game.layout.first(), game.layout.last())
            {
                prop_assert_eq!(ends.left, first.a());
                prop_assert_eq!(ends.right, last.b());
            }

            moves += 1;
            prop_assert!(moves <= TILE_COUNT * 5);
        }

        prop_assert_eq!(game.tiles_in_play(), TILE_COUNT);
        prop_assert_eq!(game.pips_in_play(), TOTAL_PIPS);
        let result = game.round_result.clone().unwrap();
        prop_assert_eq!(game.scores.get(result.winning_team), result.awarded());
    }
}
