//! Property tests: whole rounds driven through the service from random seeds.

use domino_backend::domain::rules::WINNING_SCORE;
use domino_backend::{GamePhase, RoundEndReason};
use proptest::prelude::*;

use crate::common::proptest_prelude::proptest_prelude_config;
use crate::support::game_setup::started_table;
use crate::support::round_driver::{assert_conserved, play_out_round};

proptest! {
    #![proptest_config(proptest_prelude_config())]

    #[test]
    fn every_round_resolves_with_a_scored_winner(seed in any::<u64>()) {
        let table = started_table(seed);
        play_out_round(&table);

        let game = table.game();
        assert_conserved(&game);
        let result = game.round_result.clone().expect("resolved round has a result");
        prop_assert_eq!(game.scores.get(result.winning_team), result.awarded());
        prop_assert_eq!(game.scores.get(result.winning_team.other()), 0);
        match result.reason {
            RoundEndReason::Domino => prop_assert!(game
                .players
                .iter()
                .any(|p| p.team == result.winning_team && p.hand.is_empty())),
            RoundEndReason::Blocked => prop_assert!(game.players.iter().all(|p| !p.hand.is_empty())),
        }
        // One round can never reach the target from zero.
        prop_assert!(result.awarded() < WINNING_SCORE);
        prop_assert_eq!(game.phase, GamePhase::RoundOver);
    }

    #[test]
    fn opener_rotates_between_rounds(seed in any::<u64>()) {
        let table = started_table(seed);
        play_out_round(&table);
        let first = table.game();
        prop_assert_eq!(first.phase, GamePhase::RoundOver);

        let outcome = table.service.start_new_round(&table.game_id, &table.host_id()).unwrap();
        prop_assert!(outcome.is_applied());
        let second = table.game();
        prop_assert_eq!(second.round_starter_index, (first.round_starter_index + 1) % 4);
        prop_assert_eq!(second.current_player_index, second.round_starter_index);
        prop_assert_eq!(second.scores, first.scores);
    }
}
