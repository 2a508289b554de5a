//! Requests the rules reject: reported failures for join, silent no-ops for
//! everything else. A rejected request must leave the record unchanged.

use domino_backend::domain::fixtures::TileFixtures;
use domino_backend::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use domino_backend::{ActionOutcome, ErrorCode, GamePhase, Move};

use crate::support::game_setup::{full_table, seeded_service, started_table, table_with};
use crate::support::round_driver::first_legal_move;

fn validation_kind(outcome: &ActionOutcome) -> ValidationKind {
    match outcome.rejection() {
        Some(DomainError::Validation(kind, _)) => kind.clone(),
        other => panic!("expected a validation rejection, got {other:?}"),
    }
}

fn snapshot_json(table: &crate::support::game_setup::Table) -> String {
    serde_json::to_string(&table.game()).unwrap()
}

#[test]
fn join_unknown_game_reports_not_found() {
    let service = seeded_service(1);
    let err = service.join_game("NOPE42", "Ana").unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.code(), ErrorCode::GameNotFound);
}

#[test]
fn join_full_game_reports_game_full() {
    let table = full_table(1);
    let before = snapshot_json(&table);
    let err = table.service.join_game(&table.game_id, "Eva").unwrap_err();
    assert!(err.is_game_full());
    assert_eq!(err.code().as_str(), "GAME_FULL");
    assert_eq!(snapshot_json(&table), before);
}

#[test]
fn start_by_non_host_is_ignored() {
    let table = full_table(2);
    let before = snapshot_json(&table);
    let outcome = table.service.start_game(&table.game_id, &table.id_at(2)).unwrap();
    assert_eq!(validation_kind(&outcome), ValidationKind::NotHost);
    assert_eq!(snapshot_json(&table), before);
}

#[test]
fn start_without_four_players_is_ignored() {
    let table = table_with(3, 2);
    let outcome = table.service.start_game(&table.game_id, &table.host_id()).unwrap();
    assert_eq!(validation_kind(&outcome), ValidationKind::NotEnoughPlayers);
    assert_eq!(table.game().phase, GamePhase::WaitingForPlayers);
}

#[test]
fn start_twice_is_ignored() {
    let table = started_table(4);
    let before = snapshot_json(&table);
    let outcome = table.service.start_game(&table.game_id, &table.host_id()).unwrap();
    assert_eq!(validation_kind(&outcome), ValidationKind::PhaseMismatch);
    assert_eq!(snapshot_json(&table), before);
}

#[test]
fn out_of_turn_move_changes_nothing() {
    let table = started_table(5);
    let game = table.game();
    let other = (game.current_player_index + 1) % 4;
    let before = snapshot_json(&table);

    let outcome = table
        .service
        .make_move(&table.game_id, &table.id_at(other), &Move::Pass)
        .unwrap();
    assert_eq!(validation_kind(&outcome), ValidationKind::OutOfTurn);
    assert_eq!(snapshot_json(&table), before);
}

#[test]
fn move_on_missing_game_is_ignored() {
    let service = seeded_service(6);
    let outcome = service.make_move("GHOST1", "p0", &Move::Pass).unwrap();
    assert!(matches!(
        outcome.rejection(),
        Some(DomainError::NotFound(NotFoundKind::Game, _))
    ));
    assert!(service.get_game("GHOST1").unwrap().is_none());
}

#[test]
fn move_by_stranger_is_ignored() {
    let table = started_table(7);
    let outcome = table
        .service
        .make_move(&table.game_id, "not-a-player", &Move::Pass)
        .unwrap();
    assert_eq!(validation_kind(&outcome), ValidationKind::NotSeated);
}

#[test]
fn tile_not_in_hand_is_ignored() {
    let table = started_table(8);
    let game = table.game();
    let seat = game.current_player_index;
    let foreign = game.players[(seat + 1) % 4].hand[0];
    let before = snapshot_json(&table);

    let outcome = table
        .service
        .make_move(&table.game_id, &table.id_at(seat), &Move::Play { tile: foreign })
        .unwrap();
    assert_eq!(validation_kind(&outcome), ValidationKind::TileNotInHand);
    assert_eq!(snapshot_json(&table), before);
}

#[test]
fn illegal_tile_and_forbidden_pass_are_ignored() {
    let table = started_table(9);
    table.rig(|g| {
        let seat = g.current_player_index;
        g.players[seat].hand = TileFixtures::parse_hardcoded(&["6|1", "2|3"]);
        g.layout = TileFixtures::parse_hardcoded(&["6|6"]);
        g.layout_ends = Some(domino_backend::domain::Ends { left: 6, right: 6 });
    });
    let seat = table.game().current_player_index;
    let actor = table.id_at(seat);
    let before = snapshot_json(&table);

    let illegal = Move::Play {
        tile: TileFixtures::one("2|3"),
    };
    let outcome = table.service.make_move(&table.game_id, &actor, &illegal).unwrap();
    assert_eq!(validation_kind(&outcome), ValidationKind::IllegalTile);

    let outcome = table.service.make_move(&table.game_id, &actor, &Move::Pass).unwrap();
    assert_eq!(validation_kind(&outcome), ValidationKind::MustPlay);
    assert_eq!(snapshot_json(&table), before);
}

#[test]
fn host_actions_check_the_phase() {
    let table = started_table(10);
    let host = table.host_id();
    let before = snapshot_json(&table);

    let outcome = table.service.start_new_round(&table.game_id, &host).unwrap();
    assert_eq!(validation_kind(&outcome), ValidationKind::PhaseMismatch);
    let outcome = table.service.reset_game(&table.game_id, &host).unwrap();
    assert_eq!(validation_kind(&outcome), ValidationKind::PhaseMismatch);
    assert_eq!(snapshot_json(&table), before);

    table.rig(|g| g.phase = GamePhase::RoundOver);
    let outcome = table.service.start_new_round(&table.game_id, &table.id_at(1)).unwrap();
    assert_eq!(validation_kind(&outcome), ValidationKind::NotHost);
}

#[test]
fn leaving_twice_is_idempotent() {
    let table = full_table(11);
    let leaver = table.id_at(3);
    assert!(table.service.leave_game(&table.game_id, &leaver).unwrap().is_applied());
    let after_first = snapshot_json(&table);

    let outcome = table.service.leave_game(&table.game_id, &leaver).unwrap();
    assert_eq!(validation_kind(&outcome), ValidationKind::NotSeated);
    assert_eq!(snapshot_json(&table), after_first);
}

#[test]
fn leave_mid_round_returns_to_lobby_and_moves_host() {
    let table = started_table(12);
    table.rig(|g| g.scores.b = 30);
    let host = table.host_id();
    let second = table.id_at(1);

    assert!(table.service.leave_game(&table.game_id, &host).unwrap().is_applied());
    let game = table.game();
    assert_eq!(game.phase, GamePhase::WaitingForPlayers);
    assert_eq!(game.players.len(), 3);
    assert_eq!(game.host_id, second);
    assert!(game.players[0].is_host);
    assert!(game.players.iter().all(|p| p.hand.is_empty()));
    assert!(game.layout.is_empty() && game.layout_ends.is_none());
    assert!(game.round_result.is_none());
    assert_eq!(game.scores.b, 30);
    assert_eq!(game.game_message, "Un jugador ha abandonado la partida.");

    // The old host has no say any more.
    let outcome = table.service.start_game(&table.game_id, &host).unwrap();
    assert!(!outcome.is_applied());
}

#[test]
fn a_new_player_can_fill_the_vacated_seat() {
    let table = started_table(13);
    table.service.leave_game(&table.game_id, &table.id_at(2)).unwrap();
    let (game, player) = table.service.join_game(&table.game_id, "Eva").unwrap();
    assert_eq!(game.players.len(), 4);
    assert_eq!(game.players[3].id, player.id);
    assert_eq!(player.team, domino_backend::Team::B);

    let outcome = table.service.start_game(&table.game_id, &table.host_id()).unwrap();
    assert!(outcome.is_applied());
    let game = table.game();
    assert!(game.scores.is_fresh());
    let mv = first_legal_move(&game);
    let actor = game.players[game.current_player_index].id.clone();
    assert!(table.service.make_move(&table.game_id, &actor, &mv).unwrap().is_applied());
}

#[test]
fn last_player_out_deletes_the_game() {
    let table = table_with(14, 1);
    let ids = [table.id_at(0), table.id_at(1)];
    for id in &ids {
        assert!(table.service.leave_game(&table.game_id, id).unwrap().is_applied());
    }
    assert!(table.service.get_game(&table.game_id).unwrap().is_none());

    // Everything on a deleted game is ignored.
    let outcome = table.service.leave_game(&table.game_id, &ids[0]).unwrap();
    assert!(matches!(outcome.rejection(), Some(DomainError::NotFound(..))));
    let err = table.service.join_game(&table.game_id, "Eva").unwrap_err();
    assert!(err.is_not_found());
}
