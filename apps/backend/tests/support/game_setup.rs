//! Game setup helpers for integration tests
//!
//! Builds seeded services and tables in a given lifecycle phase.

use domino_backend::{EngineConfig, Game, GameFlowService, GameStore, Player};

/// A game plus the service that owns it.
pub struct Table {
    pub service: GameFlowService,
    pub game_id: String,
    /// Players in the order they joined (seat order at creation time).
    pub players: Vec<Player>,
}

impl Table {
    /// Current stored record. Panics if the game was deleted.
    pub fn game(&self) -> Game {
        self.service
            .get_game(&self.game_id)
            .expect("store read")
            .expect("game exists")
    }

    /// Player id currently seated at `seat`.
    pub fn id_at(&self, seat: usize) -> String {
        self.game().players[seat].id.clone()
    }

    pub fn host_id(&self) -> String {
        self.game().host_id
    }

    /// Replace the stored record, for states that are hard to reach by play.
    pub fn rig(&self, f: impl FnOnce(&mut Game)) {
        let mut game = self.game();
        f(&mut game);
        self.service
            .store()
            .put(&self.game_id, game)
            .expect("store write");
    }
}

pub fn seeded_service(seed: u64) -> GameFlowService {
    GameFlowService::in_memory(EngineConfig::default().with_rng_seed(Some(seed)))
}

/// Creator plus `extra` joiners, still in the lobby.
pub fn table_with(seed: u64, extra: usize) -> Table {
    let service = seeded_service(seed);
    let names = backend_test_support::unique_helpers::table_names("P");
    let (game, host) = service.create_game(&names[0]).expect("create game");
    let mut players = vec![host];
    for name in names.iter().skip(1).take(extra) {
        let (_, player) = service.join_game(&game.id, name).expect("join game");
        players.push(player);
    }
    Table {
        service,
        game_id: game.id,
        players,
    }
}

/// Four seated players, waiting for the host.
pub fn full_table(seed: u64) -> Table {
    table_with(seed, 3)
}

/// Four players and the first round dealt.
pub fn started_table(seed: u64) -> Table {
    let table = full_table(seed);
    let host = table.host_id();
    let outcome = table.service.start_game(&table.game_id, &host).expect("start");
    assert!(outcome.is_applied(), "start rejected: {outcome:?}");
    table
}
