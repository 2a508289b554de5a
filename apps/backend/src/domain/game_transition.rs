// apps/backend/src/domain/game_transition.rs

use crate::domain::state::{Game, GamePhase, Seat, Team};

/// The slice of a match record that transitions are derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameLifecycleView {
    pub phase: GamePhase,
    pub turn: Option<Seat>,
    pub player_ids: Vec<String>,
    pub host_id: String,
    pub round_starter: Seat,
    pub winner: Option<Team>,
}

impl From<&Game> for GameLifecycleView {
    fn from(game: &Game) -> Self {
        let turn = (game.phase == GamePhase::Playing).then_some(game.current_player_index);
        Self {
            phase: game.phase,
            turn,
            player_ids: game.players.iter().map(|p| p.id.clone()).collect(),
            host_id: game.host_id.clone(),
            round_starter: game.round_starter_index,
            winner: game.round_result.as_ref().map(|r| r.winning_team),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameTransition {
    /// Explicit: a player took a seat.
    PlayerJoined { player_id: String },

    /// Explicit: a player left the table.
    PlayerLeft { player_id: String },

    /// Edge-triggered: host role moved to another player.
    HostChanged { player_id: String },

    /// Edge-triggered: a round was dealt.
    RoundStarted { starter: Seat },

    /// Edge-triggered: the turn became a specific seat.
    TurnBecame { seat: Seat },

    /// Edge-triggered: Playing -> RoundOver/GameOver.
    RoundEnded { winning_team: Team },

    /// Edge-triggered: !GameOver -> GameOver.
    GameOver { winning_team: Team },

    /// Edge-triggered: an active match fell back to the lobby.
    ReturnedToLobby,

    /// The record no longer exists.
    GameDeleted,
}

/// Derive domain transitions from before/after records. `None` means absent.
pub fn derive_game_transitions(before: Option<&Game>, after: Option<&Game>) -> Vec<GameTransition> {
    let before = before.map(GameLifecycleView::from);
    let after = after.map(GameLifecycleView::from);
    match (before, after) {
        (None, None) => Vec::new(),
        (Some(_), None) => vec![GameTransition::GameDeleted],
        (None, Some(after)) => after
            .player_ids
            .iter()
            .map(|id| GameTransition::PlayerJoined { player_id: id.clone() })
            .collect(),
        (Some(before), Some(after)) => derive_view_transitions(&before, &after),
    }
}

pub fn derive_view_transitions(
    before: &GameLifecycleView,
    after: &GameLifecycleView,
) -> Vec<GameTransition> {
    let mut transitions = Vec::new();

    // 1. Membership
    for id in &after.player_ids {
        if !before.player_ids.contains(id) {
            transitions.push(GameTransition::PlayerJoined { player_id: id.clone() });
        }
    }
    for id in &before.player_ids {
        if !after.player_ids.contains(id) {
            transitions.push(GameTransition::PlayerLeft { player_id: id.clone() });
        }
    }
    if before.host_id != after.host_id {
        transitions.push(GameTransition::HostChanged {
            player_id: after.host_id.clone(),
        });
    }

    // 2. Round dealt (lobby/round-over/game-over -> Playing)
    let round_started = before.phase != GamePhase::Playing && after.phase == GamePhase::Playing;
    if round_started {
        transitions.push(GameTransition::RoundStarted {
            starter: after.round_starter,
        });
    }

    // 3. Turn change
    if let Some(seat) = after.turn {
        if round_started || before.turn != Some(seat) {
            transitions.push(GameTransition::TurnBecame { seat });
        }
    }

    // 4. Round resolution
    let ended = before.phase == GamePhase::Playing
        && matches!(after.phase, GamePhase::RoundOver | GamePhase::GameOver);
    if let (true, Some(team)) = (ended, after.winner) {
        transitions.push(GameTransition::RoundEnded { winning_team: team });
        if after.phase == GamePhase::GameOver {
            transitions.push(GameTransition::GameOver { winning_team: team });
        }
    }

    // 5. Back to the lobby (someone left mid-match)
    if before.phase != GamePhase::WaitingForPlayers && after.phase == GamePhase::WaitingForPlayers {
        transitions.push(GameTransition::ReturnedToLobby);
    }

    transitions
}
