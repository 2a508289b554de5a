use serde::{Deserialize, Serialize};

use crate::domain::state::Game;

/// What a subscriber receives: the whole record after a change, or notice
/// that it is gone.
#[allow(clippy::large_enum_variant)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameUpdate {
    Snapshot {
        game: Game,
    },
    #[serde(rename_all = "camelCase")]
    Deleted {
        game_id: String,
    },
}

impl GameUpdate {
    pub fn game_id(&self) -> &str {
        match self {
            GameUpdate::Snapshot { game } => &game.id,
            GameUpdate::Deleted { game_id } => game_id,
        }
    }

    pub fn game(&self) -> Option<&Game> {
        match self {
            GameUpdate::Snapshot { game } => Some(game),
            GameUpdate::Deleted { .. } => None,
        }
    }
}
