use tracing::info;

use crate::domain::rules::WINNING_SCORE;
use crate::domain::state::{Game, GamePhase, RoundResult, Scores, Team};

impl Scores {
    /// Add `points` to `team` and return the new total.
    fn credit(&mut self, team: Team, points: u32) -> u32 {
        let slot = match team {
            Team::A => &mut self.a,
            Team::B => &mut self.b,
        };
        *slot += points;
        *slot
    }

    pub fn has_winner(&self) -> Option<Team> {
        if self.a >= WINNING_SCORE {
            Some(Team::A)
        } else if self.b >= WINNING_SCORE {
            Some(Team::B)
        } else {
            None
        }
    }
}

/// Credit a resolved round and transition to RoundOver or GameOver.
pub fn apply_round_result(game: &mut Game, result: RoundResult) {
    let awarded = result.awarded();
    let team = result.winning_team;
    let total = game.scores.credit(team, awarded);

    if total >= WINNING_SCORE {
        game.phase = GamePhase::GameOver;
        game.game_message = format!("¡Juego terminado! El equipo {team} gana.");
    } else {
        game.phase = GamePhase::RoundOver;
        // The capicúa bonus is credited but not announced.
        game.game_message = format!(
            "Ronda terminada. El equipo {team} gana {} puntos.",
            result.points
        );
    }
    info!(
        game_id = %game.id,
        team = %team,
        reason = ?result.reason,
        points = result.points,
        capicua = result.capicua,
        total,
        phase = ?game.phase,
        "Round scored"
    );
    game.round_result = Some(result);
}
