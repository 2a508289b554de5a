//! Match scripts: a seed and a list of lifecycle steps addressed by player
//! display name.

use std::collections::HashMap;

use domino_backend::{ActionOutcome, AppError, GameFlowService, GameStore, Move};
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub seed: Option<u64>,
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    Create {
        name: String,
    },
    Join {
        name: String,
    },
    Leave {
        #[serde(rename = "as")]
        actor: String,
    },
    Start {
        #[serde(rename = "as")]
        actor: String,
    },
    Move {
        #[serde(rename = "as")]
        actor: String,
        #[serde(rename = "move")]
        mv: Move,
    },
    NextRound {
        #[serde(rename = "as")]
        actor: String,
    },
    Reset {
        #[serde(rename = "as")]
        actor: String,
    },
}

impl Step {
    fn op(&self) -> &'static str {
        match self {
            Step::Create { .. } => "create",
            Step::Join { .. } => "join",
            Step::Leave { .. } => "leave",
            Step::Start { .. } => "start",
            Step::Move { .. } => "move",
            Step::NextRound { .. } => "next_round",
            Step::Reset { .. } => "reset",
        }
    }
}

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("step {step}: no game has been created yet")]
    NoGame { step: usize },
    #[error("step {step}: a game was already created")]
    AlreadyCreated { step: usize },
    #[error("step {step}: unknown player '{name}'")]
    UnknownPlayer { step: usize, name: String },
    #[error("step {step}: {source}")]
    Engine {
        step: usize,
        #[source]
        source: AppError,
    },
}

/// Drives one game through a script.
pub struct Replay<'a, S: GameStore> {
    service: &'a GameFlowService<S>,
    game_id: Option<String>,
    players: HashMap<String, String>,
}

impl<'a, S: GameStore> Replay<'a, S> {
    pub fn new(service: &'a GameFlowService<S>) -> Self {
        Self {
            service,
            game_id: None,
            players: HashMap::new(),
        }
    }

    pub fn game_id(&self) -> Option<&str> {
        self.game_id.as_deref()
    }

    /// Run every step; returns how many requests the rules ignored.
    pub fn run(&mut self, script: &Script) -> Result<usize, ReplayError> {
        let mut ignored = 0;
        for (idx, step) in script.steps.iter().enumerate() {
            if !self.step(idx + 1, step)?.is_applied() {
                ignored += 1;
            }
        }
        Ok(ignored)
    }

    /// Apply one step, numbered from 1 in error messages and logs.
    pub fn step(&mut self, step_no: usize, step: &Step) -> Result<ActionOutcome, ReplayError> {
        let outcome = self.apply(step_no, step)?;
        match &outcome {
            ActionOutcome::Applied => info!(step = step_no, op = step.op(), "Step applied"),
            ActionOutcome::Ignored(reason) => {
                warn!(step = step_no, op = step.op(), reason = %reason, "Step ignored");
            }
        }
        Ok(outcome)
    }

    fn apply(&mut self, step_no: usize, step: &Step) -> Result<ActionOutcome, ReplayError> {
        let engine = |source: AppError| ReplayError::Engine { step: step_no, source };

        if let Step::Create { name } = step {
            if self.game_id.is_some() {
                return Err(ReplayError::AlreadyCreated { step: step_no });
            }
            let (game, host) = self.service.create_game(name).map_err(engine)?;
            self.players.insert(host.name, host.id);
            self.game_id = Some(game.id);
            return Ok(ActionOutcome::Applied);
        }

        let game_id = self
            .game_id
            .clone()
            .ok_or(ReplayError::NoGame { step: step_no })?;

        let outcome = match step {
            Step::Create { .. } => ActionOutcome::Applied,
            Step::Join { name } => {
                let (_, player) = self.service.join_game(&game_id, name).map_err(engine)?;
                self.players.insert(player.name, player.id);
                ActionOutcome::Applied
            }
            Step::Leave { actor } => {
                let id = self.player_id(step_no, actor)?;
                self.service.leave_game(&game_id, &id).map_err(engine)?
            }
            Step::Start { actor } => {
                let id = self.player_id(step_no, actor)?;
                self.service.start_game(&game_id, &id).map_err(engine)?
            }
            Step::Move { actor, mv } => {
                let id = self.player_id(step_no, actor)?;
                self.service.make_move(&game_id, &id, mv).map_err(engine)?
            }
            Step::NextRound { actor } => {
                let id = self.player_id(step_no, actor)?;
                self.service.start_new_round(&game_id, &id).map_err(engine)?
            }
            Step::Reset { actor } => {
                let id = self.player_id(step_no, actor)?;
                self.service.reset_game(&game_id, &id).map_err(engine)?
            }
        };
        Ok(outcome)
    }

    fn player_id(&self, step: usize, name: &str) -> Result<String, ReplayError> {
        self.players
            .get(name)
            .cloned()
            .ok_or_else(|| ReplayError::UnknownPlayer {
                step,
                name: name.to_string(),
            })
    }
}
