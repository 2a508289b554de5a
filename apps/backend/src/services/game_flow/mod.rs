//! Game lifecycle service: binds the pure domain transitions to a keyed
//! store and pushes fresh snapshots to subscribers.
//!
//! Every mutating call is one `GameStore::transact` against the stored
//! record, so authority checks always see the freshest state. Requests the
//! rules reject leave the record untouched and come back as
//! `ActionOutcome::Ignored`; only store failures, unknown games on join and
//! full tables are reported as `AppError`.

mod mutation;
mod player_actions;
mod round_lifecycle;
mod seats;

use std::sync::Arc;

use parking_lot::Mutex;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::debug;

use crate::adapters::games_memory::InMemoryGameStore;
use crate::config::engine::EngineConfig;
use crate::domain::state::Game;
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::realtime::hub::{GameHub, Listener, Subscription};
use crate::realtime::protocol::GameUpdate;
use crate::repos::games::GameStore;

pub use mutation::GameFlowMutationResult;

/// Result of a request under the drop-silently policy.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Applied,
    /// Rejected by the rules; nothing changed.
    Ignored(DomainError),
}

impl ActionOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, ActionOutcome::Applied)
    }

    pub fn rejection(&self) -> Option<&DomainError> {
        match self {
            ActionOutcome::Applied => None,
            ActionOutcome::Ignored(err) => Some(err),
        }
    }
}

pub struct GameFlowService<S: GameStore = InMemoryGameStore> {
    store: Arc<S>,
    hub: Arc<GameHub>,
    rng: Mutex<ChaCha20Rng>,
    config: EngineConfig,
}

impl GameFlowService<InMemoryGameStore> {
    pub fn in_memory(config: EngineConfig) -> Self {
        Self::new(Arc::new(InMemoryGameStore::new()), config)
    }

    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::in_memory(EngineConfig::from_env()?))
    }
}

impl<S: GameStore> GameFlowService<S> {
    pub fn new(store: Arc<S>, config: EngineConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => ChaCha20Rng::seed_from_u64(seed),
            None => ChaCha20Rng::from_rng(&mut rand::rng()),
        };
        Self {
            store,
            hub: Arc::new(GameHub::new()),
            rng: Mutex::new(rng),
            config,
        }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    pub fn hub(&self) -> &Arc<GameHub> {
        &self.hub
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn get_game(&self, game_id: &str) -> Result<Option<Game>, AppError> {
        self.store.get(game_id)
    }

    /// Register `on_update` for `game_id`. It is called right away with the
    /// current record (or `Deleted` if there is none), then after every
    /// change with the freshest stored record. Updates reach the listener in
    /// the order they were read from the store, so its last snapshot always
    /// matches the last committed change.
    pub fn subscribe<F>(&self, game_id: &str, on_update: F) -> Result<Subscription, AppError>
    where
        F: Fn(&GameUpdate) + Send + Sync + 'static,
    {
        let listener: Arc<Listener> = Arc::new(on_update);
        let subscription = self
            .hub
            .subscribe_with(game_id, listener, || self.current_update(game_id))?;
        debug!(game_id, token = %subscription.token(), "Subscribed");
        Ok(subscription)
    }

    fn current_update(&self, game_id: &str) -> Result<GameUpdate, AppError> {
        Ok(match self.store.get(game_id)? {
            Some(game) => GameUpdate::Snapshot { game },
            None => GameUpdate::Deleted {
                game_id: game_id.to_string(),
            },
        })
    }

    /// Push the freshest stored state for `game_id`. Called after the store
    /// transaction has released its lock; the hub serialises the read and
    /// the delivery per game.
    fn publish(&self, game_id: &str) -> Result<(), AppError> {
        let delivered = self
            .hub
            .publish_with(game_id, || self.current_update(game_id))?;
        debug!(game_id, delivered, "Published update");
        Ok(())
    }
}

impl<R> From<Result<GameFlowMutationResult<R>, DomainError>> for ActionOutcome {
    fn from(result: Result<GameFlowMutationResult<R>, DomainError>) -> Self {
        match result {
            Ok(_) => ActionOutcome::Applied,
            Err(err) => ActionOutcome::Ignored(err),
        }
    }
}
