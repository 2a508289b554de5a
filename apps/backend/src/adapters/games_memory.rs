//! In-process game store backed by a sharded concurrent map.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::trace;

use crate::domain::state::Game;
use crate::error::AppError;
use crate::repos::games::{GameStore, StoreWrite};

/// Holding a map entry is the per-id lock: concurrent `transact` calls on
/// one id run one after another; other ids proceed unless they share a shard.
#[derive(Debug, Default)]
pub struct InMemoryGameStore {
    games: DashMap<String, Game>,
}

impl InMemoryGameStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn contains(&self, game_id: &str) -> bool {
        self.games.contains_key(game_id)
    }
}

impl GameStore for InMemoryGameStore {
    fn get(&self, game_id: &str) -> Result<Option<Game>, AppError> {
        Ok(self.games.get(game_id).map(|g| g.value().clone()))
    }

    fn put(&self, game_id: &str, game: Game) -> Result<(), AppError> {
        self.games.insert(game_id.to_string(), game);
        Ok(())
    }

    fn delete(&self, game_id: &str) -> Result<bool, AppError> {
        Ok(self.games.remove(game_id).is_some())
    }

    fn transact<R, F>(&self, game_id: &str, f: F) -> Result<R, AppError>
    where
        F: FnOnce(Option<&Game>) -> (StoreWrite, R),
    {
        let out = match self.games.entry(game_id.to_string()) {
            Entry::Occupied(mut occupied) => {
                let (write, out) = f(Some(occupied.get()));
                match write {
                    StoreWrite::Keep => {}
                    StoreWrite::Put(game) => {
                        occupied.insert(game);
                    }
                    StoreWrite::Delete => {
                        occupied.remove();
                    }
                }
                out
            }
            Entry::Vacant(vacant) => {
                let (write, out) = f(None);
                if let StoreWrite::Put(game) = write {
                    vacant.insert(game);
                }
                out
            }
        };
        trace!(game_id, "Store transaction committed");
        Ok(out)
    }
}
