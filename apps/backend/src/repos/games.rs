//! Game store abstraction.
//!
//! A store holds whole `Game` records keyed by id. Every call is atomic per
//! id; `transact` is the read-modify-write primitive the service builds every
//! mutation on, so any single-writer backend (per-key lock, actor,
//! transactional database) can stand behind it.

use crate::domain::state::Game;
use crate::error::AppError;

/// What `transact` should do with the record once the closure returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreWrite {
    /// Leave the stored record as it was.
    Keep,
    /// Replace (or create) the record.
    Put(Game),
    /// Remove the record.
    Delete,
}

pub trait GameStore: Send + Sync {
    fn get(&self, game_id: &str) -> Result<Option<Game>, AppError>;

    fn put(&self, game_id: &str, game: Game) -> Result<(), AppError>;

    /// Returns whether a record was removed.
    fn delete(&self, game_id: &str) -> Result<bool, AppError>;

    /// Run `f` against the current record while holding the id exclusively.
    ///
    /// `f` must not call back into the store.
    fn transact<R, F>(&self, game_id: &str, f: F) -> Result<R, AppError>
    where
        F: FnOnce(Option<&Game>) -> (StoreWrite, R);
}
