//! A store whose next read can be made to stall after it has taken its
//! value, so a snapshot sits in flight while other requests commit.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use domino_backend::{AppError, Game, GameStore, InMemoryGameStore, StoreWrite};

pub struct SlowReadStore {
    inner: InMemoryGameStore,
    armed: AtomicBool,
    pause: Duration,
}

impl SlowReadStore {
    pub fn new(pause: Duration) -> Self {
        Self {
            inner: InMemoryGameStore::new(),
            armed: AtomicBool::new(false),
            pause,
        }
    }

    /// Stall the next `get` once.
    pub fn arm(&self) {
        self.armed.store(true, Ordering::SeqCst);
    }

    /// Spin until an armed `get` has read its value and started stalling.
    pub fn wait_for_stalled_read(&self) {
        while self.armed.load(Ordering::SeqCst) {
            thread::yield_now();
        }
    }
}

impl GameStore for SlowReadStore {
    fn get(&self, game_id: &str) -> Result<Option<Game>, AppError> {
        let value = self.inner.get(game_id)?;
        if self.armed.swap(false, Ordering::SeqCst) {
            thread::sleep(self.pause);
        }
        Ok(value)
    }

    fn put(&self, game_id: &str, game: Game) -> Result<(), AppError> {
        self.inner.put(game_id, game)
    }

    fn delete(&self, game_id: &str) -> Result<bool, AppError> {
        self.inner.delete(game_id)
    }

    fn transact<R, F>(&self, game_id: &str, f: F) -> Result<R, AppError>
    where
        F: FnOnce(Option<&Game>) -> (StoreWrite, R),
    {
        self.inner.transact(game_id, f)
    }
}
