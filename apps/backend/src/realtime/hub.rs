use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use dashmap::DashMap;
use parking_lot::ReentrantMutex;
use tracing::{debug, trace};
use uuid::Uuid;

use crate::realtime::protocol::GameUpdate;

/// Callback invoked with every update for a subscribed game.
pub type Listener = dyn Fn(&GameUpdate) + Send + Sync;

struct Registered {
    listener: Arc<Listener>,
    /// Sequence number of the newest update this listener has been given.
    last_seq: AtomicU64,
}

impl Registered {
    /// Call the listener unless it already saw `seq` or something newer.
    fn deliver(&self, seq: u64, update: &GameUpdate) -> bool {
        if self.last_seq.fetch_max(seq, Ordering::AcqRel) >= seq {
            return false;
        }
        (self.listener)(update);
        true
    }
}

/// Listeners of one game plus the ordering state for its updates.
struct Channel {
    /// Held from reading the snapshot until every listener has it, so reads
    /// reach listeners in the order they were taken. Reentrant: a listener
    /// may act on the same game from inside its callback.
    order: ReentrantMutex<()>,
    seq: AtomicU64,
    listeners: DashMap<Uuid, Arc<Registered>>,
}

impl Channel {
    fn new() -> Self {
        Self {
            order: ReentrantMutex::new(()),
            seq: AtomicU64::new(0),
            listeners: DashMap::new(),
        }
    }

    fn next_seq(&self) -> u64 {
        self.seq.fetch_add(1, Ordering::AcqRel) + 1
    }
}

/// Per-game listener registry.
///
/// Every delivery reads the snapshot itself (through the `read` closure
/// callers pass in) while holding the game's ordering lock. A listener's
/// last update is therefore never older than the last change published for
/// its game.
#[derive(Default)]
pub struct GameHub {
    sessions: DashMap<String, Arc<Channel>>,
}

impl GameHub {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    pub fn register(&self, game_id: &str, listener: Arc<Listener>) -> Uuid {
        self.register_entry(game_id, listener).0
    }

    fn register_entry(&self, game_id: &str, listener: Arc<Listener>) -> (Uuid, Arc<Channel>, Arc<Registered>) {
        let token = Uuid::new_v4();
        let registered = Arc::new(Registered {
            listener,
            last_seq: AtomicU64::new(0),
        });
        // Insert under the outer entry guard so `unregister` cannot drop the
        // channel between lookup and insert.
        let entry = self
            .sessions
            .entry(game_id.to_string())
            .or_insert_with(|| Arc::new(Channel::new()));
        entry.listeners.insert(token, Arc::clone(&registered));
        let channel = Arc::clone(entry.value());
        drop(entry);
        trace!(game_id, %token, "Listener registered");
        (token, channel, registered)
    }

    /// Register `listener` and hand it the snapshot `read` returns, ordered
    /// against concurrent `publish_with` calls for the same game.
    pub fn subscribe_with<F, E>(
        self: &Arc<Self>,
        game_id: &str,
        listener: Arc<Listener>,
        read: F,
    ) -> Result<Subscription, E>
    where
        F: FnOnce() -> Result<GameUpdate, E>,
    {
        let (token, channel, registered) = self.register_entry(game_id, listener);
        let subscription = Subscription::new(self, game_id, token);

        let _order = channel.order.lock();
        let update = read()?;
        registered.deliver(channel.next_seq(), &update);
        Ok(subscription)
    }

    /// Read the current snapshot with `read` and deliver it to every
    /// listener of `game_id`. A `Deleted` update closes the channel once
    /// delivered. Games nobody listens to are not read at all.
    ///
    /// Returns how many listeners were called.
    pub fn publish_with<F, E>(&self, game_id: &str, read: F) -> Result<usize, E>
    where
        F: FnOnce() -> Result<GameUpdate, E>,
    {
        let Some(channel) = self.sessions.get(game_id).map(|c| Arc::clone(c.value())) else {
            return Ok(0);
        };

        let _order = channel.order.lock();
        let update = read()?;
        let seq = channel.next_seq();
        // Listeners run with no registry guard held, so they may subscribe
        // or unsubscribe from inside the callback.
        let listeners: Vec<Arc<Registered>> = channel
            .listeners
            .iter()
            .map(|l| Arc::clone(l.value()))
            .collect();
        let delivered = listeners.iter().filter(|l| l.deliver(seq, &update)).count();

        if matches!(update, GameUpdate::Deleted { .. }) {
            self.close(game_id);
        }
        Ok(delivered)
    }

    pub fn unregister(&self, game_id: &str, token: Uuid) {
        if let Some(channel) = self.sessions.get(game_id) {
            channel.listeners.remove(&token);
        }
        // The read guard above must be gone before touching the outer map.
        self.sessions.remove_if(game_id, |_, channel| channel.listeners.is_empty());
    }

    /// Drop every listener for `game_id`.
    pub fn close(&self, game_id: &str) {
        if let Some((_, channel)) = self.sessions.remove(game_id) {
            debug!(game_id, listeners = channel.listeners.len(), "Hub closed for game");
        }
    }

    pub fn subscriber_count(&self, game_id: &str) -> usize {
        self.sessions.get(game_id).map(|c| c.listeners.len()).unwrap_or(0)
    }
}

/// Handle returned by `subscribe`; dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    hub: Weak<GameHub>,
    game_id: String,
    token: Uuid,
}

impl Subscription {
    pub(crate) fn new(hub: &Arc<GameHub>, game_id: &str, token: Uuid) -> Self {
        Self {
            hub: Arc::downgrade(hub),
            game_id: game_id.to_string(),
            token,
        }
    }

    pub fn game_id(&self) -> &str {
        &self.game_id
    }

    pub fn token(&self) -> Uuid {
        self.token
    }

    pub fn unsubscribe(self) {
        // Drop does the work.
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(hub) = self.hub.upgrade() {
            hub.unregister(&self.game_id, self.token);
        }
    }
}
