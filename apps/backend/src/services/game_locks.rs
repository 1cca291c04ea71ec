//! Per-game async mutex registry.
//!
//! Round submission and King selection for one game run while holding that
//! game's guard, from the initial game load through the last write.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::trace;

type Registry = DashMap<i64, Arc<Mutex<()>>>;

#[derive(Debug, Clone, Default)]
pub struct GameLocks {
    inner: Arc<Registry>,
}

/// Held for the duration of a game's critical section. On drop, the game's
/// entry leaves the registry unless another task holds or awaits it.
#[derive(Debug)]
pub struct GameLockGuard {
    game_id: i64,
    guard: Option<OwnedMutexGuard<()>>,
    registry: Arc<Registry>,
}

impl Drop for GameLockGuard {
    fn drop(&mut self) {
        drop(self.guard.take());
        // Waiters clone the Arc under the shard lock, so a count of 1 means
        // only the registry still refers to this mutex.
        let removed = self
            .registry
            .remove_if(&self.game_id, |_, lock| Arc::strong_count(lock) == 1);
        if removed.is_some() {
            trace!(game_id = self.game_id, "game lock released and evicted");
        }
    }
}

impl GameLocks {
    /// Wait for and take the lock for `game_id`.
    pub async fn acquire(&self, game_id: i64) -> GameLockGuard {
        // Clone the Arc out so the DashMap shard lock is released before awaiting.
        let lock = self
            .inner
            .entry(game_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        let guard = lock.lock_owned().await;
        trace!(game_id, "game lock acquired");
        GameLockGuard {
            game_id,
            guard: Some(guard),
            registry: Arc::clone(&self.inner),
        }
    }

    /// Number of games currently locked or awaited.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
