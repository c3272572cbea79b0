// Per-key async mutual exclusion.
//
// Purpose
// - Serialize load/modify/save cycles for one employee while other employees proceed in parallel.
//
// Responsibilities
// - Hand out one async mutex per key, shared by every caller waiting on that key.
// - Count holders and waiters per key, including callers whose wait is cancelled.
// - Forget a key once that count drops to zero.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

struct Slot {
    mutex: Arc<AsyncMutex<()>>,
    users: usize,
}

type Registry = Arc<Mutex<HashMap<String, Slot>>>;

#[derive(Default, Clone)]
pub struct KeyedLocks {
    registry: Registry,
}

/// Registered before the wait starts, so dropping a pending `lock` future still releases the slot.
pub struct KeyGuard {
    key: String,
    guard: Option<OwnedMutexGuard<()>>,
    registry: Registry,
}

impl KeyedLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn lock(&self, key: &str) -> KeyGuard {
        let mutex = {
            let mut registry = lock_registry(&self.registry);
            let slot = registry.entry(key.to_string()).or_insert_with(|| Slot {
                mutex: Arc::new(AsyncMutex::new(())),
                users: 0,
            });
            slot.users += 1;
            slot.mutex.clone()
        };
        let mut key_guard = KeyGuard {
            key: key.to_string(),
            guard: None,
            registry: self.registry.clone(),
        };
        key_guard.guard = Some(mutex.lock_owned().await);
        key_guard
    }

    /// Number of keys currently held or awaited.
    pub fn active_keys(&self) -> usize {
        lock_registry(&self.registry).len()
    }
}

impl Drop for KeyGuard {
    fn drop(&mut self) {
        drop(self.guard.take());
        let mut registry = lock_registry(&self.registry);
        let idle = match registry.get_mut(&self.key) {
            Some(slot) => {
                slot.users = slot.users.saturating_sub(1);
                slot.users == 0
            }
            None => false,
        };
        if idle {
            registry.remove(&self.key);
        }
    }
}

fn lock_registry(registry: &Registry) -> MutexGuard<'_, HashMap<String, Slot>> {
    registry.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
