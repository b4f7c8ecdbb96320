//! Shared unsaved-edit store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root `App` creates one `DirtyStore` and provides it through context.
//! Every editor section, the unload guard, and any "unsaved changes" badge
//! talk to that single instance. Each mutation is persisted immediately and
//! observers are pushed the new state instead of polling storage.

#[cfg(test)]
#[path = "dirty_store_test.rs"]
mod dirty_store_test;

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::dirty::DirtyState;
use crate::util::storage::SharedStore;

type Listener = Arc<dyn Fn(&DirtyState) + Send + Sync>;

/// Handle returned by [`DirtyStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Inner {
    state: DirtyState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

/// Cloneable handle; all clones share one state.
#[derive(Clone)]
pub struct DirtyStore {
    inner: Arc<Mutex<Inner>>,
    storage: SharedStore,
}

impl fmt::Debug for DirtyStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.lock();
        f.debug_struct("DirtyStore")
            .field("state", &inner.state)
            .field("listeners", &inner.listeners.len())
            .finish_non_exhaustive()
    }
}

impl DirtyStore {
    /// Create a store seeded from whatever `storage` already holds.
    pub fn new(storage: SharedStore) -> Self {
        let state = DirtyState::load(storage.as_ref());
        Self {
            inner: Arc::new(Mutex::new(Inner { state, listeners: Vec::new(), next_id: 0 })),
            storage,
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.lock().state.is_dirty()
    }

    pub fn snapshot(&self) -> DirtyState {
        self.lock().state.clone()
    }

    /// Set or clear dirty status for `section` (or the whole form).
    pub fn track(&self, is_dirty: bool, section: Option<&str>) {
        self.mutate(|state| state.track(is_dirty, section), false);
    }

    pub fn mark(&self, section: &str) {
        self.track(true, Some(section));
    }

    pub fn unmark(&self, section: &str) {
        self.track(false, Some(section));
    }

    /// Forget every dirty section and drop both storage keys.
    pub fn reset(&self) {
        self.mutate(DirtyState::clear, true);
    }

    /// Register `listener` to receive the state after every observable change.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&DirtyState) + Send + Sync + 'static,
    {
        let mut inner = self.lock();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.listeners.push((id, Arc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.lock().listeners.retain(|(existing, _)| *existing != id);
    }

    pub fn subscriber_count(&self) -> usize {
        self.lock().listeners.len()
    }

    fn mutate<F>(&self, apply: F, clear_storage: bool)
    where
        F: FnOnce(&mut DirtyState),
    {
        let (snapshot, listeners) = {
            let mut inner = self.lock();
            let before = inner.state.clone();
            apply(&mut inner.state);

            // A clean no-op on a store whose keys were already removed leaves
            // them absent.
            let stays_unpersisted = inner.state == before
                && !inner.state.is_dirty()
                && !DirtyState::is_persisted(self.storage.as_ref());
            if clear_storage {
                DirtyState::clear_persisted(self.storage.as_ref());
            } else if !stays_unpersisted {
                inner.state.persist(self.storage.as_ref());
            }

            if inner.state == before {
                return;
            }
            let listeners: Vec<Listener> = inner.listeners.iter().map(|(_, l)| Arc::clone(l)).collect();
            (inner.state.clone(), listeners)
        };

        // Lock released: listeners may call back into the store.
        for listener in listeners {
            listener(&snapshot);
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
