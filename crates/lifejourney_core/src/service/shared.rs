//! Lock-guarded handle for sharing one journey across threads.
//!
//! # Invariants
//! - Every read and write goes through the same mutex.
//! - A poisoned lock is recovered, not propagated.

use crate::service::journey_store::JourneyStore;
use log::warn;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable handle to one `JourneyStore` behind a single lock.
#[derive(Debug, Clone)]
pub struct SharedJourneyStore {
    inner: Arc<Mutex<JourneyStore>>,
}

impl SharedJourneyStore {
    pub fn new(store: JourneyStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Runs `f` with shared access. Borrowed query results must not escape `f`.
    pub fn read<T>(&self, f: impl FnOnce(&JourneyStore) -> T) -> T {
        let guard = self.lock();
        f(&*guard)
    }

    /// Runs `f` with exclusive access.
    pub fn write<T>(&self, f: impl FnOnce(&mut JourneyStore) -> T) -> T {
        let mut guard = self.lock();
        f(&mut *guard)
    }

    /// Returns the store when this is the last handle.
    pub fn try_into_inner(self) -> Result<JourneyStore, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(mutex) => Ok(mutex.into_inner().unwrap_or_else(PoisonError::into_inner)),
            Err(inner) => Err(Self { inner }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, JourneyStore> {
        self.inner.lock().unwrap_or_else(|poisoned| {
            warn!("event=lock_recover module=journey status=poisoned");
            poisoned.into_inner()
        })
    }
}
