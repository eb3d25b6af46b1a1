//! Write-once-after-success cache cell with single-flight population.
//!
//! The value is read lock-free once set. Population runs under a per-slot
//! async mutex; callers queued behind an attempt share its outcome instead
//! of starting their own.

use std::fmt;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

use tokio::sync::Mutex;

pub struct SingleFlightSlot<T> {
    value: OnceLock<Arc<T>>,
    /// Number of attempts that ran to completion (success or failure)
    completed_attempts: AtomicU64,
    flight: Mutex<()>,
}

impl<T> SingleFlightSlot<T> {
    /// The cached value, if a population attempt has succeeded.
    pub fn get(&self) -> Option<Arc<T>> {
        self.value.get().cloned()
    }

    pub fn is_populated(&self) -> bool {
        self.value.get().is_some()
    }

    /// Return the cached value, or run `populate` to produce it.
    ///
    /// At most one `populate` runs at a time. A caller that had to wait for
    /// another caller's attempt returns that attempt's result (`None` on
    /// failure) without running its own. A failed attempt leaves the slot
    /// empty, so the next caller to arrive afterwards tries again.
    pub async fn get_or_populate<F, Fut>(&self, populate: F) -> Option<Arc<T>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Option<T>>,
    {
        if let Some(value) = self.get() {
            return Some(value);
        }

        let seen = self.completed_attempts.load(Ordering::Acquire);
        let _guard = self.flight.lock().await;

        if let Some(value) = self.get() {
            return Some(value);
        }
        if self.completed_attempts.load(Ordering::Acquire) != seen {
            // An attempt failed while we were queued behind it
            return None;
        }

        let outcome = populate().await.map(Arc::new);
        if let Some(ref value) = outcome {
            // Only ever set under the flight lock, so this cannot race
            let _ = self.value.set(Arc::clone(value));
        }
        self.completed_attempts.fetch_add(1, Ordering::Release);
        outcome
    }
}

impl<T> Default for SingleFlightSlot<T> {
    fn default() -> Self {
        Self {
            value: OnceLock::new(),
            completed_attempts: AtomicU64::new(0),
            flight: Mutex::new(()),
        }
    }
}

/// Cloning yields an empty slot: a copy is a new instance with its own cache.
impl<T> Clone for SingleFlightSlot<T> {
    fn clone(&self) -> Self {
        Self::default()
    }
}

impl<T> fmt::Debug for SingleFlightSlot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SingleFlightSlot")
            .field("populated", &self.is_populated())
            .field(
                "completed_attempts",
                &self.completed_attempts.load(Ordering::Relaxed),
            )
            .finish()
    }
}
