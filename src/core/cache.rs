//! In-memory LRU cache with per-entry expiry.
//!
//! Each cache is owned by whoever builds it (usually a `CachedProvider`).
//! Time comes from an injected [`Clock`] so staleness can be tested without
//! sleeping.

use log::debug;
use lru::LruCache;
use std::{
    hash::Hash,
    num::NonZeroUsize,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::{Duration, Instant},
};

use crate::error::{FantasyError, Result};

/// Source of the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    start: Instant,
    offset: Mutex<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            offset: Mutex::new(Duration::ZERO),
        }
    }

    /// Move the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        let mut offset = self.offset.lock().unwrap_or_else(PoisonError::into_inner);
        *offset += by;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        let offset = *self.offset.lock().unwrap_or_else(PoisonError::into_inner);
        self.start + offset
    }
}

/// Capacity-bounded LRU cache whose entries expire `ttl` after insertion.
pub struct TtlCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    entries: Mutex<LruCache<K, (Instant, V)>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl<K, V> TtlCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    /// Create a cache on the wall clock.
    pub fn new(capacity: usize, ttl: Duration) -> Result<Self> {
        Self::with_clock(capacity, ttl, Arc::new(SystemClock))
    }

    pub fn with_clock(capacity: usize, ttl: Duration, clock: Arc<dyn Clock>) -> Result<Self> {
        let capacity = NonZeroUsize::new(capacity).ok_or_else(|| FantasyError::Cache {
            message: "cache capacity must be greater than zero".to_string(),
        })?;
        Ok(Self {
            entries: Mutex::new(LruCache::new(capacity)),
            ttl,
            clock,
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, LruCache<K, (Instant, V)>>> {
        self.entries.lock().map_err(|_| FantasyError::Cache {
            message: "cache lock poisoned".to_string(),
        })
    }

    /// Get a fresh entry. Expired entries are dropped and reported as misses.
    pub fn get(&self, key: &K) -> Result<Option<V>> {
        let now = self.clock.now();
        let mut entries = self.lock()?;
        let expired = match entries.get(key) {
            Some((stored_at, value)) if now.duration_since(*stored_at) < self.ttl => {
                return Ok(Some(value.clone()));
            }
            Some(_) => true,
            None => false,
        };
        if expired {
            debug!("Cache entry expired after {:?}", self.ttl);
            entries.pop(key);
        }
        Ok(None)
    }

    pub fn put(&self, key: K, value: V) -> Result<()> {
        let now = self.clock.now();
        self.lock()?.put(key, (now, value));
        Ok(())
    }

    /// Drop one entry. Returns whether it was present.
    pub fn invalidate(&self, key: &K) -> Result<bool> {
        Ok(self.lock()?.pop(key).is_some())
    }

    pub fn clear(&self) -> Result<()> {
        self.lock()?.clear();
        Ok(())
    }

    /// Number of stored entries, including any not yet found to be expired.
    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}
