//! In-memory cache with per-entry expiry, backed by `moka`.
//!
//! Owned by whoever constructs it (typically [`CopyService`](crate::CopyService));
//! there is no process-wide instance.

use std::time::{Duration, Instant};

use moka::Expiry;
use moka::sync::Cache;

pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

#[derive(Debug, Clone)]
struct Entry<V> {
    value: V,
    ttl: Duration,
}

/// Each entry lives for the TTL it was stored with; overwriting restarts it.
struct PerEntryTtl;

impl<V> Expiry<String, Entry<V>> for PerEntryTtl {
    fn expire_after_create(&self, _key: &String, entry: &Entry<V>, _created_at: Instant) -> Option<Duration> {
        Some(entry.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        entry: &Entry<V>,
        _updated_at: Instant,
        _remaining: Option<Duration>,
    ) -> Option<Duration> {
        Some(entry.ttl)
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Live entries once pending evictions have run.
    pub entries: u64,
}

pub struct TtlCache<V> {
    inner: Cache<String, Entry<V>>,
    default_ttl: Duration,
}

impl<V: Clone + Send + Sync + 'static> Default for TtlCache<V> {
    fn default() -> Self {
        Self::with_default_ttl(DEFAULT_TTL)
    }
}

impl<V: Clone + Send + Sync + 'static> TtlCache<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_ttl(default_ttl: Duration) -> Self {
        Self { inner: Cache::builder().expire_after(PerEntryTtl).build(), default_ttl }
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Stores `value`; `ttl` of `None` uses the default.
    pub fn set(&self, key: impl Into<String>, value: V, ttl: Option<Duration>) {
        let ttl = ttl.unwrap_or(self.default_ttl);
        self.inner.insert(key.into(), Entry { value, ttl });
    }

    /// Live value for `key`; expired entries are never returned.
    pub fn get(&self, key: &str) -> Option<V> {
        self.inner.get(key).map(|e| e.value)
    }

    pub fn has(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    pub fn remove(&self, key: &str) -> Option<V> {
        self.inner.remove(key).map(|e| e.value)
    }

    pub fn clear(&self) {
        self.inner.invalidate_all();
    }

    /// Runs pending evictions first, so expired entries are not counted.
    pub fn stats(&self) -> CacheStats {
        self.inner.run_pending_tasks();
        CacheStats { entries: self.inner.entry_count() }
    }
}
