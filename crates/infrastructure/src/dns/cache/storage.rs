use super::{AdaptiveCache, CacheEntry, CacheKey, CacheMetrics, CachedValue, RegistryMapping};
use crate::dns::zone::ZoneTree;
use ensdns_domain::Address;
use hickory_proto::rr::Name;
use std::num::NonZeroUsize;
use std::sync::atomic::Ordering as AtomicOrdering;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Bounded store shared by every request handler.
///
/// Holds registry mappings and zone trees side by side under one capacity.
/// Expiry is checked on read: an expired entry is reported as a miss but
/// stays resident until replaced or evicted.
pub struct ResolutionCache {
    entries: Mutex<AdaptiveCache<CacheKey, CacheEntry>>,
    metrics: Arc<CacheMetrics>,
}

impl ResolutionCache {
    pub fn new(capacity: NonZeroUsize) -> Self {
        info!(max_entries = capacity.get(), "Initializing resolution cache");

        Self {
            entries: Mutex::new(AdaptiveCache::new(capacity)),
            metrics: Arc::new(CacheMetrics::default()),
        }
    }

    pub fn get_registry(&self, name: &Name) -> Option<RegistryMapping> {
        match self.lookup(&CacheKey::registry(name))? {
            CachedValue::Registry(mapping) => Some(mapping),
            CachedValue::Zone(_) => None,
        }
    }

    pub fn put_registry(&self, name: &Name, mapping: RegistryMapping, ttl: Duration) {
        self.store(
            CacheKey::registry(name),
            CacheEntry::new(CachedValue::Registry(mapping), ttl),
        );
    }

    pub fn get_zone(&self, registry: &Address, name: &Name) -> Option<Arc<ZoneTree>> {
        match self.lookup(&CacheKey::zone(registry, name))? {
            CachedValue::Zone(zone) => Some(zone),
            CachedValue::Registry(_) => None,
        }
    }

    pub fn put_zone(&self, registry: &Address, name: &Name, zone: Arc<ZoneTree>, ttl: Duration) {
        self.store(
            CacheKey::zone(registry, name),
            CacheEntry::new(CachedValue::Zone(zone), ttl),
        );
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.entries().capacity()
    }

    pub fn metrics(&self) -> Arc<CacheMetrics> {
        Arc::clone(&self.metrics)
    }

    fn lookup(&self, key: &CacheKey) -> Option<CachedValue> {
        let now = Instant::now();
        let mut entries = self.entries();

        let Some(entry) = entries.get(key) else {
            self.metrics.misses.fetch_add(1, AtomicOrdering::Relaxed);
            return None;
        };

        if entry.is_expired(now) {
            self.metrics.expired.fetch_add(1, AtomicOrdering::Relaxed);
            self.metrics.misses.fetch_add(1, AtomicOrdering::Relaxed);
            debug!(key = ?key, "Cache entry expired");
            return None;
        }

        self.metrics.hits.fetch_add(1, AtomicOrdering::Relaxed);
        Some(entry.value.clone())
    }

    fn store(&self, key: CacheKey, entry: CacheEntry) {
        let evicted = self.entries().put(key, entry);

        self.metrics.insertions.fetch_add(1, AtomicOrdering::Relaxed);
        if let Some((evicted_key, _)) = evicted {
            self.metrics.evictions.fetch_add(1, AtomicOrdering::Relaxed);
            debug!(key = ?evicted_key, "Cache entry evicted");
        }
    }

    fn entries(&self) -> MutexGuard<'_, AdaptiveCache<CacheKey, CacheEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
