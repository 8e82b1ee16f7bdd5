use ensdns_infrastructure::dns::cache::ResolutionCache;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub struct CacheStatsJob {
    cache: Arc<ResolutionCache>,
    interval_secs: u64,
}

impl CacheStatsJob {
    pub fn new(cache: Arc<ResolutionCache>) -> Self {
        Self {
            cache,
            interval_secs: 300,
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs;
        self
    }

    pub fn start(self) {
        if self.interval_secs == 0 {
            info!("Cache statistics reporting disabled");
            return;
        }

        info!(interval_secs = self.interval_secs, "Starting cache statistics job");

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            // First tick completes immediately.
            interval.tick().await;
            loop {
                interval.tick().await;
                self.report();
            }
        });
    }

    fn report(&self) {
        let metrics = self.cache.metrics();
        info!(
            entries = self.cache.len(),
            capacity = self.cache.capacity(),
            hit_rate_pct = metrics.hit_rate(),
            hits = metrics.hits.load(Ordering::Relaxed),
            misses = metrics.misses.load(Ordering::Relaxed),
            expired = metrics.expired.load(Ordering::Relaxed),
            insertions = metrics.insertions.load(Ordering::Relaxed),
            evictions = metrics.evictions.load(Ordering::Relaxed),
            "Resolution cache statistics"
        );
    }
}
