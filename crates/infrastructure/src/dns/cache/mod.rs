pub mod adaptive;
pub mod entry;
pub mod key;
pub mod metrics;
pub mod storage;

pub use adaptive::AdaptiveCache;
pub use entry::{CacheEntry, CachedValue, RegistryMapping};
pub use key::CacheKey;
pub use metrics::CacheMetrics;
pub use storage::ResolutionCache;
