use serde::{Deserialize, Serialize};

/// Resolution cache configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Maximum number of entries (registry mappings and zones combined)
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,

    /// Seconds between cache statistics reports; 0 disables them
    #[serde(default = "default_stats_interval")]
    pub stats_interval_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
            stats_interval_secs: default_stats_interval(),
        }
    }
}

fn default_max_entries() -> usize {
    65_536
}

fn default_stats_interval() -> u64 {
    300
}
