pub mod cache_stats;
pub mod dns;

pub use cache_stats::CacheStatsJob;
pub use dns::start_dns_server;
