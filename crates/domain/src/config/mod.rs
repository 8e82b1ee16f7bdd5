//! Configuration module for ensdns
//!
//! - `root`: Main configuration and CLI overrides
//! - `server`: Listen address and TCP timeouts
//! - `registry`: Delegation suffix, chain RPC endpoint, discovery settings
//! - `cache`: Resolution cache capacity
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod cache;
pub mod errors;
pub mod logging;
pub mod registry;
pub mod root;
pub mod server;

pub use cache::CacheConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use registry::RegistryConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
