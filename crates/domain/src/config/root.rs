use super::{CacheConfig, ConfigError, LoggingConfig, RegistryConfig, ServerConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub registry: RegistryConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Command-line values that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub listen_address: Option<String>,
    pub cache_size: Option<usize>,
    pub ns_domain: Option<String>,
    pub rpc_url: Option<String>,
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration from an optional TOML file, then apply CLI overrides.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(listen_address) = overrides.listen_address {
            self.server.listen_address = listen_address;
        }
        if let Some(cache_size) = overrides.cache_size {
            self.cache.max_entries = cache_size;
        }
        if let Some(ns_domain) = overrides.ns_domain {
            self.registry.ns_domain = ns_domain;
        }
        if let Some(rpc_url) = overrides.rpc_url {
            self.registry.rpc_url = rpc_url;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.socket_addr()?;

        if self.cache.max_entries == 0 {
            return Err(ConfigError::ZeroCacheCapacity);
        }

        let suffix = self.registry.ns_domain.trim_matches('.');
        if suffix.is_empty() {
            return Err(ConfigError::InvalidNsDomain(self.registry.ns_domain.clone()));
        }

        if self.registry.query_timeout == 0 {
            return Err(ConfigError::ZeroQueryTimeout);
        }

        if self.registry.root_servers.is_empty() {
            return Err(ConfigError::NoRootServers);
        }

        Ok(())
    }
}
