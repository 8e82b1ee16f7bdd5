use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid listen address '{0}'")]
    InvalidListenAddress(String),

    #[error("Cache capacity must be greater than zero")]
    ZeroCacheCapacity,

    #[error("Delegation suffix must be a non-empty domain suffix, got '{0}'")]
    InvalidNsDomain(String),

    #[error("Upstream query timeout must be greater than zero")]
    ZeroQueryTimeout,

    #[error("Root server list cannot be empty")]
    NoRootServers,
}
