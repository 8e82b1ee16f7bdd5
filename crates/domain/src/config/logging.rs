use serde::{Deserialize, Serialize};

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Filter directive passed to `EnvFilter` when `RUST_LOG` is unset,
    /// e.g. "info" or "ensdns_infrastructure=debug,info"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Colored output; turn off when logs go to a file or journal
    #[serde(default = "default_ansi")]
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            ansi: default_ansi(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_ansi() -> bool {
    true
}
