use serde::{Deserialize, Serialize};

/// Registry discovery and chain access configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RegistryConfig {
    /// Domain suffix identifying nameservers that encode a registry address
    #[serde(default = "default_ns_domain")]
    pub ns_domain: String,

    /// JSON-RPC endpoint of the chain node
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,

    /// Read timeout for each upstream NS query, in milliseconds
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,

    /// Servers the discovery walk starts from
    #[serde(default = "default_root_servers")]
    pub root_servers: Vec<String>,
}

impl RegistryConfig {
    /// The delegation suffix, lower-cased and always ending in a dot.
    pub fn normalized_ns_domain(&self) -> String {
        let mut suffix = self.ns_domain.to_ascii_lowercase();
        if !suffix.ends_with('.') {
            suffix.push('.');
        }
        suffix
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            ns_domain: default_ns_domain(),
            rpc_url: default_rpc_url(),
            query_timeout: default_query_timeout(),
            root_servers: default_root_servers(),
        }
    }
}

fn default_ns_domain() -> String {
    ".ens.domains.".to_string()
}

fn default_rpc_url() -> String {
    "http://localhost:8545".to_string()
}

fn default_query_timeout() -> u64 {
    5000
}

fn default_root_servers() -> Vec<String> {
    ('a'..='m')
        .map(|letter| format!("{letter}.root-servers.net"))
        .collect()
}
