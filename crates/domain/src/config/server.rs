use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Address to serve DNS on. A bare `:port` binds all IPv4 interfaces.
    #[serde(default = "default_listen_address")]
    pub listen_address: String,

    /// Idle timeout for TCP connections, in seconds
    #[serde(default = "default_tcp_timeout")]
    pub tcp_timeout: u64,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let address = if self.listen_address.starts_with(':') {
            format!("0.0.0.0{}", self.listen_address)
        } else {
            self.listen_address.clone()
        };

        address
            .parse()
            .map_err(|_| ConfigError::InvalidListenAddress(self.listen_address.clone()))
    }
}

fn default_listen_address() -> String {
    ":53".to_string()
}

fn default_tcp_timeout() -> u64 {
    10
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_address: default_listen_address(),
            tcp_timeout: default_tcp_timeout(),
        }
    }
}
