pub mod udp;

use async_trait::async_trait;
use ensdns_domain::DomainError;
use std::time::Duration;

pub use udp::UdpTransport;

/// Result of a raw DNS exchange
#[derive(Debug)]
pub struct TransportResponse {
    /// Raw DNS response bytes (wire format)
    pub bytes: Vec<u8>,
}

/// Sends one wire-format query to a named server and returns its reply.
///
/// `server` is whatever the discovery walk holds: a root or nameserver host
/// name, an IP address, or an `ip:port` pair. A reply that does not arrive
/// within `timeout` is reported as [`DomainError::TransportTimeout`].
#[async_trait]
pub trait NsTransport: Send + Sync {
    async fn exchange(
        &self,
        server: &str,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;
}
