use super::{NsTransport, TransportResponse};
use async_trait::async_trait;
use ensdns_domain::DomainError;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::{lookup_host, UdpSocket};
use tracing::{debug, warn};

/// Maximum UDP DNS response size with EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

const DNS_PORT: u16 = 53;

/// DNS over UDP, one ephemeral socket per exchange.
#[derive(Debug, Default, Clone, Copy)]
pub struct UdpTransport;

impl UdpTransport {
    pub fn new() -> Self {
        Self
    }

    async fn resolve(server: &str, timeout: Duration) -> Result<SocketAddr, DomainError> {
        if let Ok(addr) = server.parse::<SocketAddr>() {
            return Ok(addr);
        }
        if let Ok(ip) = server.parse::<IpAddr>() {
            return Ok(SocketAddr::new(ip, DNS_PORT));
        }

        let host = server.trim_end_matches('.');
        let mut addrs = tokio::time::timeout(timeout, lookup_host((host, DNS_PORT)))
            .await
            .map_err(|_| DomainError::TransportTimeout {
                server: server.to_string(),
            })?
            .map_err(|e| DomainError::UpstreamFailure {
                server: server.to_string(),
                reason: format!("address lookup failed: {}", e),
            })?;

        addrs.next().ok_or_else(|| DomainError::UpstreamFailure {
            server: server.to_string(),
            reason: "no addresses".to_string(),
        })
    }
}

#[async_trait]
impl NsTransport for UdpTransport {
    async fn exchange(
        &self,
        server: &str,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let server_addr = Self::resolve(server, timeout).await?;

        let bind_addr = if server_addr.is_ipv4() {
            SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 0)
        } else {
            SocketAddr::new(IpAddr::V6(Ipv6Addr::UNSPECIFIED), 0)
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| DomainError::IoError(format!("Failed to bind UDP socket: {}", e)))?;

        let bytes_sent = socket
            .send_to(message_bytes, server_addr)
            .await
            .map_err(|e| DomainError::UpstreamFailure {
                server: server.to_string(),
                reason: format!("send failed: {}", e),
            })?;

        debug!(server = %server, addr = %server_addr, bytes_sent = bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        let (bytes_received, from_addr) =
            tokio::time::timeout(timeout, socket.recv_from(&mut recv_buf))
                .await
                .map_err(|_| DomainError::TransportTimeout {
                    server: server.to_string(),
                })?
                .map_err(|e| DomainError::UpstreamFailure {
                    server: server.to_string(),
                    reason: format!("receive failed: {}", e),
                })?;

        if from_addr.ip() != server_addr.ip() {
            warn!(
                expected = %server_addr,
                received_from = %from_addr,
                "UDP response from unexpected source"
            );
        }

        recv_buf.truncate(bytes_received);

        debug!(server = %server, bytes_received = bytes_received, "UDP response received");

        Ok(TransportResponse { bytes: recv_buf })
    }
}
