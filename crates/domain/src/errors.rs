use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Nameserver '{0}' does not start with a 40 character hex address")]
    InvalidRegistryLabel(String),

    #[error("Nameserver not recognized: {0}")]
    UnrecognizedNameserver(String),

    #[error("Timeout querying {server}")]
    TransportTimeout { server: String },

    #[error("All DNS servers timed out")]
    AllServersTimedOut,

    #[error("Upstream failure from {server}: {reason}")]
    UpstreamFailure { server: String, reason: String },

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Invalid zone: {0}")]
    InvalidZone(String),

    #[error("No resolver set for {0}")]
    ResolverNotSet(String),

    #[error("RPC error: {0}")]
    Rpc(String),

    #[error("Record codec error: {0}")]
    RecordCodec(String),
}

impl DomainError {
    /// Timeouts are the only condition the discovery walk skips past.
    pub fn is_timeout(&self) -> bool {
        matches!(self, DomainError::TransportTimeout { .. })
    }
}
