use async_trait::async_trait;
use ensdns_domain::{Address, DomainError, Node};

/// Read access to the registry chain.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Resolver contract the registry at `registry` names for `node`.
    /// Returns the zero address when none is set.
    async fn resolver_address(
        &self,
        registry: &Address,
        node: &Node,
    ) -> Result<Address, DomainError>;

    /// Raw wire-format record blob stored by `resolver` for `node`.
    async fn records(&self, resolver: &Address, node: &Node)
        -> Result<Vec<u8>, DomainError>;
}

/// Write access to the registry chain, used by `upload`.
#[async_trait]
pub trait RecordSink: RecordSource {
    /// Replaces the record blob for `node`; returns the transaction hash.
    async fn set_records(
        &self,
        resolver: &Address,
        node: &Node,
        packed_records: &[u8],
    ) -> Result<String, DomainError>;
}
