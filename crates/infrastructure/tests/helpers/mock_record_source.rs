use async_trait::async_trait;
use ensdns_application::ports::RecordSource;
use ensdns_domain::{namehash, Address, DomainError, Node};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-memory registry: resolver assignments and record blobs keyed by node.
#[derive(Default)]
pub struct MockRecordSource {
    resolvers: HashMap<(Address, Node), Address>,
    blobs: HashMap<(Address, Node), Vec<u8>>,
    record_fetches: AtomicUsize,
}

impl MockRecordSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes `blob` for `root` through `resolver`, registered in `registry`.
    pub fn with_zone(mut self, registry: Address, resolver: Address, root: &str, blob: Vec<u8>) -> Self {
        let node = namehash(root);
        self.resolvers.insert((registry, node), resolver);
        self.blobs.insert((resolver, node), blob);
        self
    }

    pub fn record_fetches(&self) -> usize {
        self.record_fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecordSource for MockRecordSource {
    async fn resolver_address(
        &self,
        registry: &Address,
        node: &Node,
    ) -> Result<Address, DomainError> {
        Ok(self
            .resolvers
            .get(&(*registry, *node))
            .copied()
            .unwrap_or(Address::ZERO))
    }

    async fn records(&self, resolver: &Address, node: &Node) -> Result<Vec<u8>, DomainError> {
        self.record_fetches.fetch_add(1, Ordering::SeqCst);
        self.blobs
            .get(&(*resolver, *node))
            .cloned()
            .ok_or_else(|| DomainError::Rpc(format!("execution reverted for {}", node)))
    }
}
