use super::codec::unpack_records;
use super::tree::ZoneTree;
use ensdns_application::ports::RecordSource;
use ensdns_domain::{namehash, Address, DomainError};
use hickory_proto::rr::Name;
use std::sync::Arc;
use tracing::debug;

/// Fetches a delegated domain's records from the registry and builds its tree.
pub struct ZoneLoader {
    source: Arc<dyn RecordSource>,
}

impl ZoneLoader {
    pub fn new(source: Arc<dyn RecordSource>) -> Self {
        Self { source }
    }

    pub async fn load(&self, registry: &Address, root: &Name) -> Result<ZoneTree, DomainError> {
        let root_name = root.to_ascii().to_ascii_lowercase();
        let node = namehash(&root_name);

        let resolver = self.source.resolver_address(registry, &node).await?;
        if resolver.is_zero() {
            return Err(DomainError::ResolverNotSet(root_name));
        }

        let bytes = self.source.records(&resolver, &node).await?;
        let records = unpack_records(&bytes)?;

        debug!(
            root = %root_name,
            registry = %registry,
            resolver = %resolver,
            records = records.len(),
            bytes = bytes.len(),
            "Fetched zone records"
        );

        ZoneTree::build(records)
    }
}
