use crate::ports::RecordSink;
use ensdns_domain::{namehash, Address, DomainError, Node, ZoneUpload};
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReceipt {
    pub registry: Address,
    pub resolver: Address,
    pub node: Node,
    pub transaction: String,
}

/// Publishes a parsed zone to the resolver its registry names for the apex.
pub struct UploadZoneUseCase {
    sink: Arc<dyn RecordSink>,
    ns_domain: String,
}

impl UploadZoneUseCase {
    pub fn new(sink: Arc<dyn RecordSink>, ns_domain: impl Into<String>) -> Self {
        Self {
            sink,
            ns_domain: ns_domain.into(),
        }
    }

    pub async fn execute(&self, upload: &ZoneUpload) -> Result<UploadReceipt, DomainError> {
        let nameserver = upload.soa_nameserver.to_ascii_lowercase();
        if !nameserver.ends_with(&self.ns_domain) {
            return Err(DomainError::UnrecognizedNameserver(
                upload.soa_nameserver.clone(),
            ));
        }

        let registry = Address::from_nameserver(&nameserver)?;
        let node = namehash(&upload.apex.to_ascii_lowercase());

        let resolver = self.sink.resolver_address(&registry, &node).await?;
        if resolver.is_zero() {
            return Err(DomainError::ResolverNotSet(upload.apex.clone()));
        }

        info!(
            apex = %upload.apex,
            records = upload.record_count,
            registry = %registry,
            resolver = %resolver,
            "Setting records"
        );

        let transaction = self
            .sink
            .set_records(&resolver, &node, &upload.packed_records)
            .await?;

        info!(apex = %upload.apex, tx = %transaction, "Records submitted");

        Ok(UploadReceipt {
            registry,
            resolver,
            node,
            transaction,
        })
    }
}
