#![allow(dead_code)]

use async_trait::async_trait;
use ensdns_application::ports::{RecordSink, RecordSource};
use ensdns_domain::{Address, DomainError, Node};
use std::collections::HashMap;
use std::sync::Mutex;

// ============================================================================
// Mock RecordSink
// ============================================================================

#[derive(Default)]
pub struct MockRecordSink {
    resolvers: Mutex<HashMap<(Address, Node), Address>>,
    writes: Mutex<Vec<(Address, Node, Vec<u8>)>>,
    fail_writes: bool,
}

impl MockRecordSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn set_resolver(&self, registry: Address, node: Node, resolver: Address) {
        self.resolvers
            .lock()
            .unwrap()
            .insert((registry, node), resolver);
    }

    pub fn writes(&self) -> Vec<(Address, Node, Vec<u8>)> {
        self.writes.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecordSource for MockRecordSink {
    async fn resolver_address(
        &self,
        registry: &Address,
        node: &Node,
    ) -> Result<Address, DomainError> {
        Ok(self
            .resolvers
            .lock()
            .unwrap()
            .get(&(*registry, *node))
            .copied()
            .unwrap_or(Address::ZERO))
    }

    async fn records(
        &self,
        resolver: &Address,
        node: &Node,
    ) -> Result<Vec<u8>, DomainError> {
        Ok(self
            .writes
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(r, n, _)| r == resolver && n == node)
            .map(|(_, _, bytes)| bytes.clone())
            .unwrap_or_default())
    }
}

#[async_trait]
impl RecordSink for MockRecordSink {
    async fn set_records(
        &self,
        resolver: &Address,
        node: &Node,
        packed_records: &[u8],
    ) -> Result<String, DomainError> {
        if self.fail_writes {
            return Err(DomainError::Rpc("transaction rejected".to_string()));
        }
        self.writes
            .lock()
            .unwrap()
            .push((*resolver, *node, packed_records.to_vec()));
        Ok(format!("0x{:064x}", self.writes.lock().unwrap().len()))
    }
}
