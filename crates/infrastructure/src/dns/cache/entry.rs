use crate::dns::zone::ZoneTree;
use ensdns_domain::Address;
use hickory_proto::rr::Name;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Where a queried name is delegated: the registry contract and the name
/// that owns the delegating NS record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistryMapping {
    pub registry: Address,
    pub root: Name,
}

#[derive(Clone, Debug)]
pub enum CachedValue {
    Registry(RegistryMapping),
    Zone(Arc<ZoneTree>),
}

#[derive(Clone, Debug)]
pub struct CacheEntry {
    pub value: CachedValue,
    pub expires_at: Instant,
}

impl CacheEntry {
    pub fn new(value: CachedValue, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: Instant::now() + ttl,
        }
    }

    #[inline]
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}
