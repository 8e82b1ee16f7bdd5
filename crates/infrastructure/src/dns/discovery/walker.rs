//! Registry discovery
//!
//! Walks the public DNS delegation chain for a queried name, starting at
//! the root servers, until some server hands back an NS record inside the
//! delegation suffix. That record's first label is the registry address.

use super::query::{NsQuery, Referral};
use crate::dns::cache::RegistryMapping;
use crate::dns::transport::NsTransport;
use ensdns_domain::{Address, DomainError};
use hickory_proto::rr::Name;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Outcome of a successful discovery walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delegation {
    pub registry: Address,
    /// Owner of the delegating NS record.
    pub root: Name,
    /// The nameserver host that carried the registry address.
    pub nameserver: Name,
    /// TTL of the delegating NS record, in seconds.
    pub ttl: u32,
}

impl Delegation {
    pub fn mapping(&self) -> RegistryMapping {
        RegistryMapping {
            registry: self.registry,
            root: self.root.clone(),
        }
    }

    pub fn ttl(&self) -> Duration {
        Duration::from_secs(u64::from(self.ttl))
    }
}

pub struct RegistryDiscovery {
    transport: Arc<dyn NsTransport>,
    root_servers: Arc<[String]>,
    ns_domain: String,
    timeout: Duration,
}

impl RegistryDiscovery {
    /// `ns_domain` is matched case-insensitively against NS targets and
    /// should end with a dot, like the names it is compared with.
    pub fn new(
        transport: Arc<dyn NsTransport>,
        root_servers: Arc<[String]>,
        ns_domain: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            transport,
            root_servers,
            ns_domain: ns_domain.into().to_ascii_lowercase(),
            timeout,
        }
    }

    pub async fn discover(&self, name: &Name) -> Result<Delegation, DomainError> {
        let query = NsQuery::new(name)?;
        let mut candidates: Vec<String> = self.root_servers.to_vec();
        let mut depth = 0usize;

        loop {
            let mut next: Option<Vec<String>> = None;

            for server in &candidates {
                let response = match self
                    .transport
                    .exchange(server, query.bytes(), self.timeout)
                    .await
                {
                    Ok(response) => response,
                    Err(e) if e.is_timeout() => {
                        debug!(server = %server, name = %name, "NS query timed out, trying next server");
                        continue;
                    }
                    Err(e) => return Err(e),
                };

                let referrals = query.parse_referral(server, &response.bytes)?;
                if referrals.is_empty() {
                    continue;
                }

                if let Some(found) = referrals.iter().find(|r| self.in_suffix(&r.target)) {
                    return self.delegation(name, found, depth);
                }

                next = Some(referrals.iter().map(|r| r.target.to_ascii()).collect());
                break;
            }

            match next {
                Some(servers) => {
                    depth += 1;
                    debug!(name = %name, depth = depth, servers = ?servers, "Following referral");
                    candidates = servers;
                }
                None => return Err(DomainError::AllServersTimedOut),
            }
        }
    }

    fn in_suffix(&self, target: &Name) -> bool {
        target.to_ascii().to_ascii_lowercase().ends_with(&self.ns_domain)
    }

    fn delegation(
        &self,
        name: &Name,
        found: &Referral,
        depth: usize,
    ) -> Result<Delegation, DomainError> {
        let registry = Address::from_nameserver(&found.target.to_ascii())?;

        info!(
            name = %name,
            root = %found.owner,
            registry = %registry,
            nameserver = %found.target,
            ttl = found.ttl,
            depth = depth,
            "Discovered registry delegation"
        );

        Ok(Delegation {
            registry,
            root: found.owner.clone(),
            nameserver: found.target.clone(),
            ttl: found.ttl,
        })
    }
}
