//! Request handling
//!
//! Each question in a message is answered in order: find the registry the
//! name is delegated to, fetch that registry's zone for the name, then
//! resolve against the zone tree. A question that cannot be answered ends
//! processing of the message; whatever was answered before it is still sent.

use crate::dns::cache::{RegistryMapping, ResolutionCache};
use crate::dns::discovery::RegistryDiscovery;
use crate::dns::zone::{ZoneLoader, ZoneTree};
use ensdns_domain::DomainError;
use hickory_proto::op::{Header, Query, ResponseCode};
use hickory_proto::rr::{Name, Record};
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use std::iter;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Answer section and header flags assembled for one message.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub answers: Vec<Record>,
    pub authoritative: bool,
    pub response_code: ResponseCode,
}

impl Default for Reply {
    fn default() -> Self {
        Self {
            answers: Vec::new(),
            authoritative: false,
            response_code: ResponseCode::NoError,
        }
    }
}

#[derive(Clone)]
pub struct DnsServerHandler {
    cache: Arc<ResolutionCache>,
    discovery: Arc<RegistryDiscovery>,
    loader: Arc<ZoneLoader>,
}

impl DnsServerHandler {
    pub fn new(
        cache: Arc<ResolutionCache>,
        discovery: Arc<RegistryDiscovery>,
        loader: Arc<ZoneLoader>,
    ) -> Self {
        Self {
            cache,
            discovery,
            loader,
        }
    }

    /// Answers `queries` in order.
    ///
    /// A failed registry lookup stops processing and leaves the response
    /// code alone. A failed zone fetch stops processing with SERVFAIL.
    pub async fn answer(&self, queries: &[Query]) -> Reply {
        let mut reply = Reply::default();

        for query in queries {
            let name = query.name();

            let mapping = match self.registry_for(name).await {
                Ok(mapping) => mapping,
                Err(e) => {
                    warn!(name = %name, error = %e, "Registry lookup failed");
                    break;
                }
            };

            let zone = match self.zone_for(&mapping, name).await {
                Ok(zone) => zone,
                Err(e) => {
                    error!(
                        name = %name,
                        registry = %mapping.registry,
                        root = %mapping.root,
                        error = %e,
                        "Zone fetch failed"
                    );
                    reply.response_code = ResponseCode::ServFail;
                    break;
                }
            };

            let answers = zone.resolve(name, query.query_type());
            debug!(
                name = %name,
                record_type = %query.query_type(),
                answers = answers.len(),
                "Question answered"
            );

            reply.answers.extend(answers);
            reply.authoritative = true;
        }

        reply
    }

    async fn registry_for(&self, name: &Name) -> Result<RegistryMapping, DomainError> {
        if let Some(mapping) = self.cache.get_registry(name) {
            return Ok(mapping);
        }

        let delegation = self.discovery.discover(name).await?;
        let mapping = delegation.mapping();
        self.cache
            .put_registry(name, mapping.clone(), delegation.ttl());

        Ok(mapping)
    }

    async fn zone_for(
        &self,
        mapping: &RegistryMapping,
        name: &Name,
    ) -> Result<Arc<ZoneTree>, DomainError> {
        if let Some(zone) = self.cache.get_zone(&mapping.registry, name) {
            return Ok(zone);
        }

        let zone = Arc::new(self.loader.load(&mapping.registry, &mapping.root).await?);
        self.cache.put_zone(
            &mapping.registry,
            name,
            Arc::clone(&zone),
            zone.refresh_interval(),
        );

        Ok(zone)
    }
}

#[async_trait::async_trait]
impl RequestHandler for DnsServerHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        let queries: Vec<Query> = request
            .queries()
            .iter()
            .map(|query| query.original().clone())
            .collect();

        let reply = self.answer(&queries).await;

        let mut header = Header::response_from_request(request.header());
        header.set_authoritative(reply.authoritative);
        header.set_response_code(reply.response_code);

        let response = MessageResponseBuilder::from_message_request(request).build(
            header,
            reply.answers.iter(),
            iter::empty(),
            iter::empty(),
            iter::empty(),
        );

        match response_handle.send_response(response).await {
            Ok(info) => info,
            Err(e) => {
                error!(src = %request.src(), error = %e, "Failed to send response");
                let mut header = Header::response_from_request(request.header());
                header.set_response_code(ResponseCode::ServFail);
                header.into()
            }
        }
    }
}
