//! NS query construction and referral parsing for the discovery walk.

use ensdns_domain::DomainError;
use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_proto::rr::{Name, RData, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use tracing::debug;

/// One NS record from the authority section of a referral.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Referral {
    /// Owner of the NS record, i.e. the delegated name.
    pub owner: Name,
    /// Nameserver host the owner is delegated to.
    pub target: Name,
    pub ttl: u32,
}

/// A non-recursive NS query for one name, ready to send.
#[derive(Debug, Clone)]
pub struct NsQuery {
    id: u16,
    bytes: Vec<u8>,
}

impl NsQuery {
    /// Builds an NS query with RD cleared and a random message id.
    pub fn new(name: &Name) -> Result<Self, DomainError> {
        let id = fastrand::u16(..);

        let mut message = Message::new();
        message
            .set_id(id)
            .set_message_type(MessageType::Query)
            .set_op_code(OpCode::Query)
            .set_recursion_desired(false);
        message.add_query(Query::query(name.clone(), RecordType::NS));

        let mut bytes = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut bytes);
        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidDomainName(format!("Failed to serialize NS query for {}: {}", name, e))
        })?;

        Ok(Self { id, bytes })
    }

    pub fn id(&self) -> u16 {
        self.id
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Extracts the authority-section NS records from `server`'s reply.
    ///
    /// A reply with another message id is rejected. Any response code other
    /// than NOERROR fails the walk.
    pub fn parse_referral(&self, server: &str, response: &[u8]) -> Result<Vec<Referral>, DomainError> {
        let message = Message::from_vec(response).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse reply from {}: {}", server, e))
        })?;

        if message.id() != self.id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "Reply from {} has id {}, expected {}",
                server,
                message.id(),
                self.id
            )));
        }

        if message.response_code() != ResponseCode::NoError {
            return Err(DomainError::UpstreamFailure {
                server: server.to_string(),
                reason: format!("response code {}", message.response_code()),
            });
        }

        let referrals: Vec<Referral> = message
            .name_servers()
            .iter()
            .filter_map(|record| match record.data() {
                RData::NS(ns) => Some(Referral {
                    owner: record.name().clone(),
                    target: ns.0.clone(),
                    ttl: record.ttl(),
                }),
                _ => None,
            })
            .collect();

        debug!(server = %server, referrals = referrals.len(), "NS referral parsed");

        Ok(referrals)
    }
}
