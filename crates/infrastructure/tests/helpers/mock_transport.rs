use async_trait::async_trait;
use ensdns_domain::DomainError;
use ensdns_infrastructure::dns::transport::{NsTransport, TransportResponse};
use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::rdata::NS;
use hickory_proto::rr::{Name, RData, Record};
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Mutex;
use std::time::Duration;

#[derive(Clone)]
enum Script {
    Timeout,
    Failure,
    Rcode(ResponseCode),
    Referral(Vec<Record>),
}

/// Scripted upstream: each server name maps to one canned behaviour.
/// Servers without a script time out.
#[derive(Default)]
pub struct MockNsTransport {
    scripts: HashMap<String, Script>,
    calls: Mutex<Vec<String>>,
}

impl MockNsTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn timeout(mut self, server: &str) -> Self {
        self.scripts.insert(server.to_string(), Script::Timeout);
        self
    }

    pub fn failure(mut self, server: &str) -> Self {
        self.scripts.insert(server.to_string(), Script::Failure);
        self
    }

    pub fn rcode(mut self, server: &str, rcode: ResponseCode) -> Self {
        self.scripts.insert(server.to_string(), Script::Rcode(rcode));
        self
    }

    /// `server` answers with NS records `owner -> target` in the given order.
    pub fn referral(mut self, server: &str, owner: &str, targets: &[&str], ttl: u32) -> Self {
        let owner = Name::from_str(owner).unwrap();
        let records = targets
            .iter()
            .map(|target| {
                Record::from_rdata(
                    owner.clone(),
                    ttl,
                    RData::NS(NS(Name::from_str(target).unwrap())),
                )
            })
            .collect();
        self.scripts
            .insert(server.to_string(), Script::Referral(records));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn respond(request: &[u8], rcode: ResponseCode, authority: Vec<Record>) -> Vec<u8> {
        let request = Message::from_vec(request).unwrap();
        let mut response = Message::new();
        response
            .set_id(request.id())
            .set_message_type(MessageType::Response)
            .set_op_code(OpCode::Query)
            .set_response_code(rcode);
        response.add_queries(request.queries().to_vec());
        response.add_name_servers(authority);
        response.to_vec().unwrap()
    }
}

#[async_trait]
impl NsTransport for MockNsTransport {
    async fn exchange(
        &self,
        server: &str,
        message_bytes: &[u8],
        _timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        self.calls.lock().unwrap().push(server.to_string());

        let bytes = match self.scripts.get(server).cloned().unwrap_or(Script::Timeout) {
            Script::Timeout => {
                return Err(DomainError::TransportTimeout {
                    server: server.to_string(),
                })
            }
            Script::Failure => {
                return Err(DomainError::UpstreamFailure {
                    server: server.to_string(),
                    reason: "connection refused".to_string(),
                })
            }
            Script::Rcode(rcode) => Self::respond(message_bytes, rcode, Vec::new()),
            Script::Referral(records) => {
                Self::respond(message_bytes, ResponseCode::NoError, records)
            }
        };

        Ok(TransportResponse { bytes })
    }
}
