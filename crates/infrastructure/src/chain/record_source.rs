use super::abi;
use super::rpc::JsonRpcClient;
use async_trait::async_trait;
use ensdns_application::ports::{RecordSink, RecordSource};
use ensdns_domain::{Address, DomainError, Node};
use serde_json::{json, Value};
use tracing::{debug, info};

/// Gas limit for `setDnsrr` transactions.
pub const SET_RECORDS_GAS: u64 = 2_000_000;

/// Reads and writes registry record data through a node's JSON-RPC API.
///
/// Writes are sent with `eth_sendTransaction` from `sender`, which must be
/// an account the node holds and has unlocked.
pub struct EthRpcRecordSource {
    rpc: JsonRpcClient,
    sender: Option<Address>,
}

impl EthRpcRecordSource {
    pub fn new(rpc: JsonRpcClient) -> Self {
        Self { rpc, sender: None }
    }

    pub fn with_sender(mut self, sender: Address) -> Self {
        self.sender = Some(sender);
        self
    }

    /// Resolves `account` to an address: either the address itself or an
    /// index into the node's `eth_accounts` list.
    pub async fn resolve_account(&self, account: &str) -> Result<Address, DomainError> {
        if let Ok(address) = account.parse::<Address>() {
            return Ok(address);
        }

        let index: usize = account.parse().map_err(|_| {
            DomainError::Rpc(format!("'{}' is neither an address nor an account index", account))
        })?;

        let accounts: Vec<String> = self.rpc.call("eth_accounts", json!([])).await?;
        let address = accounts.get(index).ok_or_else(|| {
            DomainError::Rpc(format!(
                "account index {} out of range, node has {} accounts",
                index,
                accounts.len()
            ))
        })?;

        address.parse()
    }

    pub async fn unlock(&self, account: &Address, password: &str) -> Result<(), DomainError> {
        let unlocked: bool = self
            .rpc
            .call(
                "personal_unlockAccount",
                json!([account.to_string(), password, Value::Null]),
            )
            .await?;

        if !unlocked {
            return Err(DomainError::Rpc(format!("could not unlock account {}", account)));
        }

        info!(account = %account, "Account unlocked");
        Ok(())
    }

    async fn eth_call(&self, to: &Address, data: Vec<u8>) -> Result<Vec<u8>, DomainError> {
        let output: String = self
            .rpc
            .call(
                "eth_call",
                json!([{ "to": to.to_string(), "data": to_hex(&data) }, "latest"]),
            )
            .await?;

        from_hex(&output)
    }
}

#[async_trait]
impl RecordSource for EthRpcRecordSource {
    async fn resolver_address(
        &self,
        registry: &Address,
        node: &Node,
    ) -> Result<Address, DomainError> {
        let output = self
            .eth_call(registry, abi::encode_resolver_call(node))
            .await?;
        abi::decode_address(&output)
    }

    async fn records(&self, resolver: &Address, node: &Node) -> Result<Vec<u8>, DomainError> {
        let output = self.eth_call(resolver, abi::encode_dnsrr_call(node)).await?;
        let records = abi::decode_bytes(&output)?;

        debug!(resolver = %resolver, node = %node, bytes = records.len(), "Fetched record blob");
        Ok(records)
    }
}

#[async_trait]
impl RecordSink for EthRpcRecordSource {
    async fn set_records(
        &self,
        resolver: &Address,
        node: &Node,
        packed_records: &[u8],
    ) -> Result<String, DomainError> {
        let sender = self
            .sender
            .ok_or_else(|| DomainError::Rpc("no sending account configured".to_string()))?;

        let data = abi::encode_set_dnsrr_call(node, packed_records);
        self.rpc
            .call(
                "eth_sendTransaction",
                json!([{
                    "from": sender.to_string(),
                    "to": resolver.to_string(),
                    "data": to_hex(&data),
                    "gas": format!("{:#x}", SET_RECORDS_GAS),
                }]),
            )
            .await
    }
}

fn to_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

fn from_hex(value: &str) -> Result<Vec<u8>, DomainError> {
    let digits = value.strip_prefix("0x").unwrap_or(value);
    hex::decode(digits).map_err(|e| DomainError::Rpc(format!("invalid hex '{}': {}", value, e)))
}
