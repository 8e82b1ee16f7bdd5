//! Contract ABI encoding for the three registry calls the bridge makes.

use ensdns_domain::{Address, DomainError, Node};
use sha3::{Digest, Keccak256};

const WORD: usize = 32;

pub const RESOLVER_SIGNATURE: &str = "resolver(bytes32)";
pub const DNSRR_SIGNATURE: &str = "dnsrr(bytes32)";
pub const SET_DNSRR_SIGNATURE: &str = "setDnsrr(bytes32,bytes)";

/// First four bytes of the Keccak-256 hash of a function signature.
pub fn selector(signature: &str) -> [u8; 4] {
    let hash = Keccak256::digest(signature.as_bytes());
    [hash[0], hash[1], hash[2], hash[3]]
}

/// `resolver(bytes32 node)` on the registry.
pub fn encode_resolver_call(node: &Node) -> Vec<u8> {
    encode_node_call(RESOLVER_SIGNATURE, node)
}

/// `dnsrr(bytes32 node)` on a resolver.
pub fn encode_dnsrr_call(node: &Node) -> Vec<u8> {
    encode_node_call(DNSRR_SIGNATURE, node)
}

/// `setDnsrr(bytes32 node, bytes data)` on a resolver.
pub fn encode_set_dnsrr_call(node: &Node, data: &[u8]) -> Vec<u8> {
    let padded_len = data.len().div_ceil(WORD) * WORD;
    let mut call = Vec::with_capacity(4 + 3 * WORD + padded_len);

    call.extend_from_slice(&selector(SET_DNSRR_SIGNATURE));
    call.extend_from_slice(node.as_bytes());
    call.extend_from_slice(&usize_word(2 * WORD));
    call.extend_from_slice(&usize_word(data.len()));
    call.extend_from_slice(data);
    call.resize(4 + 3 * WORD + padded_len, 0);

    call
}

/// Decodes a single `address` return value.
pub fn decode_address(output: &[u8]) -> Result<Address, DomainError> {
    let word = output
        .get(..WORD)
        .ok_or_else(|| DomainError::Rpc(format!("address output too short: {} bytes", output.len())))?;

    let mut bytes = [0u8; 20];
    bytes.copy_from_slice(&word[12..]);
    Ok(Address::new(bytes))
}

/// Decodes a single dynamic `bytes` return value. Empty output means no data.
pub fn decode_bytes(output: &[u8]) -> Result<Vec<u8>, DomainError> {
    if output.is_empty() {
        return Ok(Vec::new());
    }

    let offset = read_usize(output, 0)?;
    let len = read_usize(output, offset)?;
    let start = offset + WORD;

    start
        .checked_add(len)
        .and_then(|end| output.get(start..end))
        .map(<[u8]>::to_vec)
        .ok_or_else(|| {
            DomainError::Rpc(format!(
                "bytes output of {} bytes cannot hold {} bytes at offset {}",
                output.len(),
                len,
                start
            ))
        })
}

fn encode_node_call(signature: &str, node: &Node) -> Vec<u8> {
    let mut call = Vec::with_capacity(4 + WORD);
    call.extend_from_slice(&selector(signature));
    call.extend_from_slice(node.as_bytes());
    call
}

fn usize_word(value: usize) -> [u8; WORD] {
    let mut word = [0u8; WORD];
    word[WORD - 8..].copy_from_slice(&(value as u64).to_be_bytes());
    word
}

fn read_usize(output: &[u8], at: usize) -> Result<usize, DomainError> {
    let word = at
        .checked_add(WORD)
        .and_then(|end| output.get(at..end))
        .ok_or_else(|| DomainError::Rpc(format!("output truncated at offset {}", at)))?;

    if word[..WORD - 8].iter().any(|&b| b != 0) {
        return Err(DomainError::Rpc(format!("integer at offset {} out of range", at)));
    }

    let mut value = [0u8; 8];
    value.copy_from_slice(&word[WORD - 8..]);
    usize::try_from(u64::from_be_bytes(value))
        .map_err(|_| DomainError::Rpc(format!("integer at offset {} out of range", at)))
}
