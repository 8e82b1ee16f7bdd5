use crate::DomainError;
use std::fmt;
use std::str::FromStr;

/// Length of the hex label that encodes a registry address in an NS target.
pub const ADDRESS_HEX_LEN: usize = 40;

/// A 20-byte account or contract address on the registry chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Address([u8; 20]);

impl Address {
    pub const ZERO: Address = Address([0u8; 20]);

    pub fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Decodes the registry address carried in the first label of a
    /// nameserver host name such as `<40 hex chars>.ens.domains.`.
    pub fn from_nameserver(nameserver: &str) -> Result<Self, DomainError> {
        let label = nameserver.split('.').next().unwrap_or_default();
        if label.len() != ADDRESS_HEX_LEN {
            return Err(DomainError::InvalidRegistryLabel(nameserver.to_string()));
        }
        Self::decode_hex(label)
            .ok_or_else(|| DomainError::InvalidRegistryLabel(nameserver.to_string()))
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }

    fn decode_hex(digits: &str) -> Option<Self> {
        let mut bytes = [0u8; 20];
        hex::decode_to_slice(digits, &mut bytes).ok()?;
        Some(Self(bytes))
    }
}

impl FromStr for Address {
    type Err = DomainError;

    /// Parses `0x`-prefixed or bare 40-digit hex, as used on the command line
    /// and in RPC payloads.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        if digits.len() != ADDRESS_HEX_LEN {
            return Err(DomainError::InvalidRegistryLabel(s.to_string()));
        }
        Self::decode_hex(digits).ok_or_else(|| DomainError::InvalidRegistryLabel(s.to_string()))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}
