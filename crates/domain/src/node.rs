use sha3::{Digest, Keccak256};
use std::fmt;

/// Namehash of a domain: the 32-byte key the registry stores records under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Node([u8; 32]);

impl Node {
    pub const ROOT: Node = Node([0u8; 32]);

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// Computes the namehash of a dotted name.
///
/// The empty name hashes to [`Node::ROOT`]; otherwise the result is
/// `keccak256(namehash(rest) || keccak256(label))` where `label` is the
/// leftmost label. A trailing dot contributes an empty suffix, so
/// `"foo.eth."` and `"foo.eth"` share a node.
pub fn namehash(name: &str) -> Node {
    if name.is_empty() {
        return Node::ROOT;
    }

    let (label, rest) = name.split_once('.').unwrap_or((name, ""));
    let label_hash = Keccak256::digest(label.as_bytes());
    let parent = namehash(rest);

    let mut hasher = Keccak256::new();
    hasher.update(parent.0);
    hasher.update(label_hash);
    Node(hasher.finalize().into())
}
