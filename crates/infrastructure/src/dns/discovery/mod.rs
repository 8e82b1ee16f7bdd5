pub mod query;
pub mod walker;

pub use query::{NsQuery, Referral};
pub use walker::{Delegation, RegistryDiscovery};
