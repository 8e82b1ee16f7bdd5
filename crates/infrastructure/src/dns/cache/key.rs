use compact_str::CompactString;
use ensdns_domain::Address;
use hickory_proto::rr::Name;

/// Key into the shared resolution cache.
///
/// Both kinds of entry live in one bounded store. Names are kept
/// lower-cased so lookups ignore query case.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// Queried name to its registry delegation.
    Registry(CompactString),
    /// Zone data fetched from `registry` for a queried name.
    Zone {
        registry: Address,
        name: CompactString,
    },
}

impl CacheKey {
    pub fn registry(name: &Name) -> Self {
        Self::Registry(normalize(name))
    }

    pub fn zone(registry: &Address, name: &Name) -> Self {
        Self::Zone {
            registry: *registry,
            name: normalize(name),
        }
    }
}

fn normalize(name: &Name) -> CompactString {
    let mut key = CompactString::from(name.to_ascii());
    key.make_ascii_lowercase();
    key
}
