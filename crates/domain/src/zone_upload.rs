/// A zone file reduced to what the registry write path needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneUpload {
    /// Owner name of the SOA record (the zone apex).
    pub apex: String,
    /// MNAME of the SOA record; must encode the registry address.
    pub soa_nameserver: String,
    /// All records of the zone, packed in DNS wire format with compression.
    pub packed_records: Vec<u8>,
    pub record_count: usize,
}
