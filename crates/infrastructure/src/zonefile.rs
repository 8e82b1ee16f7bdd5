//! Master-file reader for the upload path.

use crate::dns::zone::pack_records;
use ensdns_domain::{DomainError, ZoneUpload};
use hickory_proto::rr::{RData, Record};
use hickory_proto::serialize::txt::Parser;
use std::path::Path;
use tracing::debug;

/// A parsed zone file holding exactly one SOA record.
#[derive(Debug, Clone)]
pub struct ZoneFile {
    records: Vec<Record>,
    soa: Record,
}

impl ZoneFile {
    pub fn read(path: &Path) -> Result<Self, DomainError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| DomainError::IoError(format!("{}: {}", path.display(), e)))?;
        Self::parse(&text, Some(path))
    }

    /// Parses master-file text. `path` resolves relative `$INCLUDE`s.
    pub fn parse(text: &str, path: Option<&Path>) -> Result<Self, DomainError> {
        let (origin, record_sets) = Parser::new(text, path.map(Path::to_path_buf), None)
            .parse()
            .map_err(|e| DomainError::InvalidZone(e.to_string()))?;

        let records: Vec<Record> = record_sets
            .values()
            .flat_map(|set| set.records_without_rrsigs())
            .cloned()
            .collect();

        let mut soas = records
            .iter()
            .filter(|record| matches!(record.data(), RData::SOA(_)));
        let soa = soas
            .next()
            .cloned()
            .ok_or_else(|| DomainError::InvalidZone("No SOA record".to_string()))?;
        if soas.next().is_some() {
            return Err(DomainError::InvalidZone("Multiple SOA records".to_string()));
        }

        debug!(origin = %origin, records = records.len(), "Zone file parsed");

        Ok(Self { records, soa })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn soa(&self) -> &Record {
        &self.soa
    }

    /// Packs the zone into the blob the registry stores.
    pub fn to_upload(&self) -> Result<ZoneUpload, DomainError> {
        let RData::SOA(soa) = self.soa.data() else {
            return Err(DomainError::InvalidZone("No SOA record".to_string()));
        };

        Ok(ZoneUpload {
            apex: self.soa.name().to_ascii(),
            soa_nameserver: soa.mname().to_ascii(),
            packed_records: pack_records(&self.records)?,
            record_count: self.records.len(),
        })
    }
}
