//! Record blob codec
//!
//! The registry stores a name's records as one buffer of consecutive
//! wire-format resource records, packed with name compression. Compression
//! pointers are offsets from the start of that buffer.

use ensdns_domain::DomainError;
use hickory_proto::rr::Record;
use hickory_proto::serialize::binary::{BinDecodable, BinDecoder, BinEncodable, BinEncoder};

/// Decodes every record in `bytes`, in stored order.
pub fn unpack_records(bytes: &[u8]) -> Result<Vec<Record>, DomainError> {
    let mut decoder = BinDecoder::new(bytes);
    let mut records = Vec::new();

    while !decoder.is_empty() {
        let record = Record::read(&mut decoder).map_err(|e| {
            DomainError::RecordCodec(format!(
                "record {} at offset {}: {}",
                records.len(),
                decoder.index(),
                e
            ))
        })?;
        records.push(record);
    }

    Ok(records)
}

/// Packs `records` into one compressed buffer, the inverse of [`unpack_records`].
pub fn pack_records(records: &[Record]) -> Result<Vec<u8>, DomainError> {
    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);

    for record in records {
        record.emit(&mut encoder).map_err(|e| {
            DomainError::RecordCodec(format!("failed to pack {}: {}", record.name(), e))
        })?;
    }

    Ok(buf)
}
