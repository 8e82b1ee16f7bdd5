#![allow(dead_code)]

pub mod mock_record_source;
pub mod mock_transport;
pub mod zones;

pub use mock_record_source::MockRecordSource;
pub use mock_transport::MockNsTransport;
pub use zones::*;
