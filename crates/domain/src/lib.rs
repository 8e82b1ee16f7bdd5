//! ensdns Domain Layer
pub mod address;
pub mod config;
pub mod errors;
pub mod node;
pub mod zone_upload;

pub use address::Address;
pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use node::{namehash, Node};
pub use zone_upload::ZoneUpload;
