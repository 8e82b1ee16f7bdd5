pub mod codec;
pub mod loader;
pub mod tree;

pub use codec::{pack_records, unpack_records};
pub use loader::ZoneLoader;
pub use tree::ZoneTree;
