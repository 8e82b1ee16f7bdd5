pub mod serve;
pub mod upload;

pub use serve::serve;
pub use upload::upload;
