pub mod cache;
pub mod discovery;
pub mod server;
pub mod transport;
pub mod zone;
