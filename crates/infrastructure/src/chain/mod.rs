//! Registry chain access over Ethereum JSON-RPC.

pub mod abi;
pub mod record_source;
pub mod rpc;

pub use record_source::EthRpcRecordSource;
pub use rpc::JsonRpcClient;
