//! Reverse resolution of wallet addresses to ENS names.
//!
//! The [`DomainResolver`](traits::DomainResolver) trait is the seam the rename
//! screen depends on. [`RpcResolver`](rpc::RpcResolver) queries a JSON-RPC
//! endpoint, [`StaticResolver`](static_resolver::StaticResolver) answers from a
//! fixed table, and [`server`] serves such a table over JSON-RPC for local use.

pub mod error;
pub mod rpc;
pub mod server;
pub mod static_resolver;
pub mod traits;

/// JSON-RPC method used for reverse lookups unless configured otherwise.
pub const DEFAULT_REVERSE_NAME_METHOD: &str = "ens_reverseName";
