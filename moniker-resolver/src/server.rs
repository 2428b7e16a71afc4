use std::collections::{BTreeMap, HashMap};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use jsonrpsee::core::async_trait;
use jsonrpsee::proc_macros::rpc;
use jsonrpsee::server::{ServerBuilder, ServerHandle};
use jsonrpsee::types::ErrorObjectOwned;

use moniker_types::primitives::{parse_address, Address};

use crate::error::ResolverError;

/// JSON-RPC interface of the reverse name service.
#[rpc(server)]
pub trait ReverseNameRpc {
    /// Look up the name registered for a hex address.
    #[method(name = "ens_reverseName")]
    async fn reverse_name(&self, address: String) -> Result<Option<String>, ErrorObjectOwned>;
}

/// Serves reverse lookups from an in-memory table.
pub struct NameServerImpl {
    names: Arc<HashMap<Address, String>>,
}

#[async_trait]
impl ReverseNameRpcServer for NameServerImpl {
    async fn reverse_name(&self, address: String) -> Result<Option<String>, ErrorObjectOwned> {
        let address = parse_address(&address)
            .map_err(|e| ErrorObjectOwned::owned(-32602, e.to_string(), None::<()>))?;
        Ok(self.names.get(&address).cloned())
    }
}

/// Start the reverse name server on `addr` (use port 0 for an ephemeral
/// port). Returns the handle and the bound address.
pub async fn start_name_server(
    addr: &str,
    names: HashMap<Address, String>,
) -> Result<(ServerHandle, SocketAddr), ResolverError> {
    let server = ServerBuilder::default()
        .build(addr)
        .await
        .map_err(|e| ResolverError::Server(format!("failed to build name server: {}", e)))?;
    let local_addr = server
        .local_addr()
        .map_err(|e| ResolverError::Server(format!("failed to read bound address: {}", e)))?;

    let count = names.len();
    let rpc_impl = NameServerImpl {
        names: Arc::new(names),
    };
    let handle = server.start(rpc_impl.into_rpc());

    tracing::info!(addr = %local_addr, names = count, "name server started");

    Ok((handle, local_addr))
}

/// Load a name table from a JSON object of `"0x<address>": "<name>"`.
pub fn load_name_table(path: &Path) -> Result<HashMap<Address, String>, ResolverError> {
    let data = std::fs::read_to_string(path)?;
    let raw: BTreeMap<String, String> = serde_json::from_str(&data).map_err(|e| {
        ResolverError::InvalidResponse(format!("{}: {}", path.display(), e))
    })?;

    let mut names = HashMap::with_capacity(raw.len());
    for (key, name) in raw {
        let address = parse_address(&key).map_err(|e| {
            ResolverError::InvalidResponse(format!("{}: key '{}': {}", path.display(), key, e))
        })?;
        names.insert(address, name);
    }
    Ok(names)
}
