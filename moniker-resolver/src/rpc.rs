use std::time::Duration;

use async_trait::async_trait;
use jsonrpsee::core::client::ClientT;
use jsonrpsee::core::ClientError;
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use jsonrpsee::rpc_params;

use moniker_types::primitives::{format_address, Address};

use crate::error::ResolverError;
use crate::traits::DomainResolver;

/// Default request timeout in seconds.
pub const DEFAULT_RESOLVER_TIMEOUT_SECS: u64 = 10;

/// Reverse resolver backed by a JSON-RPC endpoint.
///
/// The endpoint is called with the lowercase `0x` address as its only
/// parameter and answers with a name string or `null`.
pub struct RpcResolver {
    client: HttpClient,
    method: String,
}

impl RpcResolver {
    pub fn new(url: &str, method: &str, timeout: Duration) -> Result<Self, ResolverError> {
        let client = HttpClientBuilder::default()
            .request_timeout(timeout)
            .build(url)
            .map_err(|e| ResolverError::Rpc(format!("failed to connect: {}", e)))?;
        Ok(Self {
            client,
            method: method.to_string(),
        })
    }

    /// Turn a client error into a resolver error with a friendlier message
    /// when the endpoint is unreachable.
    fn map_rpc_error(e: &ClientError) -> ResolverError {
        if matches!(e, ClientError::RequestTimeout) {
            return ResolverError::Timeout;
        }
        let msg = e.to_string();
        if msg.contains("connection")
            || msg.contains("Connection")
            || msg.contains("refused")
            || msg.contains("SendRequest")
            || msg.contains("send request")
        {
            ResolverError::Rpc(format!("could not reach name service: {}", msg))
        } else {
            ResolverError::Rpc(msg)
        }
    }
}

#[async_trait]
impl DomainResolver for RpcResolver {
    async fn resolve_ens(&self, address: &Address) -> Result<Option<String>, ResolverError> {
        let address_hex = format_address(address);
        tracing::debug!(address = %address_hex, method = %self.method, "resolving ens name");

        let result: Option<String> = self
            .client
            .request(&self.method, rpc_params![address_hex])
            .await
            .map_err(|e| Self::map_rpc_error(&e))?;

        Ok(result
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty()))
    }
}
