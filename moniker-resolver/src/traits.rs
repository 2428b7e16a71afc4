use async_trait::async_trait;

use moniker_types::primitives::Address;

use crate::error::ResolverError;

/// Looks up the ENS name registered for an address.
#[async_trait]
pub trait DomainResolver: Send + Sync {
    /// `Ok(None)` when the address has no name.
    async fn resolve_ens(&self, address: &Address) -> Result<Option<String>, ResolverError>;
}
