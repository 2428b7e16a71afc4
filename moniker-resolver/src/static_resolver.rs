use std::collections::HashMap;

use async_trait::async_trait;

use moniker_types::primitives::Address;

use crate::error::ResolverError;
use crate::traits::DomainResolver;

/// Resolver answering from a fixed table. The empty table stands in for
/// resolution when it is disabled.
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    names: HashMap<Address, String>,
}

impl StaticResolver {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, address: Address, name: impl Into<String>) -> Self {
        self.names.insert(address, name.into());
        self
    }
}

#[async_trait]
impl DomainResolver for StaticResolver {
    async fn resolve_ens(&self, address: &Address) -> Result<Option<String>, ResolverError> {
        Ok(self.names.get(address).cloned())
    }
}
