use std::collections::BTreeMap;
use std::sync::RwLock;

use moniker_types::primitives::Address;

use crate::error::StorageError;
use crate::traits::{NamedAddress, WalletNameStore};

/// In-memory wallet name store. Nothing survives the process.
pub struct MemoryNameStore {
    names: RwLock<BTreeMap<Address, String>>,
}

impl MemoryNameStore {
    pub fn new() -> Self {
        Self {
            names: RwLock::new(BTreeMap::new()),
        }
    }
}

impl Default for MemoryNameStore {
    fn default() -> Self {
        Self::new()
    }
}

impl WalletNameStore for MemoryNameStore {
    fn name(&self, address: &Address) -> Result<Option<String>, StorageError> {
        let names = self.names.read().map_err(|e| StorageError::ReadError {
            reason: e.to_string(),
        })?;
        Ok(names.get(address).cloned())
    }

    fn add_or_update(&self, address: &Address, name: &str) -> Result<(), StorageError> {
        let mut names = self.names.write().map_err(|e| StorageError::WriteError {
            reason: e.to_string(),
        })?;
        names.insert(*address, name.to_string());
        Ok(())
    }

    fn remove(&self, address: &Address) -> Result<(), StorageError> {
        let mut names = self.names.write().map_err(|e| StorageError::WriteError {
            reason: e.to_string(),
        })?;
        names.remove(address);
        Ok(())
    }

    fn names(&self) -> Result<Vec<NamedAddress>, StorageError> {
        let names = self.names.read().map_err(|e| StorageError::ReadError {
            reason: e.to_string(),
        })?;
        Ok(names.iter().map(|(a, n)| (*a, n.clone())).collect())
    }
}
