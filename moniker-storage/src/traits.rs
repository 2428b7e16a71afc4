use std::sync::Arc;

use moniker_types::primitives::Address;

use crate::error::StorageError;

/// A stored `(address, name)` pair.
pub type NamedAddress = (Address, String);

/// Store of user-chosen wallet display names, keyed by address.
pub trait WalletNameStore: Send + Sync {
    /// The name stored for `address`, if any.
    fn name(&self, address: &Address) -> Result<Option<String>, StorageError>;

    /// Store `name` for `address`, replacing any previous name.
    fn add_or_update(&self, address: &Address, name: &str) -> Result<(), StorageError>;

    /// Remove the name stored for `address`. Removing a missing name is not an error.
    fn remove(&self, address: &Address) -> Result<(), StorageError>;

    /// All stored names, sorted by address.
    fn names(&self) -> Result<Vec<NamedAddress>, StorageError>;
}

/// Blanket implementation so a store can be shared between the view model
/// and the command that owns it.
impl<S: WalletNameStore + ?Sized> WalletNameStore for Arc<S> {
    fn name(&self, address: &Address) -> Result<Option<String>, StorageError> {
        (**self).name(address)
    }

    fn add_or_update(&self, address: &Address, name: &str) -> Result<(), StorageError> {
        (**self).add_or_update(address, name)
    }

    fn remove(&self, address: &Address) -> Result<(), StorageError> {
        (**self).remove(address)
    }

    fn names(&self) -> Result<Vec<NamedAddress>, StorageError> {
        (**self).names()
    }
}

impl WalletNameStore for Box<dyn WalletNameStore> {
    fn name(&self, address: &Address) -> Result<Option<String>, StorageError> {
        (**self).name(address)
    }

    fn add_or_update(&self, address: &Address, name: &str) -> Result<(), StorageError> {
        (**self).add_or_update(address, name)
    }

    fn remove(&self, address: &Address) -> Result<(), StorageError> {
        (**self).remove(address)
    }

    fn names(&self) -> Result<Vec<NamedAddress>, StorageError> {
        (**self).names()
    }
}
