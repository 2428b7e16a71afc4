//! Storage for wallet display names.
//!
//! Provides a [`WalletNameStore`](traits::WalletNameStore) trait with an
//! in-memory backend, a SQLite backend, and the default JSON file backend.

pub mod error;
pub mod file;
pub mod memory;
pub mod sqlite;
pub mod traits;
