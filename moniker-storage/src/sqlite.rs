use std::sync::Mutex;

use rusqlite::{params, Connection, OptionalExtension};

use moniker_types::primitives::Address;

use crate::error::StorageError;
use crate::traits::{NamedAddress, WalletNameStore};

/// SQLite-backed wallet name store.
/// Uses a single `wallet_names` table with a BLOB address key and TEXT name.
pub struct SqliteNameStore {
    conn: Mutex<Connection>,
}

impl SqliteNameStore {
    /// Open (or create) a store at the given path.
    /// Use `:memory:` for an in-memory database (useful for tests).
    pub fn new(path: &str) -> Result<Self, StorageError> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS wallet_names (address BLOB PRIMARY KEY, name TEXT NOT NULL)",
            [],
        )?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

fn address_from_blob(blob: Vec<u8>) -> Result<Address, StorageError> {
    let len = blob.len();
    blob.try_into()
        .map_err(|_| StorageError::DeserializationError {
            reason: format!("stored address has {} bytes, expected 20", len),
        })
}

impl WalletNameStore for SqliteNameStore {
    fn name(&self, address: &Address) -> Result<Option<String>, StorageError> {
        let conn = self.conn.lock().map_err(|e| StorageError::ReadError {
            reason: e.to_string(),
        })?;
        let mut stmt = conn.prepare_cached("SELECT name FROM wallet_names WHERE address = ?1")?;
        let name = stmt
            .query_row(params![address.as_slice()], |row| row.get::<_, String>(0))
            .optional()?;
        Ok(name)
    }

    fn add_or_update(&self, address: &Address, name: &str) -> Result<(), StorageError> {
        let conn = self.conn.lock().map_err(|e| StorageError::WriteError {
            reason: e.to_string(),
        })?;
        conn.execute(
            "INSERT OR REPLACE INTO wallet_names (address, name) VALUES (?1, ?2)",
            params![address.as_slice(), name],
        )?;
        Ok(())
    }

    fn remove(&self, address: &Address) -> Result<(), StorageError> {
        let conn = self.conn.lock().map_err(|e| StorageError::WriteError {
            reason: e.to_string(),
        })?;
        conn.execute(
            "DELETE FROM wallet_names WHERE address = ?1",
            params![address.as_slice()],
        )?;
        Ok(())
    }

    fn names(&self) -> Result<Vec<NamedAddress>, StorageError> {
        let conn = self.conn.lock().map_err(|e| StorageError::ReadError {
            reason: e.to_string(),
        })?;
        let mut stmt =
            conn.prepare_cached("SELECT address, name FROM wallet_names ORDER BY address")?;
        let mut rows = stmt.query([])?;

        let mut results = Vec::new();
        while let Some(row) = rows.next()? {
            let blob: Vec<u8> = row.get(0)?;
            let name: String = row.get(1)?;
            results.push((address_from_blob(blob)?, name));
        }
        Ok(results)
    }
}
