use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use moniker_types::primitives::{format_address, parse_address, Address};

use crate::error::StorageError;
use crate::traits::{NamedAddress, WalletNameStore};

/// Default file name for the wallet name map.
pub const WALLET_NAMES_FILE: &str = "wallet-names.json";

type NameMap = BTreeMap<String, String>;

/// Wallet name store persisted as a JSON object of `"0x<address>": "<name>"`.
///
/// Every operation reads the file fresh, so edits made by other processes are
/// picked up. A missing file reads as an empty map.
pub struct FileNameStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl FileNameStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Store at `<dir>/wallet-names.json`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(WALLET_NAMES_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<NameMap, StorageError> {
        let data = match std::fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(NameMap::new()),
            Err(e) => return Err(e.into()),
        };
        if data.trim().is_empty() {
            return Ok(NameMap::new());
        }
        serde_json::from_str(&data).map_err(|e| StorageError::DeserializationError {
            reason: format!("{}: {}", self.path.display(), e),
        })
    }

    fn save(&self, names: &NameMap) -> Result<(), StorageError> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir)?;
            }
        }
        let data =
            serde_json::to_string_pretty(names).map_err(|e| StorageError::SerializationError {
                reason: e.to_string(),
            })?;

        // Write a sibling file first so a crash never leaves a truncated map.
        let tmp = self.path.with_extension("json.tmp");

        #[cfg(unix)]
        {
            use std::io::Write;
            use std::os::unix::fs::OpenOptionsExt;
            let mut file = std::fs::OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(&tmp)?;
            file.write_all(data.as_bytes())?;
            file.sync_all()?;
        }

        #[cfg(not(unix))]
        {
            std::fs::write(&tmp, data)?;
        }

        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn modify(&self, f: impl FnOnce(&mut NameMap)) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().map_err(|e| StorageError::WriteError {
            reason: e.to_string(),
        })?;
        let mut names = self.load()?;
        f(&mut names);
        self.save(&names)
    }
}

impl WalletNameStore for FileNameStore {
    fn name(&self, address: &Address) -> Result<Option<String>, StorageError> {
        let mut names = self.load()?;
        Ok(names.remove(&format_address(address)))
    }

    fn add_or_update(&self, address: &Address, name: &str) -> Result<(), StorageError> {
        self.modify(|names| {
            names.insert(format_address(address), name.to_string());
        })
    }

    fn remove(&self, address: &Address) -> Result<(), StorageError> {
        self.modify(|names| {
            names.remove(&format_address(address));
        })
    }

    fn names(&self) -> Result<Vec<NamedAddress>, StorageError> {
        let mut results = Vec::new();
        for (key, name) in self.load()? {
            match parse_address(&key) {
                Ok(address) => results.push((address, name)),
                Err(e) => {
                    tracing::warn!(key = %key, error = %e, "skipping malformed wallet name entry");
                }
            }
        }
        results.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(results)
    }
}
