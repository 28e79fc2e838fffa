//! Platform-specific implementations
//!
//! This module contains the storage port the wallet core persists through
//! and the host file-system adapter. The core never touches the file system
//! directly; a host application wires a concrete store at startup.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

use crate::shared::constants::STORAGE_DIR_NAME;
use crate::shared::error::WalletError;

/// Durable key-value storage port
pub trait KeyValueStore {
    /// Store data under a key
    fn store(&self, key: &str, data: &[u8]) -> Result<(), WalletError>;

    /// Retrieve data for a key
    fn retrieve(&self, key: &str) -> Result<Vec<u8>, WalletError>;

    /// Delete data for a key
    fn delete(&self, key: &str) -> Result<(), WalletError>;

    /// Check if data exists for a key
    fn exists(&self, key: &str) -> Result<bool, WalletError>;
}

/// File-backed store writing one JSON document per logical key under the OS
/// data directory
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    pub fn new() -> Result<Self, WalletError> {
        let base_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("./seedvault_storage"))
            .join(STORAGE_DIR_NAME);
        Self::with_base_dir(base_dir)
    }

    /// Create a store rooted at an explicit directory
    pub fn with_base_dir(base_dir: PathBuf) -> Result<Self, WalletError> {
        fs::create_dir_all(&base_dir)
            .map_err(|e| WalletError::storage(format!("Failed to create storage dir: {}", e)))?;
        Ok(Self { base_dir })
    }

    fn file_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn store(&self, key: &str, data: &[u8]) -> Result<(), WalletError> {
        let mut file = File::create(self.file_path(key))?;
        file.set_permissions(fs::Permissions::from_mode(0o600))?;
        file.write_all(data)?;
        Ok(())
    }

    fn retrieve(&self, key: &str) -> Result<Vec<u8>, WalletError> {
        let mut file = File::open(self.file_path(key))
            .map_err(|e| WalletError::storage(format!("Failed to open key {}: {}", key, e)))?;
        let mut data = vec![];
        file.read_to_end(&mut data)?;
        Ok(data)
    }

    fn delete(&self, key: &str) -> Result<(), WalletError> {
        let _ = fs::remove_file(self.file_path(key));
        Ok(())
    }

    fn exists(&self, key: &str) -> Result<bool, WalletError> {
        Ok(self.file_path(key).exists())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, FileStore) {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = FileStore::with_base_dir(dir.path().to_path_buf())
            .expect("Failed to create file store");
        (dir, store)
    }

    #[test]
    fn test_store_and_retrieve() {
        let (_dir, store) = temp_store();
        store
            .store("wallets", b"[{\"mnemonic\":\"test\"}]")
            .expect("Failed to store data");

        let data = store.retrieve("wallets").expect("Failed to retrieve data");
        assert_eq!(data, b"[{\"mnemonic\":\"test\"}]");
    }

    #[test]
    fn test_exists_and_delete() {
        let (_dir, store) = temp_store();
        assert!(!store.exists("paths").expect("Failed to check existence"));

        store.store("paths", b"[]").expect("Failed to store data");
        assert!(store.exists("paths").expect("Failed to check existence"));

        store.delete("paths").expect("Failed to delete data");
        assert!(!store.exists("paths").expect("Failed to check existence"));
    }

    #[test]
    fn test_retrieve_missing_key_fails() {
        let (_dir, store) = temp_store();
        assert!(store.retrieve("mnemonics").is_err());
    }

    #[test]
    fn test_delete_missing_key_is_harmless() {
        let (_dir, store) = temp_store();
        assert!(store.delete("wallets").is_ok());
    }

    #[test]
    fn test_store_overwrites() {
        let (_dir, store) = temp_store();
        store.store("wallets", b"first").expect("Failed to store data");
        store.store("wallets", b"second").expect("Failed to store data");
        assert_eq!(
            store.retrieve("wallets").expect("Failed to retrieve data"),
            b"second"
        );
    }
}
