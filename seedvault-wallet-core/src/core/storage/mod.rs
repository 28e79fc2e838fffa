//! Persisted state encoding
//!
//! This module maps the in-memory wallet state onto the three logical keys
//! of the durable store: `wallets` (ordered wallet records), `paths` (coin
//! types aligned by index), and `mnemonics` (words of the active mnemonic).

use serde_json;

use crate::domain::Wallet;
use crate::infrastructure::platform::KeyValueStore;
use crate::shared::constants::{MNEMONICS_KEY, PATHS_KEY, WALLETS_KEY};
use crate::shared::error::WalletError;
use crate::shared::types::CoinType;

/// In-memory image of the durable state
#[derive(Default)]
pub struct PersistedState {
    pub wallets: Vec<Wallet>,
    pub coin_types: Vec<CoinType>,
    pub mnemonic_words: Vec<String>,
}

/// JSON state codec over a key-value store
pub struct StateStore {
    store: Box<dyn KeyValueStore>,
}

impl StateStore {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Rehydrate the state. Keys that were never written load as empty.
    pub fn load(&self) -> Result<PersistedState, WalletError> {
        Ok(PersistedState {
            wallets: self.load_key(WALLETS_KEY)?,
            coin_types: self.load_key(PATHS_KEY)?,
            mnemonic_words: self.load_key(MNEMONICS_KEY)?,
        })
    }

    /// Write all three keys
    pub fn save(&self, state: &PersistedState) -> Result<(), WalletError> {
        self.store
            .store(WALLETS_KEY, &serde_json::to_vec(&state.wallets)?)?;
        self.store
            .store(PATHS_KEY, &serde_json::to_vec(&state.coin_types)?)?;
        self.store
            .store(MNEMONICS_KEY, &serde_json::to_vec(&state.mnemonic_words)?)?;
        Ok(())
    }

    /// Remove all three keys
    pub fn clear(&self) -> Result<(), WalletError> {
        self.store.delete(WALLETS_KEY)?;
        self.store.delete(PATHS_KEY)?;
        self.store.delete(MNEMONICS_KEY)?;
        Ok(())
    }

    fn load_key<T: serde::de::DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, WalletError> {
        if !self.store.exists(key)? {
            return Ok(Vec::new());
        }
        let data = self.store.retrieve(key)?;
        serde_json::from_slice(&data)
            .map_err(|e| WalletError::storage(format!("Corrupt state for key {}: {}", key, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    // Mock storage for tests
    struct MockStorage {
        data: Mutex<HashMap<String, Vec<u8>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                data: Mutex::new(HashMap::new()),
            }
        }
    }

    impl KeyValueStore for MockStorage {
        fn store(&self, key: &str, data: &[u8]) -> Result<(), WalletError> {
            let mut storage = self
                .data
                .lock()
                .expect("Failed to acquire lock for storage write");
            storage.insert(key.to_string(), data.to_vec());
            Ok(())
        }

        fn retrieve(&self, key: &str) -> Result<Vec<u8>, WalletError> {
            let storage = self
                .data
                .lock()
                .expect("Failed to acquire lock for storage read");
            storage
                .get(key)
                .cloned()
                .ok_or_else(|| WalletError::storage("Key not found".to_string()))
        }

        fn delete(&self, key: &str) -> Result<(), WalletError> {
            let mut storage = self
                .data
                .lock()
                .expect("Failed to acquire lock for storage delete");
            storage.remove(key);
            Ok(())
        }

        fn exists(&self, key: &str) -> Result<bool, WalletError> {
            let storage = self
                .data
                .lock()
                .expect("Failed to acquire lock for storage exists check");
            Ok(storage.contains_key(key))
        }
    }

    fn sample_state() -> PersistedState {
        PersistedState {
            wallets: vec![Wallet::new(
                "legal winner thank year wave sausage worth useful legal winner thank yellow"
                    .to_string(),
                "m/44'/501'/0'/0'".to_string(),
                "secret".to_string(),
                "public".to_string(),
            )
            .expect("Failed to create test wallet")],
            coin_types: vec![CoinType::Solana],
            mnemonic_words: vec!["legal".to_string(), "winner".to_string()],
        }
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let store = StateStore::new(Box::new(MockStorage::new()));
        let state = sample_state();

        store.save(&state).expect("Failed to save state");
        let loaded = store.load().expect("Failed to load state");

        assert_eq!(loaded.wallets, state.wallets);
        assert_eq!(loaded.coin_types, state.coin_types);
        assert_eq!(loaded.mnemonic_words, state.mnemonic_words);
    }

    #[test]
    fn test_load_empty_store_yields_empty_state() {
        let store = StateStore::new(Box::new(MockStorage::new()));
        let state = store.load().expect("Failed to load state");

        assert!(state.wallets.is_empty());
        assert!(state.coin_types.is_empty());
        assert!(state.mnemonic_words.is_empty());
    }

    #[test]
    fn test_clear_removes_all_keys() {
        let mock = MockStorage::new();
        let store = StateStore::new(Box::new(mock));
        store.save(&sample_state()).expect("Failed to save state");

        store.clear().expect("Failed to clear state");
        let state = store.load().expect("Failed to load state");
        assert!(state.wallets.is_empty());
        assert!(state.coin_types.is_empty());
        assert!(state.mnemonic_words.is_empty());
    }

    #[test]
    fn test_load_rejects_corrupt_state() {
        let mock = MockStorage::new();
        mock.store(WALLETS_KEY, b"not json")
            .expect("Failed to seed corrupt data");
        let store = StateStore::new(Box::new(mock));

        assert!(matches!(store.load(), Err(WalletError::Storage(_))));
    }
}
