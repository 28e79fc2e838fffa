//! Wallet creation and collection management
//!
//! This module composes the derivation pipeline (mnemonic -> seed -> path ->
//! derived key -> encoded keypair) and owns the persisted wallet collection.

use bip39::Mnemonic;

use crate::core::crypto::{KeyEncoder, MnemonicService, PathDeriver};
use crate::core::storage::{PersistedState, StateStore};
use crate::domain::Wallet;
use crate::infrastructure::platform::KeyValueStore;
use crate::shared::error::WalletError;
use crate::shared::types::CoinType;

/// Composes mnemonic handling, path derivation, and key encoding into a
/// single wallet-producing operation.
pub struct WalletFactory {
    mnemonics: MnemonicService,
    deriver: PathDeriver,
    encoder: KeyEncoder,
}

impl WalletFactory {
    pub fn new() -> Self {
        Self {
            mnemonics: MnemonicService::new(),
            deriver: PathDeriver::new(),
            encoder: KeyEncoder::new(),
        }
    }

    pub fn mnemonics(&self) -> &MnemonicService {
        &self.mnemonics
    }

    /// Create a wallet record for a coin type and account index. An empty or
    /// missing phrase generates a fresh mnemonic; an invalid phrase is
    /// rejected before any key material is produced. Every stage
    /// short-circuits, so the result is either a complete record or an
    /// error.
    pub fn create_wallet(
        &self,
        coin_type: CoinType,
        phrase: Option<&str>,
        account_index: u32,
    ) -> Result<Wallet, WalletError> {
        let mnemonic = self.resolve_mnemonic(phrase)?;
        self.create_from_mnemonic(coin_type, &mnemonic, account_index)
    }

    /// Derivation pipeline for an already-validated mnemonic
    pub fn create_from_mnemonic(
        &self,
        coin_type: CoinType,
        mnemonic: &Mnemonic,
        account_index: u32,
    ) -> Result<Wallet, WalletError> {
        let seed = self.mnemonics.to_seed(mnemonic);
        let path = self.deriver.build_path(coin_type, account_index);
        let derived = self.deriver.derive(&seed, &path)?;
        let keypair = self.encoder.encode(coin_type, &derived)?;

        Wallet::new(
            mnemonic.to_string(),
            path,
            keypair.private_key,
            keypair.public_key,
        )
    }

    /// Validate a user-supplied phrase or generate a fresh mnemonic when the
    /// input is empty
    pub fn resolve_mnemonic(&self, phrase: Option<&str>) -> Result<Mnemonic, WalletError> {
        match phrase {
            Some(p) if !p.trim().is_empty() => self.mnemonics.parse(p.trim()),
            _ => self.mnemonics.generate(),
        }
    }
}

impl Default for WalletFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Owner of the ordered wallet collection and its durable mirror. There is
/// exactly one logical writer; every operation is a single atomic step
/// against memory and store.
pub struct WalletManager {
    factory: WalletFactory,
    state: PersistedState,
    store: StateStore,
}

impl WalletManager {
    /// Open the manager over a storage backend, rehydrating any previously
    /// persisted state.
    pub fn open(store: Box<dyn KeyValueStore>) -> Result<Self, WalletError> {
        let store = StateStore::new(store);
        let state = store.load()?;
        log::info!(
            "Wallet manager opened with {} persisted wallet(s)",
            state.wallets.len()
        );
        Ok(Self {
            factory: WalletFactory::new(),
            state,
            store,
        })
    }

    /// Create a wallet and persist it. The account index is fixed here as
    /// the current count of wallets sharing the mnemonic and coin type; it
    /// is never recomputed afterwards. Nothing is written on any derivation
    /// failure, and a failed write rolls the in-memory append back.
    pub fn create_wallet(
        &mut self,
        coin_type: CoinType,
        phrase: Option<&str>,
    ) -> Result<Wallet, WalletError> {
        let mnemonic = self.factory.resolve_mnemonic(phrase)?;
        self.create_and_persist(coin_type, mnemonic)
    }

    /// Create the next wallet from the active mnemonic
    pub fn add_wallet(&mut self, coin_type: CoinType) -> Result<Wallet, WalletError> {
        if self.state.mnemonic_words.is_empty() {
            return Err(WalletError::validation(
                "No active mnemonic; generate a wallet first",
            ));
        }
        let phrase = self.state.mnemonic_words.join(" ");
        let mnemonic = self.factory.mnemonics().parse(&phrase)?;
        self.create_and_persist(coin_type, mnemonic)
    }

    fn create_and_persist(
        &mut self,
        coin_type: CoinType,
        mnemonic: Mnemonic,
    ) -> Result<Wallet, WalletError> {
        let phrase = mnemonic.to_string();
        let account_index = self.group_count(&phrase, coin_type) as u32;
        let wallet = self
            .factory
            .create_from_mnemonic(coin_type, &mnemonic, account_index)?;

        let previous_words = std::mem::replace(
            &mut self.state.mnemonic_words,
            phrase.split_whitespace().map(str::to_string).collect(),
        );
        self.state.wallets.push(wallet.clone());
        self.state.coin_types.push(coin_type);

        if let Err(e) = self.store.save(&self.state) {
            self.state.wallets.pop();
            self.state.coin_types.pop();
            self.state.mnemonic_words = previous_words;
            return Err(e);
        }

        log::info!(
            "Created {} wallet at {} ({} total)",
            coin_type.name(),
            wallet.path,
            self.state.wallets.len()
        );
        Ok(wallet)
    }

    /// Delete the wallet at a list position, keeping `wallets` and `paths`
    /// aligned. Surviving wallets keep their stored paths; indices are not
    /// renumbered.
    pub fn delete_wallet(&mut self, index: usize) -> Result<(), WalletError> {
        if index >= self.state.wallets.len() {
            return Err(WalletError::validation(format!(
                "No wallet at index {}",
                index
            )));
        }

        let wallet = self.state.wallets.remove(index);
        let coin_type = self.state.coin_types.remove(index);

        if let Err(e) = self.store.save(&self.state) {
            self.state.wallets.insert(index, wallet);
            self.state.coin_types.insert(index, coin_type);
            return Err(e);
        }

        log::info!("Deleted wallet at index {}", index);
        Ok(())
    }

    /// Remove every wallet, the path list, and the active mnemonic from
    /// memory and the durable store.
    pub fn clear(&mut self) -> Result<(), WalletError> {
        self.store.clear()?;
        self.state = PersistedState::default();
        log::info!("Cleared all wallets");
        Ok(())
    }

    pub fn wallets(&self) -> &[Wallet] {
        &self.state.wallets
    }

    pub fn coin_types(&self) -> &[CoinType] {
        &self.state.coin_types
    }

    /// Space-joined active mnemonic, if one has been generated or imported
    pub fn active_mnemonic(&self) -> Option<String> {
        if self.state.mnemonic_words.is_empty() {
            None
        } else {
            Some(self.state.mnemonic_words.join(" "))
        }
    }

    fn group_count(&self, phrase: &str, coin_type: CoinType) -> usize {
        self.state
            .wallets
            .iter()
            .zip(self.state.coin_types.iter())
            .filter(|(wallet, coin)| wallet.mnemonic == phrase && **coin == coin_type)
            .count()
    }
}
