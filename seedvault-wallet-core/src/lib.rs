//! SeedVault Wallet Core
//!
//! Wallet core for SeedVault. Derives Solana and Ethereum keypairs from
//! BIP-39 mnemonics and manages the persisted wallet collection in Rust.
//!
//! ## Architecture
//!
//! This library follows a layered architecture focused on the derivation
//! pipeline:
//!
//! - **Core**: mnemonic handling, path derivation, key encoding, wallet
//!   management, state persistence, faucet client
//! - **Domain**: the wallet record entity
//! - **Shared**: common types, constants, errors, and utilities
//! - **Infrastructure**: the storage port and host adapters
//!
//! ## Derivation contract
//!
//! Wallets are derived along `m/44'/{coin}'/0'/{index}'` with SLIP-0010
//! hardened derivation over the BIP-39 seed, so any standard wallet fed the
//! same mnemonic produces the same keys.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use seedvault_wallet_core::{init_wallet_core, CoinType};
//!
//! # async fn run() -> Result<(), seedvault_wallet_core::WalletError> {
//! let mut core = init_wallet_core().await?;
//!
//! // Generate a fresh mnemonic and derive the first Solana wallet
//! let wallet = core.manager.create_wallet(CoinType::Solana, None)?;
//!
//! // Top it up on devnet
//! let signature = core.faucet.request_airdrop(&wallet.public_key, 1.0).await?;
//! # Ok(())
//! # }
//! ```

use dotenv::dotenv;
use std::env;

// Re-export main modules for easy access
pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod shared;

use crate::shared::constants::DEVNET_RPC_URL;

// Re-export specific components
pub use crate::core::crypto::{KeyEncoder, MnemonicService, PathDeriver, Seed};
pub use crate::core::faucet::{lamports_to_sol, FaucetClient};
pub use crate::core::storage::{PersistedState, StateStore};
pub use crate::core::wallet::{WalletFactory, WalletManager};
pub use crate::infrastructure::platform::{FileStore, KeyValueStore};

// Re-export domain entities and shared types
pub use crate::domain::Wallet;
pub use crate::shared::error::WalletError;
pub use crate::shared::types::{CoinType, WalletResult};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Initialize logging for host applications that have not set it up
pub fn init() {
    env_logger::init();
}

/// Initialize the wallet core with configuration from .env or safe defaults
pub async fn init_wallet_core() -> Result<WalletCore, WalletError> {
    dotenv().ok(); // Load .env if present

    let store = FileStore::new()?;
    let manager = WalletManager::open(Box::new(store))?;

    // Read the devnet RPC URL; fall back to the public devnet endpoint
    let rpc_url =
        env::var("WALLET_CORE_RPC_DEVNET").unwrap_or_else(|_| DEVNET_RPC_URL.to_string());
    let faucet = FaucetClient::new(rpc_url);

    Ok(WalletCore { manager, faucet })
}

/// Main wallet core struct that provides access to all functionality
pub struct WalletCore {
    pub manager: WalletManager,
    pub faucet: FaucetClient,
}

impl WalletCore {
    /// Create a wallet from an optional mnemonic phrase and persist it
    pub fn create_wallet(
        &mut self,
        coin_type: CoinType,
        phrase: Option<&str>,
    ) -> Result<Wallet, WalletError> {
        self.manager.create_wallet(coin_type, phrase)
    }

    /// Derive the next wallet from the active mnemonic
    pub fn add_wallet(&mut self, coin_type: CoinType) -> Result<Wallet, WalletError> {
        self.manager.add_wallet(coin_type)
    }

    /// Delete the wallet at a list position
    pub fn delete_wallet(&mut self, index: usize) -> Result<(), WalletError> {
        self.manager.delete_wallet(index)
    }

    /// Remove all wallets and the active mnemonic
    pub fn clear_wallets(&mut self) -> Result<(), WalletError> {
        self.manager.clear()
    }

    /// Request a devnet airdrop for a public key
    pub async fn request_airdrop(
        &self,
        public_key: &str,
        amount_sol: f64,
    ) -> Result<String, WalletError> {
        self.faucet.request_airdrop(public_key, amount_sol).await
    }

    /// Query the devnet balance of a public key in lamports
    pub async fn get_balance(&self, public_key: &str) -> Result<u64, WalletError> {
        self.faucet.get_balance(public_key).await
    }
}
