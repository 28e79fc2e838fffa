//! Mnemonic generation and seed stretching
//!
//! This module handles BIP-39 mnemonic generation, validation, and the
//! PBKDF2 stretch from phrase to binary seed.

use bip39::{Language, Mnemonic};
use rand_core::OsRng;
use rand_core::RngCore;
use zeroize::Zeroize;

use crate::shared::constants::{MNEMONIC_ENTROPY_BYTES, SEED_SIZE};
use crate::shared::error::WalletError;

/// 64-byte binary seed derived from a mnemonic. Zeroized on drop.
///
/// Does not implement Debug or Clone to prevent seed material duplication.
pub struct Seed([u8; SEED_SIZE]);

impl Seed {
    pub fn new(bytes: [u8; SEED_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; SEED_SIZE] {
        &self.0
    }
}

impl Zeroize for Seed {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl Drop for Seed {
    fn drop(&mut self) {
        self.zeroize();
    }
}

/// Mnemonic service for phrase generation, validation, and seed derivation
pub struct MnemonicService;

impl MnemonicService {
    pub fn new() -> Self {
        Self
    }

    /// Generate a fresh 12-word English mnemonic from 128 bits of OS
    /// randomness. Entropy failure is fatal for the operation; there is no
    /// weaker fallback source.
    pub fn generate(&self) -> Result<Mnemonic, WalletError> {
        let mut entropy = [0u8; MNEMONIC_ENTROPY_BYTES];
        let mut rng = OsRng;
        rng.try_fill_bytes(&mut entropy)
            .map_err(|e| WalletError::entropy_source(format!("OS randomness unavailable: {}", e)))?;

        let mnemonic = Mnemonic::from_entropy(&entropy)
            .map_err(|e| WalletError::crypto(format!("Mnemonic encoding failed: {}", e)))?;
        entropy.zeroize();
        Ok(mnemonic)
    }

    /// Whether a phrase is a syntactically and checksum-valid BIP-39 mnemonic
    pub fn validate(&self, phrase: &str) -> bool {
        Mnemonic::parse_in_normalized(Language::English, phrase).is_ok()
    }

    /// Parse a user-supplied phrase, surfacing the BIP-39 failure reason
    pub fn parse(&self, phrase: &str) -> Result<Mnemonic, WalletError> {
        Mnemonic::parse_in_normalized(Language::English, phrase)
            .map_err(|e| WalletError::invalid_mnemonic(format!("Invalid BIP39 mnemonic: {}", e)))
    }

    /// Deterministic PBKDF2-HMAC-SHA512 stretch of the mnemonic (2048
    /// iterations, "mnemonic" salt prefix, empty passphrase) into a 64-byte
    /// seed.
    pub fn to_seed(&self, mnemonic: &Mnemonic) -> Seed {
        Seed::new(mnemonic.to_seed_normalized(""))
    }
}

impl Default for MnemonicService {
    fn default() -> Self {
        Self::new()
    }
}
