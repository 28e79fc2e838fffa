//! Hierarchical key derivation
//!
//! This module builds BIP-44 style derivation paths and walks them over a
//! seed with SLIP-0010 hardened-only derivation on the ed25519 curve. Both
//! supported coin types use the same walk; Ethereum merely interprets the
//! leaf as a secp256k1 scalar downstream.

use hmac::{Hmac, Mac};
use sha2::Sha512;
use zeroize::Zeroize;

use crate::core::crypto::mnemonic::Seed;
use crate::shared::constants::{DERIVED_KEY_SIZE, ED25519_CURVE_SEED, HARDENED_OFFSET};
use crate::shared::error::WalletError;
use crate::shared::types::CoinType;

type HmacSha512 = Hmac<Sha512>;

/// 32-byte key material at the leaf of a derivation path. Zeroized on drop.
///
/// Does not implement Debug or Clone to prevent key material duplication.
pub struct DerivedKey([u8; DERIVED_KEY_SIZE]);

impl DerivedKey {
    pub fn new(bytes: [u8; DERIVED_KEY_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; DERIVED_KEY_SIZE] {
        &self.0
    }
}

impl Zeroize for DerivedKey {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl Drop for DerivedKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

/// Derivation path builder and SLIP-0010 walker
pub struct PathDeriver;

impl PathDeriver {
    pub fn new() -> Self {
        Self
    }

    /// Build the derivation path for a coin type and account index:
    /// `m/44'/{coin}'/0'/{index}'`.
    ///
    /// Both coin types share this shape. For Ethereum this omits the change
    /// level most tooling adds (`m/44'/60'/0'/0/{i}`); kept as-is so paths
    /// stay compatible with wallets already persisted in this format.
    pub fn build_path(&self, coin_type: CoinType, account_index: u32) -> String {
        format!("m/44'/{}'/0'/{}'", coin_type.coin_index(), account_index)
    }

    /// Walk a hardened derivation path over the seed and return the 32-byte
    /// key at its leaf.
    pub fn derive(&self, seed: &Seed, path: &str) -> Result<DerivedKey, WalletError> {
        let indices = parse_hardened_path(path)?;

        let mut mac = HmacSha512::new_from_slice(ED25519_CURVE_SEED)
            .map_err(|e| WalletError::crypto(format!("HMAC initialization failed: {}", e)))?;
        mac.update(seed.as_bytes());
        let digest = mac.finalize().into_bytes();

        let mut key = [0u8; DERIVED_KEY_SIZE];
        let mut chain_code = [0u8; DERIVED_KEY_SIZE];
        key.copy_from_slice(&digest[..32]);
        chain_code.copy_from_slice(&digest[32..]);

        for index in indices {
            // 0x00 || parent key || hardened index, per SLIP-0010
            let mut data = [0u8; 37];
            data[1..33].copy_from_slice(&key);
            data[33..].copy_from_slice(&(HARDENED_OFFSET | index).to_be_bytes());

            let mut mac = HmacSha512::new_from_slice(&chain_code)
                .map_err(|e| WalletError::crypto(format!("HMAC initialization failed: {}", e)))?;
            mac.update(&data);
            let digest = mac.finalize().into_bytes();

            key.copy_from_slice(&digest[..32]);
            chain_code.copy_from_slice(&digest[32..]);
            data.zeroize();
        }

        let derived = DerivedKey::new(key);
        key.zeroize();
        chain_code.zeroize();
        Ok(derived)
    }
}

impl Default for PathDeriver {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a path of the form `m/a'/b'/...` into its hardened indices.
/// Non-hardened segments are rejected: public-only derivation is not
/// possible on this curve.
fn parse_hardened_path(path: &str) -> Result<Vec<u32>, WalletError> {
    let mut segments = path.split('/');

    if segments.next() != Some("m") {
        return Err(WalletError::invalid_path(format!(
            "Derivation path must start with 'm': {}",
            path
        )));
    }

    let mut indices = Vec::new();
    for segment in segments {
        let index_str = segment.strip_suffix('\'').ok_or_else(|| {
            WalletError::invalid_path(format!(
                "Only hardened segments are supported, got: {}",
                segment
            ))
        })?;

        let index: u32 = index_str.parse().map_err(|_| {
            WalletError::invalid_path(format!("Invalid path segment: {}", segment))
        })?;

        if index >= HARDENED_OFFSET {
            return Err(WalletError::invalid_path(format!(
                "Segment index out of range: {}",
                segment
            )));
        }

        indices.push(index);
    }

    Ok(indices)
}
