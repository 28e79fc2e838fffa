//! Utility functions for the wallet core
//!
//! This module contains common utility functions used throughout the wallet core.

use crate::shared::constants::SOLANA_PUBLIC_KEY_SIZE;
use crate::shared::error::WalletError;
use rand_core::OsRng;
use rand_core::RngCore;

/// Convert hex string to bytes
pub fn hex_to_bytes(hex: &str) -> Result<Vec<u8>, WalletError> {
    let hex = hex.trim_start_matches("0x");
    hex::decode(hex).map_err(|e| WalletError::validation(format!("Invalid hex string: {}", e)))
}

/// Convert bytes to hex string
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Validate Ethereum address format
pub fn validate_ethereum_address(address: &str) -> Result<(), WalletError> {
    if !address.starts_with("0x") {
        return Err(WalletError::validation("Address must start with 0x"));
    }

    if address.len() != 42 {
        return Err(WalletError::validation("Address must be 42 characters long"));
    }

    if !address[2..].chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(WalletError::validation(
            "Address contains invalid hex characters",
        ));
    }

    Ok(())
}

/// Validate a base58 Solana public key
pub fn validate_solana_public_key(public_key: &str) -> Result<(), WalletError> {
    let decoded = bs58::decode(public_key)
        .into_vec()
        .map_err(|e| WalletError::validation(format!("Invalid base58 public key: {}", e)))?;

    if decoded.len() != SOLANA_PUBLIC_KEY_SIZE {
        return Err(WalletError::validation(format!(
            "Public key must decode to {} bytes, got {}",
            SOLANA_PUBLIC_KEY_SIZE,
            decoded.len()
        )));
    }

    Ok(())
}

/// Generate secure random bytes. Fails rather than falling back to a weaker
/// source when the OS RNG is unavailable.
pub fn generate_secure_random_bytes(length: usize) -> Result<Vec<u8>, WalletError> {
    let mut bytes = vec![0u8; length];
    let mut rng = OsRng;
    rng.try_fill_bytes(&mut bytes)
        .map_err(|e| WalletError::entropy_source(format!("OS randomness unavailable: {}", e)))?;
    Ok(bytes)
}
