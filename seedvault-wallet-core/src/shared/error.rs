//! Error handling for the wallet core
//!
//! This module defines the error types used throughout the wallet core.

use thiserror::Error;

/// Wallet error type
#[derive(Error, Debug, Clone)]
pub enum WalletError {
    #[error("Invalid mnemonic: {0}")]
    InvalidMnemonic(String),

    #[error("Unsupported coin type: {0}")]
    UnsupportedCoinType(String),

    #[error("Invalid derivation path: {0}")]
    InvalidPath(String),

    #[error("Entropy source unavailable: {0}")]
    EntropySource(String),

    #[error("Cryptographic error: {0}")]
    Crypto(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Network error: {0}")]
    Network(String),
}

impl WalletError {
    /// Create an invalid mnemonic error
    pub fn invalid_mnemonic(message: impl Into<String>) -> Self {
        Self::InvalidMnemonic(message.into())
    }

    /// Create an unsupported coin type error
    pub fn unsupported_coin_type(message: impl Into<String>) -> Self {
        Self::UnsupportedCoinType(message.into())
    }

    /// Create an invalid derivation path error
    pub fn invalid_path(message: impl Into<String>) -> Self {
        Self::InvalidPath(message.into())
    }

    /// Create an entropy source error
    pub fn entropy_source(message: impl Into<String>) -> Self {
        Self::EntropySource(message.into())
    }

    /// Create a cryptographic error
    pub fn crypto(message: impl Into<String>) -> Self {
        Self::Crypto(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }
}

// Standard library error conversions
impl From<std::io::Error> for WalletError {
    fn from(err: std::io::Error) -> Self {
        Self::storage(format!("IO error: {}", err))
    }
}

impl From<hex::FromHexError> for WalletError {
    fn from(err: hex::FromHexError) -> Self {
        Self::validation(format!("Hex decoding error: {}", err))
    }
}

impl From<serde_json::Error> for WalletError {
    fn from(err: serde_json::Error) -> Self {
        Self::storage(format!("JSON error: {}", err))
    }
}

// Cryptographic error conversions
impl From<secp256k1::Error> for WalletError {
    fn from(err: secp256k1::Error) -> Self {
        Self::crypto(format!("Secp256k1 error: {}", err))
    }
}

impl From<bip39::Error> for WalletError {
    fn from(err: bip39::Error) -> Self {
        Self::invalid_mnemonic(format!("Invalid BIP39 mnemonic: {}", err))
    }
}

// Network error conversions
impl From<reqwest::Error> for WalletError {
    fn from(err: reqwest::Error) -> Self {
        Self::network(format!("HTTP error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_error_creation() {
        let mnemonic_error = WalletError::invalid_mnemonic("checksum mismatch");
        let coin_error = WalletError::unsupported_coin_type("404");
        let path_error = WalletError::invalid_path("m/44/broken");
        let entropy_error = WalletError::entropy_source("OS RNG unavailable");

        assert!(matches!(mnemonic_error, WalletError::InvalidMnemonic(_)));
        assert!(matches!(coin_error, WalletError::UnsupportedCoinType(_)));
        assert!(matches!(path_error, WalletError::InvalidPath(_)));
        assert!(matches!(entropy_error, WalletError::EntropySource(_)));
    }

    #[test]
    fn test_error_conversions() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let wallet_error: WalletError = io_error.into();

        assert!(matches!(wallet_error, WalletError::Storage(_)));
    }

    #[test]
    fn test_error_display() {
        let error = WalletError::invalid_mnemonic("word not in list");
        let display = format!("{}", error);

        assert!(display.contains("Invalid mnemonic"));
        assert!(display.contains("word not in list"));
    }

    #[test]
    fn test_unsupported_coin_type_display() {
        let error = WalletError::unsupported_coin_type("coin type 0 is not supported");
        let display = format!("{}", error);

        assert!(display.contains("Unsupported coin type"));
    }
}
