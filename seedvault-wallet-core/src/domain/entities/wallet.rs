//! Wallet entity
//!
//! This module contains the Wallet record produced by the derivation pipeline
//! and owned by the persisted wallet collection.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::error::WalletError;

/// A derived wallet: the mnemonic it came from, the derivation path used, and
/// the coin-specific key encodings. Immutable once created; the persisted
/// collection owns it in insertion order.
///
/// Debug redacts the mnemonic and private key so they cannot reach logs.
/// Serde field names match the persisted JSON produced by earlier releases.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    pub mnemonic: String,
    pub path: String,
    #[serde(rename = "privateKey")]
    pub private_key: String,
    #[serde(rename = "publicKey")]
    pub public_key: String,
}

impl Wallet {
    pub fn new(
        mnemonic: String,
        path: String,
        private_key: String,
        public_key: String,
    ) -> Result<Self, WalletError> {
        if mnemonic.is_empty() {
            return Err(WalletError::validation("Wallet mnemonic cannot be empty"));
        }
        if path.is_empty() {
            return Err(WalletError::validation(
                "Wallet derivation path cannot be empty",
            ));
        }
        if private_key.is_empty() || public_key.is_empty() {
            return Err(WalletError::validation("Wallet keys cannot be empty"));
        }

        Ok(Self {
            mnemonic,
            path,
            private_key,
            public_key,
        })
    }

    /// Account index fixed at creation time, read back from the stored path.
    /// Deletion of other wallets never renumbers this.
    pub fn account_index(&self) -> Option<u32> {
        self.path
            .rsplit('/')
            .next()
            .and_then(|segment| segment.strip_suffix('\''))
            .and_then(|index| index.parse().ok())
    }
}

impl fmt::Debug for Wallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wallet")
            .field("mnemonic", &"<redacted>")
            .field("path", &self.path)
            .field("private_key", &"<redacted>")
            .field("public_key", &self.public_key)
            .finish()
    }
}
