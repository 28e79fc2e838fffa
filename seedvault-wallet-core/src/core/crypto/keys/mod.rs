//! Coin-specific keypair encoding
//!
//! This module turns derived key material into the public/private key
//! representations each chain's tooling expects: base58 ED25519 keypairs for
//! Solana, hex private key plus EIP-55 checksummed address for Ethereum.

use secp256k1::{PublicKey, Secp256k1, SecretKey};

use crate::core::crypto::derivation::DerivedKey;
use crate::shared::error::WalletError;
use crate::shared::types::{CoinType, EncodedPrivateKey, EncodedPublicKey};

/// Encoded keypair returned to the wallet factory.
///
/// Does not implement Debug to prevent key material from reaching logs.
pub struct EncodedKeypair {
    pub public_key: EncodedPublicKey,
    pub private_key: EncodedPrivateKey,
}

/// Key encoder dispatching on coin type
pub struct KeyEncoder {
    secp256k1: Secp256k1<secp256k1::All>,
}

impl KeyEncoder {
    pub fn new() -> Self {
        Self {
            secp256k1: Secp256k1::new(),
        }
    }

    /// Encode a derived key for the given coin type. Either a complete
    /// keypair comes back or an error; there is no partial result.
    pub fn encode(
        &self,
        coin_type: CoinType,
        derived: &DerivedKey,
    ) -> Result<EncodedKeypair, WalletError> {
        match coin_type {
            CoinType::Solana => self.encode_solana(derived),
            CoinType::Ethereum => self.encode_ethereum(derived),
        }
    }

    /// The derived key is an ED25519 seed. The secret key is the standard
    /// 64-byte expansion (seed || public key), base58 encoded; the public
    /// key is the 32-byte point, base58 encoded.
    fn encode_solana(&self, derived: &DerivedKey) -> Result<EncodedKeypair, WalletError> {
        let signing_key = ed25519_dalek::SigningKey::from_bytes(derived.as_bytes());
        let keypair_bytes = signing_key.to_keypair_bytes();

        Ok(EncodedKeypair {
            private_key: bs58::encode(&keypair_bytes[..]).into_string(),
            public_key: bs58::encode(signing_key.verifying_key().as_bytes()).into_string(),
        })
    }

    /// The derived key is used directly as a secp256k1 private key, hex
    /// encoded without a 0x prefix. The public side is the EIP-55
    /// checksummed address: last 20 bytes of the Keccak-256 hash of the
    /// uncompressed public key body.
    fn encode_ethereum(&self, derived: &DerivedKey) -> Result<EncodedKeypair, WalletError> {
        let key_bytes: &[u8] = derived.as_bytes();
        let secret_key = SecretKey::from_byte_array(
            key_bytes
                .try_into()
                .map_err(|_| WalletError::crypto("Invalid private key length".to_string()))?,
        )
        .map_err(|e| WalletError::crypto(format!("Invalid private key: {}", e)))?;

        let public_key = PublicKey::from_secret_key(&self.secp256k1, &secret_key);
        let public_key_bytes = public_key.serialize_uncompressed();

        // Drop the 0x04 prefix, hash, keep the last 20 bytes
        let keccak_hash = self.keccak256(&public_key_bytes[1..]);
        let address = self.to_checksum_address(&keccak_hash[12..]);

        Ok(EncodedKeypair {
            private_key: hex::encode(derived.as_bytes()),
            public_key: address,
        })
    }

    /// EIP-55: uppercase each hex letter whose corresponding nibble in the
    /// Keccak-256 hash of the lowercase address is >= 8.
    fn to_checksum_address(&self, address: &[u8]) -> String {
        let hex_address = hex::encode(address);
        let hash = self.keccak256(hex_address.as_bytes());

        let mut checksummed = String::with_capacity(2 + hex_address.len());
        checksummed.push_str("0x");
        for (i, c) in hex_address.chars().enumerate() {
            let nibble = (hash[i / 2] >> (4 * (1 - i % 2))) & 0x0f;
            if c.is_ascii_alphabetic() && nibble >= 8 {
                checksummed.push(c.to_ascii_uppercase());
            } else {
                checksummed.push(c);
            }
        }
        checksummed
    }

    /// Keccak256 hash function
    fn keccak256(&self, data: &[u8]) -> Vec<u8> {
        use sha3::{Digest, Keccak256};
        let mut hasher = Keccak256::new();
        hasher.update(data);
        hasher.finalize().to_vec()
    }
}

impl Default for KeyEncoder {
    fn default() -> Self {
        Self::new()
    }
}
