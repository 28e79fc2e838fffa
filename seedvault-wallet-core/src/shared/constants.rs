//! Constants for the wallet core
//!
//! This module contains all constants used throughout the wallet core.

// Mnemonic constants
pub const MNEMONIC_ENTROPY_BYTES: usize = 16; // 128 bits -> 12 words
pub const GENERATED_WORD_COUNT: usize = 12;
pub const VALID_WORD_COUNTS: &[usize] = &[12, 15, 18, 21, 24];
pub const SEED_PBKDF2_ITERATIONS: u32 = 2048;

// Derivation constants
pub const BIP44_PURPOSE: u32 = 44;
pub const SOLANA_COIN_INDEX: u32 = 501;
pub const ETHEREUM_COIN_INDEX: u32 = 60;
pub const HARDENED_OFFSET: u32 = 0x8000_0000;
pub const ED25519_CURVE_SEED: &[u8] = b"ed25519 seed";

// Key material sizes
pub const SEED_SIZE: usize = 64;
pub const DERIVED_KEY_SIZE: usize = 32;
pub const SOLANA_KEYPAIR_SIZE: usize = 64;
pub const SOLANA_PUBLIC_KEY_SIZE: usize = 32;
pub const UNCOMPRESSED_PUBLIC_KEY_SIZE: usize = 65;
pub const ETHEREUM_ADDRESS_SIZE: usize = 20;

// Storage constants - the three logical keys of the persisted state
pub const WALLETS_KEY: &str = "wallets";
pub const PATHS_KEY: &str = "paths";
pub const MNEMONICS_KEY: &str = "mnemonics";
pub const STORAGE_DIR_NAME: &str = "seedvault";

// Faucet constants
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;
pub const DEVNET_RPC_URL: &str = "https://api.devnet.solana.com";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derivation_constants() {
        assert_eq!(BIP44_PURPOSE, 44);
        assert_eq!(SOLANA_COIN_INDEX, 501);
        assert_eq!(ETHEREUM_COIN_INDEX, 60);
        assert_eq!(HARDENED_OFFSET, 2_147_483_648);
    }

    #[test]
    fn test_key_sizes() {
        assert_eq!(SEED_SIZE, 64);
        assert_eq!(DERIVED_KEY_SIZE, 32);
        assert_eq!(SOLANA_KEYPAIR_SIZE, DERIVED_KEY_SIZE + SOLANA_PUBLIC_KEY_SIZE);
    }

    #[test]
    fn test_storage_keys() {
        assert_eq!(WALLETS_KEY, "wallets");
        assert_eq!(PATHS_KEY, "paths");
        assert_eq!(MNEMONICS_KEY, "mnemonics");
    }
}
