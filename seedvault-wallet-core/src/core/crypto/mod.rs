//! Cryptographic functionality for the wallet core
//!
//! This module provides mnemonic handling, hierarchical derivation, and
//! coin-specific keypair encoding.
//!
//! SECURITY: seed and derived-key material is held in zeroizing wrappers and
//! never logged.

pub mod derivation;
pub mod keys;
pub mod mnemonic;

// Re-export all public items from submodules
pub use derivation::*;
pub use keys::*;
pub use mnemonic::*;
