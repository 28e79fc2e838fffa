//! Domain entities and value objects
//!
//! This module contains the core domain entities that represent the business
//! concepts in the wallet system.

pub mod wallet;

// Re-export entities
pub use wallet::*;
