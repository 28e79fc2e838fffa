//! Infrastructure layer - platform-specific implementations
//!
//! This module contains platform adapters for the wallet system.

pub mod platform;

// Re-export infrastructure components
pub use platform::*;
