use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::shared::constants::{ETHEREUM_COIN_INDEX, SOLANA_COIN_INDEX};
use crate::shared::error::WalletError;

// Basic types for wallet operations
pub type EncodedPublicKey = String;
pub type EncodedPrivateKey = String;
pub type DerivationPath = String;

// Coin types - Solana (SLIP-0044 index 501) and Ethereum (index 60)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoinType {
    Solana,
    Ethereum,
}

impl CoinType {
    /// SLIP-0044 registry index used in derivation paths
    pub fn coin_index(&self) -> u32 {
        match self {
            CoinType::Solana => SOLANA_COIN_INDEX,
            CoinType::Ethereum => ETHEREUM_COIN_INDEX,
        }
    }

    /// Registry index as the string stored in the `paths` sequence
    pub fn registry(&self) -> &'static str {
        match self {
            CoinType::Solana => "501",
            CoinType::Ethereum => "60",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CoinType::Solana => "Solana",
            CoinType::Ethereum => "Ethereum",
        }
    }

    /// Parse a registry string ("501" or "60"). Anything else is rejected
    /// before key material can be produced.
    pub fn from_registry(value: &str) -> Result<Self, WalletError> {
        match value.trim() {
            "501" => Ok(CoinType::Solana),
            "60" => Ok(CoinType::Ethereum),
            other => Err(WalletError::unsupported_coin_type(format!(
                "Coin type {} is not supported; expected 501 (Solana) or 60 (Ethereum)",
                other
            ))),
        }
    }
}

// Persisted as the registry string so the stored `paths` sequence keeps its
// original format.
impl Serialize for CoinType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.registry())
    }
}

impl<'de> Deserialize<'de> for CoinType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        CoinType::from_registry(&value).map_err(de::Error::custom)
    }
}

// Result type for better error handling
pub type WalletResult<T> = Result<T, crate::shared::error::WalletError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coin_indices() {
        assert_eq!(CoinType::Solana.coin_index(), 501);
        assert_eq!(CoinType::Ethereum.coin_index(), 60);
    }

    #[test]
    fn test_coin_names() {
        assert_eq!(CoinType::Solana.name(), "Solana");
        assert_eq!(CoinType::Ethereum.name(), "Ethereum");
    }

    #[test]
    fn test_from_registry() {
        assert_eq!(
            CoinType::from_registry("501").expect("501 should parse"),
            CoinType::Solana
        );
        assert_eq!(
            CoinType::from_registry("60").expect("60 should parse"),
            CoinType::Ethereum
        );
    }

    #[test]
    fn test_from_registry_rejects_unknown() {
        assert!(matches!(
            CoinType::from_registry("0"),
            Err(WalletError::UnsupportedCoinType(_))
        ));
        assert!(matches!(
            CoinType::from_registry("bitcoin"),
            Err(WalletError::UnsupportedCoinType(_))
        ));
        assert!(matches!(
            CoinType::from_registry(""),
            Err(WalletError::UnsupportedCoinType(_))
        ));
    }

    #[test]
    fn test_serde_round_trip_keeps_registry_strings() {
        let coins = vec![CoinType::Solana, CoinType::Ethereum];
        let json = serde_json::to_string(&coins).expect("Failed to serialize coin types");
        assert_eq!(json, r#"["501","60"]"#);

        let parsed: Vec<CoinType> =
            serde_json::from_str(&json).expect("Failed to deserialize coin types");
        assert_eq!(parsed, coins);
    }

    #[test]
    fn test_deserialize_rejects_unknown_registry() {
        let result: Result<CoinType, _> = serde_json::from_str(r#""999""#);
        assert!(result.is_err());
    }
}
