//! Devnet faucet client
//!
//! This module requests SOL airdrops and balances from a Solana devnet
//! JSON-RPC endpoint. It consumes public key strings only; it has no
//! coupling to the derivation pipeline.

use reqwest::Client;

use crate::shared::constants::{DEVNET_RPC_URL, LAMPORTS_PER_SOL};
use crate::shared::error::WalletError;
use crate::shared::utils::validate_solana_public_key;

/// Convert lamports to SOL for display layers
pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}

/// Faucet client for a Solana devnet RPC endpoint
pub struct FaucetClient {
    client: Client,
    rpc_url: String,
}

impl FaucetClient {
    pub fn new(rpc_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            rpc_url: rpc_url.into(),
        }
    }

    /// Client against the default devnet endpoint, honoring the
    /// WALLET_CORE_RPC_DEVNET env override
    pub fn devnet() -> Self {
        let rpc_url = std::env::var("WALLET_CORE_RPC_DEVNET")
            .unwrap_or_else(|_| DEVNET_RPC_URL.to_string());
        Self::new(rpc_url)
    }

    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    /// Request an airdrop of `amount_sol` to a public key. Returns the
    /// transaction signature reported by the endpoint.
    pub async fn request_airdrop(
        &self,
        public_key: &str,
        amount_sol: f64,
    ) -> Result<String, WalletError> {
        validate_solana_public_key(public_key)?;
        if !amount_sol.is_finite() || amount_sol <= 0.0 {
            return Err(WalletError::validation(
                "Airdrop amount must be a positive number of SOL",
            ));
        }

        let lamports = (amount_sol * LAMPORTS_PER_SOL as f64) as u64;
        let body = serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "requestAirdrop",
            "params": [public_key, lamports]
        });

        let resp = self
            .client
            .post(&self.rpc_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| WalletError::network(format!("Failed to request airdrop: {}", e)))?;
        let resp_json: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| WalletError::network(format!("Invalid airdrop response: {}", e)))?;

        if let Some(error) = resp_json.get("error") {
            let message = error
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or("unknown RPC error");
            return Err(WalletError::network(format!(
                "Airdrop request rejected: {}",
                message
            )));
        }

        resp_json
            .get("result")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .ok_or_else(|| WalletError::network("Missing airdrop signature".to_string()))
    }

    /// Query the balance of a public key in lamports
    pub async fn get_balance(&self, public_key: &str) -> Result<u64, WalletError> {
        validate_solana_public_key(public_key)?;

        let body = serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "getBalance",
            "params": [public_key]
        });

        let resp = self
            .client
            .post(&self.rpc_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| WalletError::network(format!("Failed to query balance: {}", e)))?;
        let resp_json: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| WalletError::network(format!("Invalid balance response: {}", e)))?;

        if let Some(error) = resp_json.get("error") {
            let message = error
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or("unknown RPC error");
            return Err(WalletError::network(format!(
                "Balance query rejected: {}",
                message
            )));
        }

        resp_json
            .get("result")
            .and_then(|r| r.get("value"))
            .and_then(|v| v.as_u64())
            .ok_or_else(|| WalletError::network("Missing balance result".to_string()))
    }
}
