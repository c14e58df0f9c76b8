//! Blockchain RPC client with timeout and error handling.
//!
//! # Responsibilities
//! - Connect to the JSON-RPC endpoint fixed at start-up
//! - Query chain state (chain id, nonces) and issue read-only calls
//! - Submit raw signed transactions
//! - Bound every unary RPC call with a timeout; the wait for a transaction
//!   to be mined is deliberately unbounded

use alloy::network::Ethereum;
use alloy::primitives::{Address, Bytes};
use alloy::providers::{PendingTransactionBuilder, Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

use crate::config::ChainConfig;
use crate::contract::types::{ContractError, ContractResult};

/// Blockchain RPC client wrapper.
#[derive(Clone)]
pub struct ChainClient {
    provider: Arc<dyn Provider + Send + Sync>,
    config: ChainConfig,
    timeout_duration: Duration,
}

impl ChainClient {
    /// Create a new chain client.
    ///
    /// Connecting is lazy; an unreachable endpoint surfaces on the first call,
    /// not here. Only a malformed URL fails construction.
    pub fn new(config: ChainConfig) -> ContractResult<Self> {
        let url: url::Url = config.rpc_url.parse().map_err(|e| {
            ContractError::Rpc(format!("Invalid RPC URL '{}': {}", config.rpc_url, e))
        })?;

        let provider =
            Arc::new(ProviderBuilder::new().connect_http(url)) as Arc<dyn Provider + Send + Sync>;

        Ok(Self {
            timeout_duration: Duration::from_secs(config.rpc_timeout_secs),
            provider,
            config,
        })
    }

    /// Verify the connected chain ID matches configuration.
    ///
    /// Mismatch or an unreachable endpoint is reported to the caller; the
    /// client stays usable either way.
    pub async fn verify_chain_id(&self) -> ContractResult<()> {
        let chain_id = self.get_chain_id().await?;
        if chain_id != self.config.chain_id {
            return Err(ContractError::Rpc(format!(
                "Chain ID mismatch: expected {}, got {}",
                self.config.chain_id, chain_id
            )));
        }
        Ok(())
    }

    /// Get the chain ID from the RPC.
    pub async fn get_chain_id(&self) -> ContractResult<u64> {
        match timeout(self.timeout_duration, self.provider.get_chain_id()).await {
            Ok(Ok(id)) => Ok(id),
            Ok(Err(e)) => Err(ContractError::Rpc(e.to_string())),
            Err(_) => Err(ContractError::Timeout(self.config.rpc_timeout_secs)),
        }
    }

    /// Get the transaction count (nonce) for an address.
    pub async fn get_transaction_count(&self, address: Address) -> ContractResult<u64> {
        match timeout(
            self.timeout_duration,
            self.provider.get_transaction_count(address),
        )
        .await
        {
            Ok(Ok(nonce)) => Ok(nonce),
            Ok(Err(e)) => Err(ContractError::Rpc(e.to_string())),
            Err(_) => Err(ContractError::Timeout(self.config.rpc_timeout_secs)),
        }
    }

    /// Issue a read-only contract call, returning the raw return data.
    pub async fn call(&self, tx: TransactionRequest) -> ContractResult<Bytes> {
        match timeout(self.timeout_duration, self.provider.call(tx)).await {
            Ok(Ok(data)) => Ok(data),
            Ok(Err(e)) => Err(ContractError::Read(e.to_string())),
            Err(_) => Err(ContractError::Timeout(self.config.rpc_timeout_secs)),
        }
    }

    /// Submit a raw signed transaction to the network.
    ///
    /// Returns a handle that resolves once the transaction is mined. Only the
    /// submission itself is bounded by the RPC timeout.
    pub async fn send_raw_transaction(
        &self,
        encoded_tx: &[u8],
    ) -> ContractResult<PendingTransactionBuilder<Ethereum>> {
        match timeout(
            self.timeout_duration,
            self.provider.send_raw_transaction(encoded_tx),
        )
        .await
        {
            Ok(Ok(pending)) => Ok(pending),
            Ok(Err(e)) => Err(ContractError::Rpc(e.to_string())),
            Err(_) => Err(ContractError::Timeout(self.config.rpc_timeout_secs)),
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &ChainConfig {
        &self.config
    }
}

impl std::fmt::Debug for ChainClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainClient")
            .field("rpc_url", &self.config.rpc_url)
            .field("chain_id", &self.config.chain_id)
            .field("timeout_secs", &self.config.rpc_timeout_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> ChainConfig {
        ChainConfig {
            rpc_url: "http://localhost:8545".to_string(),
            chain_id: 31337, // Anvil default
            rpc_timeout_secs: 5,
            gas_limit: 2_000_000,
            gas_price_wei: 2_000_000,
        }
    }

    #[test]
    fn test_client_creation() {
        // Client creation should succeed even if the RPC is unreachable
        let result = ChainClient::new(test_config());
        assert!(result.is_ok());
    }

    #[test]
    fn test_invalid_rpc_url() {
        let mut config = test_config();
        config.rpc_url = "not a url".to_string();
        let err = ChainClient::new(config).unwrap_err();
        assert!(err.to_string().contains("Invalid RPC URL"));
    }

    #[tokio::test]
    async fn test_unreachable_rpc_surfaces_on_call() {
        let mut config = test_config();
        // Nothing listens on the discard port
        config.rpc_url = "http://127.0.0.1:9".to_string();
        config.rpc_timeout_secs = 2;
        let client = ChainClient::new(config).unwrap();

        let result = client.get_chain_id().await;
        assert!(result.is_err());
    }
}
