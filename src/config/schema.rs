//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gateway.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the mint gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Chain connection settings.
    pub chain: ChainConfig,

    /// Contract interface settings.
    pub contract: ContractConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Chain connection configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ChainConfig {
    /// JSON-RPC endpoint URL. Fixed at start-up, not configurable per request.
    pub rpc_url: String,

    /// Chain ID for EIP-155 replay protection (2442 = Polygon zkEVM Cardona).
    pub chain_id: u64,

    /// Timeout for unary RPC requests in seconds. The wait for a transaction
    /// to be mined is not bounded by this.
    pub rpc_timeout_secs: u64,

    /// Fixed gas limit attached to every mint transaction.
    pub gas_limit: u64,

    /// Fixed gas price in wei attached to every mint transaction.
    pub gas_price_wei: u128,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            rpc_url: "https://rpc.cardona.zkevm-rpc.com".to_string(),
            chain_id: 2442,
            rpc_timeout_secs: 10,
            gas_limit: 2_000_000,
            gas_price_wei: 2_000_000,
        }
    }
}

/// Contract interface configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ContractConfig {
    /// Address of the deployed NFT contract.
    pub address: String,

    /// Path to the contract ABI JSON file (raw array or build artifact).
    pub abi_path: String,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            address: "0x1d9a70508F50da7A13659E12A6439fD2F21eDf31".to_string(),
            abi_path: "abi/nft.json".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: true,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GatewayConfig::default();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.chain.chain_id, 2442);
        assert_eq!(config.chain.gas_limit, 2_000_000);
        assert_eq!(config.chain.gas_price_wei, 2_000_000);
        assert_eq!(config.contract.abi_path, "abi/nft.json");
        assert!(config.observability.metrics_enabled);
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let toml = r#"
            [chain]
            rpc_url = "http://localhost:8545"
            chain_id = 31337
        "#;
        let config: GatewayConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.chain.rpc_url, "http://localhost:8545");
        assert_eq!(config.chain.chain_id, 31337);
        // Untouched sections keep their defaults
        assert_eq!(config.chain.rpc_timeout_secs, 10);
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
    }
}
