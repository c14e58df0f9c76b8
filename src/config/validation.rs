//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check addresses and URLs actually parse
//! - Validate value ranges (timeouts > 0, gas > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use alloy::primitives::Address;
use std::net::SocketAddr;

use crate::config::schema::GatewayConfig;

/// A single semantic validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Config field the error refers to (e.g., "chain.rpc_url").
    pub field: String,
    /// Human-readable description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError {
            field: "listener.bind_address".to_string(),
            message: format!("'{}' is not a valid socket address", config.listener.bind_address),
        });
    }

    if config.chain.rpc_url.parse::<url::Url>().is_err() {
        errors.push(ValidationError {
            field: "chain.rpc_url".to_string(),
            message: format!("'{}' is not a valid URL", config.chain.rpc_url),
        });
    }

    if config.chain.rpc_timeout_secs == 0 {
        errors.push(ValidationError {
            field: "chain.rpc_timeout_secs".to_string(),
            message: "must be greater than zero".to_string(),
        });
    }

    if config.chain.gas_limit == 0 {
        errors.push(ValidationError {
            field: "chain.gas_limit".to_string(),
            message: "must be greater than zero".to_string(),
        });
    }

    if config.contract.address.parse::<Address>().is_err() {
        errors.push(ValidationError {
            field: "contract.address".to_string(),
            message: format!("'{}' is not a valid contract address", config.contract.address),
        });
    }

    if config.contract.abi_path.is_empty() {
        errors.push(ValidationError {
            field: "contract.abi_path".to_string(),
            message: "must not be empty".to_string(),
        });
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError {
            field: "observability.metrics_address".to_string(),
            message: format!(
                "'{}' is not a valid socket address",
                config.observability.metrics_address
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
