//! Contract-facing types and error definitions.

use thiserror::Error;

/// Errors that can occur while talking to the contract.
#[derive(Debug, Error)]
pub enum ContractError {
    /// RPC connection or request failed.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// RPC request timed out.
    #[error("RPC timeout after {0} seconds")]
    Timeout(u64),

    /// The mint transaction was mined but its receipt reported failure.
    #[error("minting transaction failed")]
    TransactionFailed,

    /// A read-only contract call was rejected.
    #[error("contract read failed: {0}")]
    Read(String),

    /// Invalid private key format or signing error.
    #[error("wallet error: {0}")]
    Wallet(String),

    /// Recipient address could not be parsed.
    #[error("invalid recipient address: {0}")]
    InvalidRecipient(String),

    /// ABI file missing, malformed, or lacking a required function.
    #[error("contract ABI error: {0}")]
    Abi(String),
}

/// Result type for contract operations.
pub type ContractResult<T> = Result<T, ContractError>;
