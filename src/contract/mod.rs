//! Contract gateway subsystem.
//!
//! # Data Flow
//! ```text
//! Environment variable (private key) → wallet.rs (key loading, signing)
//! ABI JSON file                      → abi.rs (load, verify required functions)
//! RPC URL (config)                   → client.rs (RPC connection with timeouts)
//!     → gateway.rs (encode, build, sign, submit, confirm; read-only calls)
//! ```
//!
//! # Security Constraints
//! - Private key ONLY from the environment
//! - Never log private keys or sensitive data
//! - Unary RPC calls have a configurable timeout; the mined-wait does not

pub mod abi;
pub mod client;
pub mod gateway;
pub mod types;
pub mod wallet;

pub use client::ChainClient;
pub use gateway::{ContractGateway, MintOutcome};
pub use types::{ContractError, ContractResult};
pub use wallet::Wallet;
