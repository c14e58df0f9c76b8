//! Contract ABI loading and verification.
//!
//! The ABI JSON file is the source of truth for what the deployed contract
//! exposes. It is loaded once at start-up and must contain the three functions
//! the gateway calls; a missing file, malformed JSON, or absent function
//! prevents the process from serving at all.

use std::fs;
use std::path::Path;

use alloy::json_abi::JsonAbi;

use crate::contract::types::{ContractError, ContractResult};

/// Function signatures the gateway requires from the contract.
pub const REQUIRED_FUNCTIONS: [&str; 3] =
    ["mint(address,string)", "nextTokenId()", "tokenURI(uint256)"];

/// Load the contract ABI from a JSON file and verify the required functions.
///
/// Accepts either a raw ABI array or a build artifact (Hardhat/Foundry style)
/// with the array nested under a top-level `"abi"` key.
pub fn load_abi(path: &Path) -> ContractResult<JsonAbi> {
    let raw = fs::read_to_string(path)
        .map_err(|e| ContractError::Abi(format!("cannot read {}: {}", path.display(), e)))?;

    let value: serde_json::Value = serde_json::from_str(&raw)
        .map_err(|e| ContractError::Abi(format!("malformed JSON in {}: {}", path.display(), e)))?;

    // Build artifacts nest the ABI under an "abi" key
    let abi_value = match value.get("abi") {
        Some(inner) => inner.clone(),
        None => value,
    };

    let abi: JsonAbi = serde_json::from_value(abi_value)
        .map_err(|e| ContractError::Abi(format!("not a valid ABI in {}: {}", path.display(), e)))?;

    verify_required_functions(&abi)?;

    Ok(abi)
}

/// Check that every function the gateway calls is present with the exact
/// signature it will be encoded with.
pub fn verify_required_functions(abi: &JsonAbi) -> ContractResult<()> {
    for signature in REQUIRED_FUNCTIONS {
        let name = signature.split('(').next().unwrap_or(signature);
        let present = abi
            .function(name)
            .map(|overloads| overloads.iter().any(|f| f.signature() == signature))
            .unwrap_or(false);

        if !present {
            return Err(ContractError::Abi(format!(
                "required function {} missing from ABI",
                signature
            )));
        }
    }
    Ok(())
}
