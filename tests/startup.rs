//! Start-up fail-fast tests.
//!
//! A missing or malformed ABI, or a bad contract address, must prevent the
//! gateway from being constructed at all, so the server can never accept a
//! request with an unverified interface.

use std::io::Write;

use nft_gateway::config::{ChainConfig, ContractConfig};
use nft_gateway::contract::{ChainClient, ContractGateway, Wallet};

// Well-known test private key (Anvil's first account)
const TEST_PRIVATE_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

fn test_chain_config() -> ChainConfig {
    ChainConfig {
        // Nothing listens on the discard port; start-up must not need it
        rpc_url: "http://127.0.0.1:9".to_string(),
        chain_id: 31337,
        rpc_timeout_secs: 2,
        gas_limit: 2_000_000,
        gas_price_wei: 2_000_000,
    }
}

fn build_gateway(contract: ContractConfig) -> Result<ContractGateway, nft_gateway::contract::ContractError> {
    let wallet = Wallet::from_private_key(TEST_PRIVATE_KEY, 31337)?;
    let client = ChainClient::new(test_chain_config())?;
    ContractGateway::new(client, wallet, &contract)
}

#[test]
fn missing_abi_file_prevents_startup() {
    let contract = ContractConfig {
        address: "0x1d9a70508F50da7A13659E12A6439fD2F21eDf31".to_string(),
        abi_path: "/nonexistent/abi.json".to_string(),
    };

    let err = build_gateway(contract).unwrap_err();
    assert!(err.to_string().contains("cannot read"));
}

#[test]
fn malformed_abi_prevents_startup() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{not valid json").unwrap();

    let contract = ContractConfig {
        address: "0x1d9a70508F50da7A13659E12A6439fD2F21eDf31".to_string(),
        abi_path: file.path().to_string_lossy().into_owned(),
    };

    let err = build_gateway(contract).unwrap_err();
    assert!(err.to_string().contains("malformed JSON"));
}

#[test]
fn abi_without_mint_prevents_startup() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{
                "type": "function",
                "name": "nextTokenId",
                "inputs": [],
                "outputs": [{{"name": "", "type": "uint256"}}],
                "stateMutability": "view"
            }},
            {{
                "type": "function",
                "name": "tokenURI",
                "inputs": [{{"name": "tokenId", "type": "uint256"}}],
                "outputs": [{{"name": "", "type": "string"}}],
                "stateMutability": "view"
            }}
        ]"#
    )
    .unwrap();

    let contract = ContractConfig {
        address: "0x1d9a70508F50da7A13659E12A6439fD2F21eDf31".to_string(),
        abi_path: file.path().to_string_lossy().into_owned(),
    };

    let err = build_gateway(contract).unwrap_err();
    assert!(err.to_string().contains("mint(address,string)"));
}

#[test]
fn bad_contract_address_prevents_startup() {
    let contract = ContractConfig {
        address: "not-an-address".to_string(),
        // The repo's own default artifact is a valid interface
        abi_path: "abi/nft.json".to_string(),
    };

    let err = build_gateway(contract).unwrap_err();
    assert!(err.to_string().contains("Invalid contract address"));
}

#[test]
fn valid_interface_constructs_without_rpc() {
    let contract = ContractConfig {
        address: "0x1d9a70508F50da7A13659E12A6439fD2F21eDf31".to_string(),
        abi_path: "abi/nft.json".to_string(),
    };

    // The chain is unreachable; only the interface is checked at start-up
    assert!(build_gateway(contract).is_ok());
}
