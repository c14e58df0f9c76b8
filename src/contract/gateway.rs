//! Contract gateway: minting and metadata reads against the NFT contract.
//!
//! # Responsibilities
//! - Encode calls against the fixed contract interface
//! - Build, sign, and submit mint transactions with fixed gas settings
//! - Wait for the mint to be mined and inspect the receipt status
//! - Issue read-only calls for token metadata
//!
//! Minting is the only state-mutating operation; it irreversibly submits a
//! transaction and pays gas from the signing identity's balance.

use alloy::eips::eip2718::Encodable2718;
use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, Bytes, TxHash, U256};
use alloy::rpc::types::TransactionRequest;
use alloy::sol;
use alloy::sol_types::SolCall;
use std::path::Path;

use crate::config::ContractConfig;
use crate::contract::abi;
use crate::contract::client::ChainClient;
use crate::contract::types::{ContractError, ContractResult};
use crate::contract::wallet::Wallet;

sol! {
    function mint(address to, string uri);
    function nextTokenId() external view returns (uint256);
    function tokenURI(uint256 tokenId) external view returns (string);
}

/// Result of a successful mint.
#[derive(Debug, Clone)]
pub struct MintOutcome {
    /// Transaction hash as a lowercase 0x-prefixed hex string.
    pub transaction_hash: String,
    /// The next-token-id counter read before submission. Informational only:
    /// concurrent mints may race, so this is not guaranteed to be the id
    /// actually minted.
    pub token_id: u64,
}

/// Gateway holding the RPC connection, contract interface, and signing
/// identity. Constructed once at start-up and shared read-only by all
/// requests.
#[derive(Debug)]
pub struct ContractGateway {
    client: ChainClient,
    wallet: Wallet,
    contract: Address,
}

impl ContractGateway {
    /// Create the gateway, verifying the contract interface.
    ///
    /// Loads the ABI file and checks the required functions are present.
    /// Any failure here must abort start-up; the facade never serves with an
    /// unverified interface.
    pub fn new(
        client: ChainClient,
        wallet: Wallet,
        config: &ContractConfig,
    ) -> ContractResult<Self> {
        abi::load_abi(Path::new(&config.abi_path))?;

        let contract: Address = config.address.parse().map_err(|e| {
            ContractError::Abi(format!("Invalid contract address '{}': {}", config.address, e))
        })?;

        tracing::info!(
            contract = %contract,
            signer = %wallet.address(),
            "Contract gateway initialized"
        );

        Ok(Self {
            client,
            wallet,
            contract,
        })
    }

    /// Mint a token to `to_address` with the given metadata URI.
    ///
    /// Reads the contract's next-token-id counter (informational), fetches
    /// the account nonce fresh from the chain, then builds, signs, and
    /// submits the transaction and suspends until it is mined. A receipt
    /// with failure status maps to [`ContractError::TransactionFailed`].
    ///
    /// Concurrent mints race on the nonce fetch; the gateway does not
    /// serialize submissions.
    pub async fn mint(&self, to_address: &str, token_uri: &str) -> ContractResult<MintOutcome> {
        let to: Address = to_address
            .parse()
            .map_err(|e| ContractError::InvalidRecipient(format!("'{}': {}", to_address, e)))?;

        let token_id = self.next_token_id().await?;

        let nonce = self
            .client
            .get_transaction_count(self.wallet.address())
            .await?;

        let calldata = mintCall {
            to,
            uri: token_uri.to_string(),
        }
        .abi_encode();

        let chain = self.client.config();
        let tx = TransactionRequest::default()
            .with_from(self.wallet.address())
            .with_to(self.contract)
            .with_input(calldata)
            .with_nonce(nonce)
            .with_gas_limit(chain.gas_limit)
            .with_gas_price(chain.gas_price_wei)
            .with_chain_id(self.wallet.chain_id());

        let envelope = tx
            .build(&self.wallet.network_wallet())
            .await
            .map_err(|e| ContractError::Wallet(format!("Signing failed: {}", e)))?;

        let pending = self
            .client
            .send_raw_transaction(&envelope.encoded_2718())
            .await?;

        let tx_hash = *pending.tx_hash();
        tracing::info!(
            tx_hash = %tx_hash,
            to = %to,
            nonce = nonce,
            "Mint transaction submitted"
        );

        let receipt = pending
            .get_receipt()
            .await
            .map_err(|e| ContractError::Rpc(e.to_string()))?;

        if !receipt.status() {
            tracing::warn!(tx_hash = %tx_hash, "Mint transaction reverted");
            return Err(ContractError::TransactionFailed);
        }

        Ok(MintOutcome {
            transaction_hash: format_tx_hash(receipt.transaction_hash),
            token_id,
        })
    }

    /// Read the metadata URI for a token id.
    pub async fn token_uri(&self, token_id: u64) -> ContractResult<String> {
        let calldata = tokenURICall {
            tokenId: U256::from(token_id),
        }
        .abi_encode();

        let data = self.read_call(calldata).await?;

        tokenURICall::abi_decode_returns(&data)
            .map_err(|e| ContractError::Read(format!("tokenURI returned invalid data: {}", e)))
    }

    /// Read the contract's next-token-id counter.
    pub async fn next_token_id(&self) -> ContractResult<u64> {
        let data = self.read_call(nextTokenIdCall {}.abi_encode()).await?;

        let id = nextTokenIdCall::abi_decode_returns(&data)
            .map_err(|e| ContractError::Read(format!("nextTokenId returned invalid data: {}", e)))?;

        u64::try_from(id).map_err(|_| ContractError::Read("next token id out of range".to_string()))
    }

    /// The signing identity's address.
    pub fn signer_address(&self) -> Address {
        self.wallet.address()
    }

    async fn read_call(&self, calldata: Vec<u8>) -> ContractResult<Bytes> {
        let tx = TransactionRequest::default()
            .with_to(self.contract)
            .with_input(calldata);
        self.client.call(tx).await
    }
}

/// Render a transaction hash as the wire format: lowercase 0x + 64 hex chars.
fn format_tx_hash(hash: TxHash) -> String {
    format!("{hash:#x}")
}
