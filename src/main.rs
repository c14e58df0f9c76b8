//! NFT Mint Gateway
//!
//! A thin HTTP facade over one deployed NFT contract, built with Tokio and
//! Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌───────────────────────────────────────────────┐
//!                    │                 NFT GATEWAY                    │
//!                    │                                                │
//!   POST /mint       │  ┌─────────┐    ┌──────────────────────────┐  │
//!   ─────────────────┼─▶│  http   │───▶│     contract gateway     │  │     JSON-RPC
//!   GET /token_uri   │  │ facade  │    │ encode → sign → submit → │──┼──▶  endpoint
//!   ◀────────────────┼──│         │◀───│ confirm / read-only call │  │
//!                    │  └─────────┘    └──────────────────────────┘  │
//!                    │                                                │
//!                    │  ┌──────────────────────────────────────────┐ │
//!                    │  │          Cross-Cutting Concerns           │ │
//!                    │  │  ┌────────┐ ┌─────────┐ ┌─────────────┐  │ │
//!                    │  │  │ config │ │ wallet  │ │observability│  │ │
//!                    │  │  └────────┘ └─────────┘ └─────────────┘  │ │
//!                    │  └──────────────────────────────────────────┘ │
//!                    └───────────────────────────────────────────────┘
//! ```
//!
//! Start-up is fail-fast: the signing identity, the contract interface, and
//! the ABI file all load before the listener binds. If any of them fails the
//! process exits without serving a single request.

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;

use nft_gateway::config::loader::load_config;
use nft_gateway::config::GatewayConfig;
use nft_gateway::contract::{ChainClient, ContractGateway, Wallet};
use nft_gateway::http::HttpServer;
use nft_gateway::observability;

#[derive(Parser, Debug)]
#[command(name = "nft-gateway", version, about = "HTTP facade over an NFT contract")]
struct Args {
    /// Path to a TOML configuration file. Defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => GatewayConfig::default(),
    };

    observability::logging::init(&config.observability.log_level);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        rpc_url = %config.chain.rpc_url,
        contract = %config.contract.address,
        "nft-gateway starting"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => observability::metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let wallet = Wallet::from_env(config.chain.chain_id)?;
    let client = ChainClient::new(config.chain.clone())?;

    // Warn-only: an unreachable or mismatched chain degrades gracefully, the
    // first request will surface the transport error.
    if let Err(e) = client.verify_chain_id().await {
        tracing::warn!(error = %e, "Chain verification failed");
    }

    let gateway = Arc::new(ContractGateway::new(client, wallet, &config.contract)?);

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    let server = HttpServer::new(config, gateway);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
