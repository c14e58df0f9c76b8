//! NFT Mint Gateway Library
//!
//! A thin HTTP facade over one deployed NFT contract: `POST /mint` builds,
//! signs, and submits a mint transaction and waits for it to be mined;
//! `GET /token_uri/{token_id}` reads a token's metadata URI.

pub mod config;
pub mod contract;
pub mod http;
pub mod observability;

pub use config::GatewayConfig;
pub use contract::{ChainClient, ContractGateway, Wallet};
pub use http::HttpServer;
