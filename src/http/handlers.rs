//! Request handlers for the two facade routes.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::http::response::ApiError;
use crate::http::server::AppState;
use crate::observability::metrics;

/// Body of `POST /mint`. Presence is the only validation; the recipient is
/// expected to be a chain-address-formatted string and the URI an arbitrary
/// string pointing at off-chain metadata.
#[derive(Debug, Deserialize)]
pub struct MintRequest {
    pub to_address: String,
    pub token_uri: String,
}

#[derive(Debug, Serialize)]
pub struct MintResponse {
    pub status: &'static str,
    pub transaction_hash: String,
    /// Best-effort: the counter value read before submission, not guaranteed
    /// to be the id actually minted if other mints race.
    pub token_id: u64,
}

#[derive(Debug, Serialize)]
pub struct TokenUriResponse {
    pub token_id: u64,
    pub token_uri: String,
}

/// `POST /mint` — mint a token and suspend until the transaction is mined.
pub async fn mint(
    State(state): State<AppState>,
    Json(request): Json<MintRequest>,
) -> Result<Json<MintResponse>, ApiError> {
    let start = Instant::now();

    match state
        .gateway
        .mint(&request.to_address, &request.token_uri)
        .await
    {
        Ok(outcome) => {
            metrics::record_request("mint", 200, start);
            metrics::record_mint(true);
            Ok(Json(MintResponse {
                status: "success",
                transaction_hash: outcome.transaction_hash,
                token_id: outcome.token_id,
            }))
        }
        Err(e) => {
            metrics::record_request("mint", 500, start);
            metrics::record_mint(false);
            Err(ApiError(e))
        }
    }
}

/// `GET /token_uri/{token_id}` — read a token's metadata URI.
pub async fn token_uri(
    State(state): State<AppState>,
    Path(token_id): Path<u64>,
) -> Result<Json<TokenUriResponse>, ApiError> {
    let start = Instant::now();

    match state.gateway.token_uri(token_id).await {
        Ok(uri) => {
            metrics::record_request("token_uri", 200, start);
            Ok(Json(TokenUriResponse {
                token_id,
                token_uri: uri,
            }))
        }
        Err(e) => {
            metrics::record_request("token_uri", 500, start);
            Err(ApiError(e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mint_request_wire_shape() {
        let request: MintRequest = serde_json::from_str(
            r#"{"to_address": "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266", "token_uri": "ipfs://x"}"#,
        )
        .unwrap();
        assert_eq!(request.token_uri, "ipfs://x");
    }

    #[test]
    fn test_mint_request_missing_field_rejected() {
        let result: Result<MintRequest, _> =
            serde_json::from_str(r#"{"to_address": "0xabc"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_mint_response_wire_shape() {
        let response = MintResponse {
            status: "success",
            transaction_hash: "0xabcd".to_string(),
            token_id: 7,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["transaction_hash"], "0xabcd");
        assert_eq!(json["token_id"], 7);
    }

    #[test]
    fn test_token_uri_response_wire_shape() {
        let response = TokenUriResponse {
            token_id: 3,
            token_uri: "ipfs://y".to_string(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["token_id"], 3);
        assert_eq!(json["token_uri"], "ipfs://y");
    }
}
