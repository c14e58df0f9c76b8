//! Response error mapping.
//!
//! # Design Decisions
//! - Any gateway failure maps flatly to 500 with the error's message as
//!   `detail`; no structured error codes and no partial-success states
//! - Start-up failures never reach this layer; they abort the process

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::contract::ContractError;

/// A gateway failure crossing the facade boundary.
#[derive(Debug)]
pub struct ApiError(pub ContractError);

impl From<ContractError> for ApiError {
    fn from(err: ContractError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let detail = self.0.to_string();
        tracing::error!(detail = %detail, "Request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": detail })),
        )
            .into_response()
    }
}
