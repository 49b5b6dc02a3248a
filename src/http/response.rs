//! Response shapes and error mapping.
//!
//! Validation failures become 403 with a short reason; chain failures become
//! 500. Both carry the reason under the `result` key, matching what claim
//! UIs expect from this faucet.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::chain::{ChainError, TxResult};

/// Successful grant: the committed transaction result.
#[derive(Debug, Serialize)]
pub struct GrantResponse {
    pub result: TxResult,
}

/// Rejected or failed request: a human-readable reason.
#[derive(Debug, Serialize)]
pub struct RejectResponse {
    pub result: String,
}

/// Balance of the configured denom, as a decimal string.
#[derive(Debug, Serialize)]
pub struct AvailableResponse {
    pub available: String,
}

/// Raw recent-transaction payload from the node.
#[derive(Debug, Serialize)]
pub struct LastClaimResponse {
    pub lastclaim: serde_json::Value,
}

pub fn granted(result: TxResult) -> Response {
    (StatusCode::OK, Json(GrantResponse { result })).into_response()
}

pub fn rejected(reason: &str) -> Response {
    (
        StatusCode::FORBIDDEN,
        Json(RejectResponse {
            result: reason.to_string(),
        }),
    )
        .into_response()
}

impl IntoResponse for ChainError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Chain operation failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(RejectResponse {
                result: self.to_string(),
            }),
        )
            .into_response()
    }
}
