//! Faucet endpoint handlers.
//!
//! Each handler is single-shot request/response: validate input, call the
//! chain, serialize the result. Validation rejects with 403 before any
//! network round-trip; chain failures surface as 500 with no retries.

use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use uuid::Uuid;

use crate::chain::address;
use crate::chain::types::spendable_amount;
use crate::config::FaucetConfig;
use crate::http::response::{granted, rejected, AvailableResponse, LastClaimResponse};
use crate::http::server::AppState;

/// Fixed pause between the two legs of a combined claim. A heuristic for the
/// account sequence becoming reusable, not a confirmation wait.
pub const CLAIM_SEQUENCE_DELAY: Duration = Duration::from_secs(3);

const CLAIM_PAGE: &str = include_str!("../../static/claim.html");

/// Liveness probe.
pub async fn health() -> &'static str {
    "OK"
}

/// Static claim page, gated by configuration.
pub async fn ui(State(state): State<AppState>) -> Response {
    if state.config.server.enable_ui {
        Html(CLAIM_PAGE).into_response()
    } else {
        (StatusCode::FORBIDDEN, "Forbidden").into_response()
    }
}

/// Spendable balance of the configured denom for the funding account.
pub async fn available(State(state): State<AppState>) -> Response {
    let balances = match state.chain.spendable_balances().await {
        Ok(balances) => balances,
        Err(e) => return e.into_response(),
    };
    let available = spendable_amount(&balances, &state.config.faucet.denom);
    Json(AvailableResponse { available }).into_response()
}

/// Recent send transactions of the funding account, raw node payload.
pub async fn last_claim(State(state): State<AppState>) -> Response {
    match state.chain.recent_claims().await {
        Ok(lastclaim) => Json(LastClaimResponse { lastclaim }).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Parametric grant of the secondary denom.
///
/// The subaccount number is validated but otherwise unused; wallets send it
/// and expect it to be checked.
pub async fn token_grant(
    State(state): State<AppState>,
    Path((address, subaccount_number, amount)): Path<(String, String, String)>,
) -> Response {
    let id = Uuid::new_v4();

    if subaccount_number.parse::<i64>().is_err() {
        return rejected("Invalid subaccount number");
    }
    let amount: i128 = match amount.parse() {
        Ok(amount) => amount,
        Err(_) => return rejected("Invalid amount"),
    };
    if amount <= 0 {
        return rejected("Amount must be greater than 0");
    }
    if let Some(reject) = check_address(&state.config, &address) {
        return reject;
    }

    tracing::info!(
        uuid = ?id,
        address = %address,
        subaccount_number = %subaccount_number,
        amount = %amount,
        "Token grant requested"
    );
    match state
        .chain
        .send_tokens(&address, &state.config.faucet.usdc_denom, amount as u128)
        .await
    {
        Ok(result) => granted(result),
        Err(e) => e.into_response(),
    }
}

/// Fixed grant of the native denom.
pub async fn native_token_grant(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Response {
    let id = Uuid::new_v4();

    if let Some(reject) = check_address(&state.config, &address) {
        return reject;
    }

    tracing::info!(uuid = ?id, address = %address, "Native token grant requested");
    let faucet = &state.config.faucet;
    match state
        .chain
        .send_tokens(&address, &faucet.native_denom, faucet.amount)
        .await
    {
        Ok(result) => granted(result),
        Err(e) => e.into_response(),
    }
}

/// Two-phase combined claim: secondary denom first, then the native denom
/// after a fixed pause.
///
/// The caller receives only the first transfer's result; the second leg's
/// result is discarded on success, though its failure still propagates. If
/// the first leg fails the second never runs. No compensation on partial
/// failure.
pub async fn claim(State(state): State<AppState>, Path(address): Path<String>) -> Response {
    let id = Uuid::new_v4();

    if let Some(reject) = check_address(&state.config, &address) {
        return reject;
    }

    let faucet = &state.config.faucet;
    tracing::info!(uuid = ?id, address = %address, "Combined claim requested");

    let first = match state
        .chain
        .send_tokens(&address, &faucet.usdc_denom, faucet.amount_usdc)
        .await
    {
        Ok(result) => result,
        Err(e) => return e.into_response(),
    };

    tokio::time::sleep(CLAIM_SEQUENCE_DELAY).await;

    if let Err(e) = state
        .chain
        .send_tokens(&address, &faucet.native_denom, faucet.amount)
        .await
    {
        return e.into_response();
    }

    tracing::info!(uuid = ?id, txhash = %first.txhash, "Combined claim served");
    granted(first)
}

/// Minimal OpenAPI document, served when the swagger toggle is on.
pub async fn openapi(State(state): State<AppState>) -> Response {
    let doc = serde_json::json!({
        "openapi": "3.1.0",
        "info": {
            "title": format!("{} faucet", state.config.name),
            "version": env!("CARGO_PKG_VERSION"),
        },
        "paths": {
            "/faucet/ui": { "get": { "summary": "Static claim page" } },
            "/faucet/available": { "get": { "summary": "Faucet balance of the configured denom" } },
            "/faucet/last-claim": { "get": { "summary": "Recent send transactions of the faucet" } },
            "/faucet/token/{address}/{subaccountNumber}/{amount}": {
                "get": { "summary": "Grant a caller-chosen amount of the secondary denom" }
            },
            "/faucet/native-token/{address}": { "get": { "summary": "Grant the native denom" } },
            "/faucet/claim/{address}": { "get": { "summary": "Combined two-step claim" } },
        },
    });
    Json(doc).into_response()
}

/// Prefix first, then checksum; the reason string reflects the first failing
/// check.
fn check_address(config: &FaucetConfig, address: &str) -> Option<Response> {
    if !address::has_expected_prefix(address, &config.chain.prefix) {
        return Some(rejected("Invalid address prefix"));
    }
    if !address::is_well_formed(address) {
        return Some(rejected("Invalid address"));
    }
    None
}
