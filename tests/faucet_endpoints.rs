//! Endpoint behavior tests against a recording chain double.

mod common;

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use bech32::{Bech32, Hrp};
use http_body_util::BodyExt;
use tower::ServiceExt;

use common::MockChain;
use testnet_faucet::chain::Balance;
use testnet_faucet::config::FaucetConfig;
use testnet_faucet::http::app;

fn test_config() -> FaucetConfig {
    let mut config = FaucetConfig::default();
    config.name = "devnet".to_string();
    config.chain.prefix = "cosmos".to_string();
    config.faucet.denom = "uusdc".to_string();
    config.faucet.native_denom = "unemo".to_string();
    config.faucet.usdc_denom = "uusdc".to_string();
    config.faucet.amount = 111;
    config.faucet.amount_usdc = 222;
    config
}

fn router_with(config: FaucetConfig, chain: Arc<MockChain>) -> Router {
    app(Arc::new(config), chain)
}

fn address_with_prefix(prefix: &str) -> String {
    bech32::encode::<Bech32>(Hrp::parse(prefix).unwrap(), &[7u8; 20]).unwrap()
}

async fn get(router: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, value)
}

#[tokio::test]
async fn malformed_address_is_rejected_before_any_broadcast() {
    let chain = Arc::new(MockChain::new());
    let router = router_with(test_config(), chain.clone());

    for uri in [
        "/faucet/claim/not-an-address",
        "/faucet/native-token/not-an-address",
        "/faucet/token/not-an-address/0/5",
    ] {
        let (status, _) = get(&router, uri).await;
        assert_eq!(status, StatusCode::FORBIDDEN, "{uri}");
    }
    assert_eq!(chain.send_count(), 0);
}

#[tokio::test]
async fn foreign_prefix_is_rejected_with_reason() {
    let chain = Arc::new(MockChain::new());
    let router = router_with(test_config(), chain.clone());

    let address = address_with_prefix("osmo");
    let (status, body) = get(&router, &format!("/faucet/native-token/{address}")).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["result"], "Invalid address prefix");
    assert_eq!(chain.send_count(), 0);
}

#[tokio::test]
async fn token_grant_validates_parameters_in_order() {
    let chain = Arc::new(MockChain::new());
    let router = router_with(test_config(), chain.clone());
    let address = address_with_prefix("cosmos");

    let cases = [
        (format!("/faucet/token/{address}/abc/5"), "Invalid subaccount number"),
        (format!("/faucet/token/{address}/0/abc"), "Invalid amount"),
        (format!("/faucet/token/{address}/0/0"), "Amount must be greater than 0"),
        (format!("/faucet/token/{address}/0/-5"), "Amount must be greater than 0"),
    ];
    for (uri, reason) in cases {
        let (status, body) = get(&router, &uri).await;
        assert_eq!(status, StatusCode::FORBIDDEN, "{uri}");
        assert_eq!(body["result"], reason, "{uri}");
    }
    assert_eq!(chain.send_count(), 0);
}

#[tokio::test]
async fn token_grant_sends_requested_amount_of_secondary_denom() {
    let chain = Arc::new(MockChain::new());
    let router = router_with(test_config(), chain.clone());
    let address = address_with_prefix("cosmos");

    let (status, body) = get(&router, &format!("/faucet/token/{address}/3/5")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["txhash"], "TX-1");

    let sends = chain.sends.lock().unwrap();
    assert_eq!(sends.len(), 1);
    assert_eq!(sends[0].to, address);
    assert_eq!(sends[0].denom, "uusdc");
    assert_eq!(sends[0].amount, 5);
}

#[tokio::test]
async fn native_grant_sends_configured_amount() {
    let chain = Arc::new(MockChain::new());
    let router = router_with(test_config(), chain.clone());
    let address = address_with_prefix("cosmos");

    let (status, body) = get(&router, &format!("/faucet/native-token/{address}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["code"], 0);

    let sends = chain.sends.lock().unwrap();
    assert_eq!(sends.len(), 1);
    assert_eq!(sends[0].denom, "unemo");
    assert_eq!(sends[0].amount, 111);
}

#[tokio::test(start_paused = true)]
async fn combined_claim_sequences_two_transfers_and_returns_the_first() {
    let chain = Arc::new(MockChain::new());
    let router = router_with(test_config(), chain.clone());
    let address = address_with_prefix("cosmos");

    let (status, body) = get(&router, &format!("/faucet/claim/{address}")).await;
    assert_eq!(status, StatusCode::OK);
    // The caller sees the first transfer's result, not the second's.
    assert_eq!(body["result"]["txhash"], "TX-1");

    let sends = chain.sends.lock().unwrap();
    assert_eq!(sends.len(), 2);
    assert_eq!(sends[0].denom, "uusdc");
    assert_eq!(sends[0].amount, 222);
    assert_eq!(sends[1].denom, "unemo");
    assert_eq!(sends[1].amount, 111);
    // Second leg only after the fixed pause.
    assert!(sends[1].at.duration_since(sends[0].at) >= Duration::from_secs(3));
}

#[tokio::test(start_paused = true)]
async fn combined_claim_stops_after_first_failure() {
    let chain = Arc::new(MockChain::new().failing_first_send());
    let router = router_with(test_config(), chain.clone());
    let address = address_with_prefix("cosmos");

    let (status, _) = get(&router, &format!("/faucet/claim/{address}")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(chain.send_count(), 1);
}

#[tokio::test]
async fn available_reports_only_the_configured_denom() {
    let chain = Arc::new(MockChain::new().with_balances(vec![
        Balance {
            denom: "unemo".to_string(),
            amount: "42".to_string(),
        },
        Balance {
            denom: "uusdc".to_string(),
            amount: "1000000000000000000".to_string(),
        },
    ]));
    let router = router_with(test_config(), chain);

    let (status, body) = get(&router, "/faucet/available").await;
    assert_eq!(status, StatusCode::OK);
    // Exact decimal string, never a lossy number.
    assert_eq!(body["available"], "1000000000000000000");
}

#[tokio::test]
async fn last_claim_passes_node_payload_through() {
    let chain = Arc::new(MockChain::new());
    let router = router_with(test_config(), chain);

    let (status, body) = get(&router, "/faucet/last-claim").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["lastclaim"]["tx_responses"].is_array());
}

#[tokio::test]
async fn ui_is_gated_by_configuration() {
    let chain = Arc::new(MockChain::new());

    let router = router_with(test_config(), chain.clone());
    let (status, _) = get(&router, "/faucet/ui").await;
    assert_eq!(status, StatusCode::OK);

    let mut config = test_config();
    config.server.enable_ui = false;
    let router = router_with(config, chain);
    let (status, _) = get(&router, "/faucet/ui").await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn openapi_document_is_gated_by_configuration() {
    let chain = Arc::new(MockChain::new());

    let router = router_with(test_config(), chain.clone());
    let (status, _) = get(&router, "/openapi.json").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let mut config = test_config();
    config.server.enable_swagger = true;
    let router = router_with(config, chain);
    let (status, body) = get(&router, "/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "devnet faucet");
}
