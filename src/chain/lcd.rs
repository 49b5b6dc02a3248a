//! Node HTTP client (LCD REST API plus one RPC status call).
//!
//! # Responsibilities
//! - Query spendable balances and recent transactions
//! - Fetch signer state (account number, sequence)
//! - Simulate, broadcast, and look up transactions
//! - Surface node failures as typed errors, never panics

use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;

use crate::chain::types::{Balance, ChainError, ChainResult, TxResult};

/// Signer state needed to build the next transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountInfo {
    pub account_number: u64,
    pub sequence: u64,
}

/// Raw transaction response as returned by the LCD.
#[derive(Debug, Clone, Deserialize)]
pub struct TxResponse {
    #[serde(default)]
    pub height: String,
    pub txhash: String,
    #[serde(default)]
    pub code: u32,
    #[serde(default)]
    pub raw_log: String,
    #[serde(default)]
    pub gas_wanted: String,
    #[serde(default)]
    pub gas_used: String,
}

impl From<TxResponse> for TxResult {
    fn from(tx: TxResponse) -> Self {
        Self {
            txhash: tx.txhash,
            height: tx.height,
            code: tx.code,
            gas_wanted: tx.gas_wanted,
            gas_used: tx.gas_used,
            raw_log: tx.raw_log,
        }
    }
}

#[derive(Debug, Deserialize)]
struct BalancesResponse {
    #[serde(default)]
    balances: Vec<Balance>,
}

#[derive(Debug, Deserialize)]
struct SimulateResponse {
    gas_info: GasInfo,
}

#[derive(Debug, Deserialize)]
struct GasInfo {
    gas_used: String,
}

#[derive(Debug, Deserialize)]
struct BroadcastResponse {
    tx_response: TxResponse,
}

#[derive(Debug, Deserialize)]
struct GetTxResponse {
    tx_response: TxResponse,
}

/// Thin client over the node's query and submission endpoints.
#[derive(Debug, Clone)]
pub struct LcdClient {
    http: reqwest::Client,
    lcd_url: String,
    rpc_url: String,
}

impl LcdClient {
    pub fn new(lcd_url: &str, rpc_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            lcd_url: lcd_url.trim_end_matches('/').to_string(),
            rpc_url: rpc_url.trim_end_matches('/').to_string(),
        }
    }

    /// Chain id reported by the node's RPC status endpoint.
    pub async fn chain_id(&self) -> ChainResult<String> {
        let url = format!("{}/status", self.rpc_url);
        let value: Value = self.http.get(&url).send().await?.error_for_status()?.json().await?;
        value
            .pointer("/result/node_info/network")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| ChainError::Response("status response missing node_info.network".into()))
    }

    /// Spendable balances of an account, all denominations.
    pub async fn spendable_balances(&self, address: &str) -> ChainResult<Vec<Balance>> {
        let url = format!(
            "{}/cosmos/bank/v1beta1/spendable_balances/{}",
            self.lcd_url, address
        );
        let response: BalancesResponse = self.get_json(&url).await?;
        Ok(response.balances)
    }

    /// Recent send transactions of an account, raw node payload.
    pub async fn txs_by_sender(&self, address: &str, limit: u32) -> ChainResult<Value> {
        let url = format!("{}/cosmos/tx/v1beta1/txs", self.lcd_url);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("events", format!("message.sender='{}'", address)),
                ("limit", limit.to_string()),
                ("order_by", "2".to_string()),
            ])
            .send()
            .await?;
        self.expect_success(response).await
    }

    /// Account number and sequence for a signer address.
    pub async fn account(&self, address: &str) -> ChainResult<AccountInfo> {
        let url = format!("{}/cosmos/auth/v1beta1/accounts/{}", self.lcd_url, address);
        let value: Value = self.get_json(&url).await?;
        let account = value
            .get("account")
            .ok_or_else(|| ChainError::Account(format!("no account on chain for {}", address)))?;

        // Vesting account types wrap the base account one level deeper.
        let base = account.get("base_account").unwrap_or(account);
        let account_number = parse_u64_field(base, "account_number")?;
        let sequence = parse_u64_field(base, "sequence")?;
        Ok(AccountInfo {
            account_number,
            sequence,
        })
    }

    /// Estimate gas for an encoded transaction.
    pub async fn simulate(&self, tx_bytes: &[u8]) -> ChainResult<u64> {
        let url = format!("{}/cosmos/tx/v1beta1/simulate", self.lcd_url);
        let body = serde_json::json!({ "tx_bytes": encode_base64(tx_bytes) });
        let response = self.http.post(&url).json(&body).send().await?;
        let simulated: SimulateResponse = self.expect_success(response).await?;
        simulated
            .gas_info
            .gas_used
            .parse()
            .map_err(|_| ChainError::Response("simulate returned non-numeric gas_used".into()))
    }

    /// Submit an encoded transaction in sync broadcast mode.
    ///
    /// A non-zero check-tx code is an error; the transaction never entered
    /// the mempool.
    pub async fn broadcast_sync(&self, tx_bytes: &[u8]) -> ChainResult<TxResponse> {
        let url = format!("{}/cosmos/tx/v1beta1/txs", self.lcd_url);
        let body = serde_json::json!({
            "tx_bytes": encode_base64(tx_bytes),
            "mode": "BROADCAST_MODE_SYNC",
        });
        let response = self.http.post(&url).json(&body).send().await?;
        let broadcast: BroadcastResponse = self.expect_success(response).await?;
        let tx = broadcast.tx_response;
        if tx.code != 0 {
            return Err(ChainError::Broadcast {
                code: tx.code,
                log: tx.raw_log,
            });
        }
        Ok(tx)
    }

    /// Look up a transaction by hash. `None` while it is still pending.
    pub async fn get_tx(&self, txhash: &str) -> ChainResult<Option<TxResponse>> {
        let url = format!("{}/cosmos/tx/v1beta1/txs/{}", self.lcd_url, txhash);
        let response = self.http.get(&url).send().await?;
        // Nodes answer 404 (some 400) until the tx lands in a block.
        if response.status() == StatusCode::NOT_FOUND || response.status() == StatusCode::BAD_REQUEST
        {
            return Ok(None);
        }
        let found: GetTxResponse = self.expect_success(response).await?;
        Ok(Some(found.tx_response))
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> ChainResult<T> {
        let response = self.http.get(url).send().await?;
        self.expect_success(response).await
    }

    async fn expect_success<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ChainResult<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status, body = %body, "Node returned an error");
            return Err(ChainError::Response(format!(
                "node returned {}: {}",
                status, body
            )));
        }
        Ok(response.json().await?)
    }
}

fn encode_base64(bytes: &[u8]) -> String {
    use base64::Engine as _;
    base64::engine::general_purpose::STANDARD.encode(bytes)
}

fn parse_u64_field(value: &Value, field: &str) -> ChainResult<u64> {
    value
        .get(field)
        .and_then(Value::as_str)
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| ChainError::Account(format!("account response missing {}", field)))
}
