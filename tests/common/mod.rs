//! Shared test doubles for endpoint tests.

use std::sync::Mutex;

use async_trait::async_trait;
use testnet_faucet::chain::{Balance, Chain, ChainError, ChainResult, TxResult};

/// One recorded `send_tokens` invocation.
#[derive(Debug, Clone)]
pub struct SendCall {
    pub to: String,
    pub denom: String,
    pub amount: u128,
    pub at: tokio::time::Instant,
}

/// Recording chain double. Every send is appended to `sends` in call order,
/// with the tokio clock time of the call.
pub struct MockChain {
    pub sends: Mutex<Vec<SendCall>>,
    balances: Vec<Balance>,
    fail_first_send: bool,
}

impl MockChain {
    pub fn new() -> Self {
        Self {
            sends: Mutex::new(Vec::new()),
            balances: Vec::new(),
            fail_first_send: false,
        }
    }

    pub fn with_balances(mut self, balances: Vec<Balance>) -> Self {
        self.balances = balances;
        self
    }

    pub fn failing_first_send(mut self) -> Self {
        self.fail_first_send = true;
        self
    }

    pub fn send_count(&self) -> usize {
        self.sends.lock().unwrap().len()
    }
}

#[async_trait]
impl Chain for MockChain {
    fn faucet_address(&self) -> String {
        "cosmos1faucetfaucetfaucetfaucetfaucetfaucet".to_string()
    }

    async fn spendable_balances(&self) -> ChainResult<Vec<Balance>> {
        Ok(self.balances.clone())
    }

    async fn recent_claims(&self) -> ChainResult<serde_json::Value> {
        Ok(serde_json::json!({ "txs": [], "tx_responses": [] }))
    }

    async fn send_tokens(&self, to: &str, denom: &str, amount: u128) -> ChainResult<TxResult> {
        let index = {
            let mut sends = self.sends.lock().unwrap();
            sends.push(SendCall {
                to: to.to_string(),
                denom: denom.to_string(),
                amount,
                at: tokio::time::Instant::now(),
            });
            sends.len()
        };

        if self.fail_first_send && index == 1 {
            return Err(ChainError::Broadcast {
                code: 5,
                log: "insufficient funds".to_string(),
            });
        }

        Ok(TxResult {
            txhash: format!("TX-{}", index),
            height: "100".to_string(),
            code: 0,
            gas_wanted: "200000".to_string(),
            gas_used: "180000".to_string(),
            raw_log: String::new(),
        })
    }
}
