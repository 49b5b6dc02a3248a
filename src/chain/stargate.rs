//! Transaction building, signing, and broadcasting.
//!
//! # Responsibilities
//! - Build bank send messages from the funding account
//! - Estimate gas by simulation ("auto" gas mode)
//! - Sign, broadcast in sync mode, and wait for the commit
//!
//! There is deliberately no retry and no fee bumping here: a rejected or
//! failed transaction propagates straight to the caller.

use std::time::Duration;

use async_trait::async_trait;
use cosmrs::bank::MsgSend;
use cosmrs::tendermint::chain::Id as ChainId;
use cosmrs::tx::{Body, Fee, Msg, SignDoc, SignerInfo};
use cosmrs::{AccountId, Coin, Denom};
use tokio::time::interval;

use crate::chain::lcd::{AccountInfo, LcdClient};
use crate::chain::types::{Balance, ChainError, ChainResult, TxResult};
use crate::chain::wallet::Wallet;
use crate::chain::Chain;
use crate::config::FaucetConfig;

/// Headroom multiplier applied to the simulated gas usage.
const GAS_ADJUSTMENT: f64 = 1.3;

/// How often a pending transaction is polled for inclusion.
const COMMIT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Number of transactions returned by the last-claim query.
const TX_SEARCH_LIMIT: u32 = 10;

/// Production broadcaster: signs with the configured mnemonic and submits
/// through the node's LCD API.
pub struct StargateChain {
    wallet: Wallet,
    lcd: LcdClient,
    chain_id: ChainId,
    gas_price: f64,
    fee_denom: Denom,
    commit_timeout: Duration,
}

impl StargateChain {
    /// Derive the funding wallet and learn the chain id from the node.
    pub async fn connect(config: &FaucetConfig) -> ChainResult<Self> {
        let wallet = Wallet::from_mnemonic(&config.faucet.mnemonic, &config.chain.prefix)?;
        let lcd = LcdClient::new(&config.chain.lcd_url, &config.chain.rpc_url);

        let network = lcd.chain_id().await?;
        let chain_id: ChainId = network
            .parse()
            .map_err(|e| ChainError::Response(format!("invalid chain id '{}': {}", network, e)))?;
        let fee_denom: Denom = config
            .faucet
            .native_denom
            .parse()
            .map_err(|e| ChainError::Encoding(format!("invalid fee denom: {}", e)))?;

        tracing::info!(
            chain_id = %chain_id,
            address = %wallet.address(),
            lcd_url = %config.chain.lcd_url,
            "Chain client initialized"
        );

        Ok(Self {
            wallet,
            lcd,
            chain_id,
            gas_price: config.chain.gas_price,
            fee_denom,
            commit_timeout: Duration::from_secs(config.chain.commit_timeout_secs),
        })
    }

    fn sign(&self, body: &Body, fee: Fee, account: AccountInfo) -> ChainResult<Vec<u8>> {
        let signer_info =
            SignerInfo::single_direct(Some(self.wallet.public_key()), account.sequence);
        let auth_info = signer_info.auth_info(fee);
        let sign_doc = SignDoc::new(body, &auth_info, &self.chain_id, account.account_number)
            .map_err(|e| ChainError::Encoding(e.to_string()))?;
        let raw = sign_doc
            .sign(self.wallet.signing_key())
            .map_err(|e| ChainError::Encoding(e.to_string()))?;
        raw.to_bytes()
            .map_err(|e| ChainError::Encoding(e.to_string()))
    }

    async fn wait_for_commit(&self, txhash: &str) -> ChainResult<TxResult> {
        let deadline = tokio::time::Instant::now() + self.commit_timeout;
        let mut ticker = interval(COMMIT_POLL_INTERVAL);

        loop {
            ticker.tick().await;

            if let Some(tx) = self.lcd.get_tx(txhash).await? {
                // The success assertion: a committed tx with a non-zero code
                // still failed execution.
                if tx.code != 0 {
                    return Err(ChainError::Tx {
                        txhash: tx.txhash,
                        code: tx.code,
                        log: tx.raw_log,
                    });
                }
                return Ok(tx.into());
            }

            if tokio::time::Instant::now() >= deadline {
                return Err(ChainError::CommitTimeout(
                    txhash.to_string(),
                    self.commit_timeout.as_secs(),
                ));
            }
            tracing::debug!(txhash = %txhash, "Transaction pending");
        }
    }
}

#[async_trait]
impl Chain for StargateChain {
    fn faucet_address(&self) -> String {
        self.wallet.address().to_string()
    }

    async fn spendable_balances(&self) -> ChainResult<Vec<Balance>> {
        self.lcd
            .spendable_balances(&self.faucet_address())
            .await
    }

    async fn recent_claims(&self) -> ChainResult<serde_json::Value> {
        self.lcd
            .txs_by_sender(&self.faucet_address(), TX_SEARCH_LIMIT)
            .await
    }

    async fn send_tokens(&self, to: &str, denom: &str, amount: u128) -> ChainResult<TxResult> {
        let recipient: AccountId = to
            .parse()
            .map_err(|e| ChainError::Encoding(format!("invalid recipient '{}': {}", to, e)))?;
        let denom: Denom = denom
            .parse()
            .map_err(|e| ChainError::Encoding(format!("invalid denom: {}", e)))?;

        // Fresh signer state per send; the node arbitrates sequence races.
        let account = self.lcd.account(&self.faucet_address()).await?;

        let msg = MsgSend {
            from_address: self.wallet.address().clone(),
            to_address: recipient,
            amount: vec![Coin {
                denom: denom.clone(),
                amount,
            }],
        }
        .to_any()
        .map_err(|e| ChainError::Encoding(e.to_string()))?;
        let body = Body::new(vec![msg], "", 0u32);

        // "auto" gas: simulate with an empty fee, then size the real fee.
        let sim_fee = Fee {
            amount: Vec::new(),
            gas_limit: 0,
            payer: None,
            granter: None,
        };
        let sim_bytes = self.sign(&body, sim_fee, account)?;
        let gas_used = self.lcd.simulate(&sim_bytes).await?;
        let fee = plan_fee(gas_used, self.gas_price, &self.fee_denom);
        tracing::debug!(gas_used, gas_limit = fee.gas_limit, "Gas estimated");

        let tx_bytes = self.sign(&body, fee, account)?;
        let pending = self.lcd.broadcast_sync(&tx_bytes).await?;
        tracing::info!(
            txhash = %pending.txhash,
            to = %to,
            denom = %denom,
            amount = %amount,
            "Transaction broadcast"
        );

        self.wait_for_commit(&pending.txhash).await
    }
}

/// Size the fee from simulated gas usage and the configured gas price.
fn plan_fee(gas_used: u64, gas_price: f64, fee_denom: &Denom) -> Fee {
    let gas_limit = (gas_used as f64 * GAS_ADJUSTMENT).ceil() as u64;
    let fee_amount = (gas_limit as f64 * gas_price).ceil() as u128;
    Fee::from_amount_and_gas(
        Coin {
            denom: fee_denom.clone(),
            amount: fee_amount,
        },
        gas_limit,
    )
}
