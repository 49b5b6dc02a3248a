//! Chain-specific types and error definitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while talking to the chain.
#[derive(Debug, Error)]
pub enum ChainError {
    /// HTTP transport failure talking to the node.
    #[error("node request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The node answered, but with a payload we could not use.
    #[error("unexpected node response: {0}")]
    Response(String),

    /// The node rejected the transaction at broadcast time.
    #[error("broadcast rejected (code {code}): {log}")]
    Broadcast { code: u32, log: String },

    /// The transaction was committed but failed execution.
    #[error("transaction {txhash} failed (code {code}): {log}")]
    Tx {
        txhash: String,
        code: u32,
        log: String,
    },

    /// The transaction was not found on chain before the deadline.
    #[error("transaction {0} not committed after {1} seconds")]
    CommitTimeout(String, u64),

    /// Mnemonic or key derivation error.
    #[error("wallet error: {0}")]
    Wallet(String),

    /// Account query did not yield usable signer state.
    #[error("account error: {0}")]
    Account(String),

    /// Transaction encoding or signing failed.
    #[error("encoding error: {0}")]
    Encoding(String),
}

/// Result type for chain operations.
pub type ChainResult<T> = Result<T, ChainError>;

/// A single balance entry as reported by the node.
///
/// The amount stays a decimal string end to end; chain amounts routinely
/// exceed what a JSON number can represent losslessly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    pub denom: String,
    pub amount: String,
}

/// Result of a committed transaction, as surfaced to faucet callers.
///
/// Height and gas fields are decimal strings for the same precision reason
/// as [`Balance::amount`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxResult {
    pub txhash: String,
    pub height: String,
    pub code: u32,
    #[serde(default)]
    pub gas_wanted: String,
    #[serde(default)]
    pub gas_used: String,
    #[serde(default)]
    pub raw_log: String,
}

/// Amount of `denom` spendable given a node balance listing.
///
/// Only an exact denom match counts; every other denomination is ignored.
pub fn spendable_amount(balances: &[Balance], denom: &str) -> String {
    balances
        .iter()
        .find(|balance| balance.denom == denom)
        .map(|balance| balance.amount.clone())
        .unwrap_or_else(|| "0".to_string())
}
