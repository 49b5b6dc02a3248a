//! Chain integration subsystem.
//!
//! # Data Flow
//! ```text
//! Configuration (mnemonic, prefix, endpoints)
//!     → wallet.rs (key derivation)
//!     → stargate.rs (build, sign, simulate, broadcast, wait)
//!     → lcd.rs (node REST API)
//! address.rs validates recipients before any of the above runs
//! ```
//!
//! # Security Constraints
//! - The mnemonic is never logged or serialized
//! - Recipient addresses are validated before any network call

use async_trait::async_trait;

pub mod address;
pub mod lcd;
pub mod stargate;
pub mod types;
pub mod wallet;

pub use stargate::StargateChain;
pub use types::{Balance, ChainError, ChainResult, TxResult};
pub use wallet::Wallet;

/// Everything the HTTP handlers need from the chain.
///
/// The production implementation is [`StargateChain`]; tests substitute a
/// recording mock.
#[async_trait]
pub trait Chain: Send + Sync {
    /// Bech32 address of the funding account.
    fn faucet_address(&self) -> String;

    /// Spendable balances of the funding account, all denominations.
    async fn spendable_balances(&self) -> ChainResult<Vec<Balance>>;

    /// Raw recent-transaction payload for the funding account.
    async fn recent_claims(&self) -> ChainResult<serde_json::Value>;

    /// Send `amount` of `denom` to `to` and wait until the transaction is
    /// committed. Fails on rejection or a non-zero execution code.
    async fn send_tokens(&self, to: &str, denom: &str, amount: u128) -> ChainResult<TxResult>;
}
