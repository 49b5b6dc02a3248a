//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the faucet.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the faucet service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct FaucetConfig {
    /// Network name, used in log lines and the served API document.
    pub name: String,

    /// HTTP server settings.
    pub server: ServerConfig,

    /// Chain endpoints and signing parameters.
    pub chain: ChainConfig,

    /// Grant denominations and amounts.
    pub faucet: GrantConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Port the faucet listens on.
    pub port: u16,

    /// Serve the static claim page at /faucet/ui.
    pub enable_ui: bool,

    /// Serve the API document at /openapi.json.
    pub enable_swagger: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            enable_ui: true,
            enable_swagger: false,
        }
    }
}

/// Chain endpoint and signing configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ChainConfig {
    /// Bech32 human-readable prefix of the network (e.g. "cosmos").
    pub prefix: String,

    /// LCD (REST) endpoint of the node.
    pub lcd_url: String,

    /// Tendermint RPC endpoint of the node, queried once for the chain id.
    pub rpc_url: String,

    /// Gas price in the native denom (e.g. 0.025).
    pub gas_price: f64,

    /// Seconds to wait for a broadcast transaction to be committed.
    pub commit_timeout_secs: u64,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            prefix: "cosmos".to_string(),
            lcd_url: "http://localhost:1317".to_string(),
            rpc_url: "http://localhost:26657".to_string(),
            gas_price: 0.025,
            commit_timeout_secs: 30,
        }
    }
}

/// Grant configuration: what the faucet hands out, and from which account.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GrantConfig {
    /// Mnemonic of the funding account. Never logged.
    pub mnemonic: String,

    /// Denom reported by the balance endpoint.
    pub denom: String,

    /// Native staking/fee denom.
    pub native_denom: String,

    /// Secondary (USDC-style) denom.
    pub usdc_denom: String,

    /// Native amount granted per claim.
    pub amount: u128,

    /// Secondary-denom amount granted per claim.
    pub amount_usdc: u128,
}

impl Default for GrantConfig {
    fn default() -> Self {
        Self {
            mnemonic: String::new(),
            denom: "uatom".to_string(),
            native_denom: "uatom".to_string(),
            usdc_denom: "uusdc".to_string(),
            amount: 1_000_000,
            amount_usdc: 1_000_000,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: true,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
