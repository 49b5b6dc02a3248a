//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check endpoint URLs actually parse
//! - Validate value ranges (amounts > 0, gas price > 0)
//! - Sanity-check the funding mnemonic shape
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: FaucetConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use crate::config::schema::FaucetConfig;

/// A single semantic problem found in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn err(field: &'static str, message: impl Into<String>) -> ValidationError {
    ValidationError {
        field,
        message: message.into(),
    }
}

/// Validate a parsed configuration, collecting every problem found.
pub fn validate_config(config: &FaucetConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.name.is_empty() {
        errors.push(err("name", "network name must not be empty"));
    }

    if config.chain.prefix.is_empty() {
        errors.push(err("chain.prefix", "bech32 prefix must not be empty"));
    }
    for (field, value) in [
        ("chain.lcd_url", &config.chain.lcd_url),
        ("chain.rpc_url", &config.chain.rpc_url),
    ] {
        if let Err(e) = value.parse::<url::Url>() {
            errors.push(err(field, format!("invalid URL '{}': {}", value, e)));
        }
    }
    if config.chain.gas_price <= 0.0 {
        errors.push(err("chain.gas_price", "gas price must be positive"));
    }
    if config.chain.commit_timeout_secs == 0 {
        errors.push(err("chain.commit_timeout_secs", "commit timeout must be positive"));
    }

    let words = config.faucet.mnemonic.split_whitespace().count();
    if !matches!(words, 12 | 15 | 18 | 21 | 24) {
        errors.push(err(
            "faucet.mnemonic",
            format!("expected a 12/15/18/21/24-word mnemonic, got {} words", words),
        ));
    }
    for (field, value) in [
        ("faucet.denom", &config.faucet.denom),
        ("faucet.native_denom", &config.faucet.native_denom),
        ("faucet.usdc_denom", &config.faucet.usdc_denom),
    ] {
        if value.is_empty() {
            errors.push(err(field, "denom must not be empty"));
        }
    }
    if config.faucet.amount == 0 {
        errors.push(err("faucet.amount", "grant amount must be positive"));
    }
    if config.faucet.amount_usdc == 0 {
        errors.push(err("faucet.amount_usdc", "grant amount must be positive"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
