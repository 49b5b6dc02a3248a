//! Funding account key derivation.
//!
//! # Security
//! - The mnemonic lives only in the loaded configuration
//! - Neither the mnemonic nor the private key is ever logged or serialized

use bip32::{DerivationPath, Language, Mnemonic};
use cosmrs::crypto::secp256k1::SigningKey;
use cosmrs::crypto::PublicKey;
use cosmrs::AccountId;

use crate::chain::types::{ChainError, ChainResult};

/// Standard Cosmos HD derivation path (coin type 118, account 0).
const DERIVATION_PATH: &str = "m/44'/118'/0'/0/0";

/// Mnemonic-derived signing identity of the faucet.
pub struct Wallet {
    signing_key: SigningKey,
    public_key: PublicKey,
    account_id: AccountId,
}

impl Wallet {
    /// Derive the funding key pair from a BIP-39 mnemonic under the given
    /// bech32 prefix.
    pub fn from_mnemonic(mnemonic: &str, prefix: &str) -> ChainResult<Self> {
        let mnemonic = Mnemonic::new(mnemonic.trim(), Language::English)
            .map_err(|e| ChainError::Wallet(format!("invalid mnemonic: {}", e)))?;
        let seed = mnemonic.to_seed("");

        let path: DerivationPath = DERIVATION_PATH
            .parse()
            .map_err(|e| ChainError::Wallet(format!("invalid derivation path: {}", e)))?;
        let signing_key = SigningKey::derive_from_path(&seed, &path)
            .map_err(|e| ChainError::Wallet(format!("key derivation failed: {}", e)))?;

        let public_key = signing_key.public_key();
        let account_id = public_key
            .account_id(prefix)
            .map_err(|e| ChainError::Wallet(format!("address derivation failed: {}", e)))?;

        tracing::info!(address = %account_id, "Funding wallet derived");

        Ok(Self {
            signing_key,
            public_key,
            account_id,
        })
    }

    /// Bech32 address of the funding account.
    pub fn address(&self) -> &AccountId {
        &self.account_id
    }

    pub fn public_key(&self) -> PublicKey {
        self.public_key.clone()
    }

    pub fn signing_key(&self) -> &SigningKey {
        &self.signing_key
    }
}

impl std::fmt::Debug for Wallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Keep key material out of debug output.
        f.debug_struct("Wallet")
            .field("address", &self.account_id.to_string())
            .finish()
    }
}
