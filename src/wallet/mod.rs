//! Account derivation from the configured mnemonic.
//!
//! # Security
//! - The mnemonic is read only from resolved configuration
//! - Key material is never logged or serialized

use std::future::Future;

use alloy::signers::local::coins_bip39::English;
use alloy::signers::local::{MnemonicBuilder, PrivateKeySigner};
use thiserror::Error;

use crate::config::schema::NetworkConfig;

/// Errors raised while deriving wallet accounts.
#[derive(Debug, Error)]
pub enum WalletError {
    /// No secret source supplied a mnemonic.
    #[error("no mnemonic configured; set MNEMONIC in the environment or vars store")]
    MissingMnemonic,

    /// Mnemonic or derivation path rejected by the signer stack.
    #[error("derivation failed at {path}: {reason}")]
    Derivation { path: String, reason: String },
}

/// Result type for wallet operations.
pub type WalletResult<T> = Result<T, WalletError>;

/// Source of derived signing accounts for a network.
///
/// The single suspend point of the tool: obtaining clients is awaited
/// before any account is used.
pub trait WalletProvider {
    /// Derive the network's configured accounts, in derivation order.
    fn wallet_clients(
        &self,
        config: &NetworkConfig,
    ) -> impl Future<Output = WalletResult<Vec<PrivateKeySigner>>> + Send;
}

/// Derives accounts locally from the configured seed mnemonic.
#[derive(Debug, Clone, Copy, Default)]
pub struct MnemonicWalletProvider;

impl WalletProvider for MnemonicWalletProvider {
    async fn wallet_clients(&self, config: &NetworkConfig) -> WalletResult<Vec<PrivateKeySigner>> {
        let accounts = &config.accounts;
        if accounts.mnemonic.trim().is_empty() {
            return Err(WalletError::MissingMnemonic);
        }

        let mut signers = Vec::with_capacity(accounts.count as usize);
        for index in 0..accounts.count {
            let path = format!("{}/{}", accounts.path, index);
            let signer = MnemonicBuilder::<English>::default()
                .phrase(accounts.mnemonic.as_str())
                .derivation_path(&path)
                .map_err(|e| WalletError::Derivation {
                    path: path.clone(),
                    reason: e.to_string(),
                })?
                .build()
                .map_err(|e| WalletError::Derivation {
                    path: path.clone(),
                    reason: e.to_string(),
                })?;
            signers.push(signer);
        }

        tracing::debug!(
            chain_id = config.chain_id,
            count = signers.len(),
            "derived wallet accounts"
        );
        Ok(signers)
    }
}
