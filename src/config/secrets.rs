//! Secret resolution with a vars-store fallback.
//!
//! Secrets are looked up in the process environment first, then in an
//! optional TOML key/value store. A key found in neither resolves to an
//! empty string; whether an empty value is fatal is the consumer's call
//! (a verification call needs an API key, a read-only task does not).
//!
//! # Security
//! - Secret values are never logged
//! - The store is read once at startup and never written by this crate

use std::collections::BTreeMap;
use std::path::Path;

use crate::config::ConfigError;

/// Mnemonic used to derive signing accounts.
pub const MNEMONIC: &str = "MNEMONIC";
/// Arbiscan verification API key.
pub const ARBISCAN_API_KEY: &str = "ARBISCAN_API_KEY";
/// BscScan verification API key.
pub const BSCSCAN_API_KEY: &str = "BSCSCAN_API_KEY";
/// Etherscan verification API key (mainnet and sepolia).
pub const ETHERSCAN_API_KEY: &str = "ETHERSCAN_API_KEY";
/// Optimistic Etherscan verification API key.
pub const OPTIMISM_API_KEY: &str = "OPTIMISM_API_KEY";
/// Any non-empty value enables the gas reporter.
pub const REPORT_GAS: &str = "REPORT_GAS";

/// Environment variable overriding the vars store location.
pub const VARS_PATH_VAR: &str = "CHAINOPS_VARS";

/// Default vars store file, relative to the working directory.
pub const DEFAULT_VARS_FILE: &str = "vars.toml";

/// Key/value secret store backed by an optional TOML file.
#[derive(Debug, Clone, Default)]
pub struct SecretStore {
    vars: BTreeMap<String, String>,
}

impl SecretStore {
    /// Open the store at `path`. A missing file yields an empty store;
    /// a file that exists but fails to read or parse is an error.
    pub fn open(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "vars store not found, using empty store");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let vars: BTreeMap<String, String> = toml::from_str(&content)?;

        tracing::debug!(path = %path.display(), keys = vars.len(), "vars store loaded");
        Ok(Self { vars })
    }

    /// Open the store at the default location, honoring the
    /// `CHAINOPS_VARS` path override.
    pub fn open_default() -> Result<Self, ConfigError> {
        let path = std::env::var(VARS_PATH_VAR).unwrap_or_else(|_| DEFAULT_VARS_FILE.to_string());
        Self::open(Path::new(&path))
    }

    /// Build a store directly from key/value pairs. Used by tests and
    /// callers that manage their own secret source.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Resolve `key`: process environment first, then the store, else
    /// an empty string. Never errors.
    pub fn resolve(&self, key: &str) -> String {
        match std::env::var(key) {
            Ok(value) if !value.is_empty() => value,
            _ => self.vars.get(key).cloned().unwrap_or_default(),
        }
    }
}
