//! Resolved configuration records.
//!
//! All types derive Serde traits; the mnemonic is excluded from
//! serialization so a dumped config never contains key material.

use serde::{Deserialize, Serialize};
use std::fmt;

/// BIP-44 base path for EVM accounts; the account index is appended.
pub const DEFAULT_DERIVATION_PATH: &str = "m/44'/60'/0'/0";

/// Number of accounts derived per network.
pub const DEFAULT_ACCOUNT_COUNT: u32 = 10;

/// Account index used as the deployer.
pub const DEPLOYER_INDEX: u32 = 0;

/// Resolved, ready-to-use parameters for one target chain.
///
/// Created on demand by the resolver; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// RPC endpoint for the target chain.
    pub rpc_url: String,

    /// Numeric chain identifier (EIP-155).
    pub chain_id: u64,

    /// Signing parameters shared across networks.
    pub accounts: AccountsConfig,
}

/// Signing parameters: seed mnemonic plus derivation settings.
#[derive(Clone, Serialize, Deserialize)]
pub struct AccountsConfig {
    /// Seed mnemonic. Empty when no secret source supplies one;
    /// consumers that need signing fail at that point, not here.
    #[serde(default, skip_serializing)]
    pub mnemonic: String,

    /// Base derivation path; account index is appended per account.
    pub path: String,

    /// Number of accounts to derive.
    pub count: u32,
}

impl Default for AccountsConfig {
    fn default() -> Self {
        Self {
            mnemonic: String::new(),
            path: DEFAULT_DERIVATION_PATH.to_string(),
            count: DEFAULT_ACCOUNT_COUNT,
        }
    }
}

// Manual Debug so the mnemonic never reaches a log line.
impl fmt::Debug for AccountsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountsConfig")
            .field("mnemonic", &"<redacted>")
            .field("path", &self.path)
            .field("count", &self.count)
            .finish()
    }
}

/// Project-level build settings mirrored from the contract project.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProjectSettings {
    /// Solidity compiler pins and optimizer settings.
    pub solc: SolcConfig,

    /// Artifact and source directory layout.
    pub paths: ProjectPaths,

    /// Gas reporter toggle.
    pub gas_reporter: GasReporterConfig,
}

/// Pinned compiler versions and optimizer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SolcConfig {
    /// Compiler versions the project pins.
    pub versions: Vec<String>,

    /// Whether the optimizer is enabled.
    pub optimizer: bool,

    /// Optimizer runs.
    pub optimizer_runs: u32,

    /// Strip the metadata bytecode hash for reproducible builds.
    pub strip_bytecode_hash: bool,
}

impl Default for SolcConfig {
    fn default() -> Self {
        Self {
            versions: vec![
                "0.8.19".to_string(),
                "0.8.20".to_string(),
                "0.8.28".to_string(),
            ],
            optimizer: true,
            optimizer_runs: 800,
            strip_bytecode_hash: true,
        }
    }
}

/// Build artifact and source directories.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectPaths {
    pub artifacts: String,
    pub cache: String,
    pub sources: String,
    pub tests: String,
}

impl Default for ProjectPaths {
    fn default() -> Self {
        Self {
            artifacts: "./artifacts".to_string(),
            cache: "./cache".to_string(),
            sources: "./contracts".to_string(),
            tests: "./test".to_string(),
        }
    }
}

/// Gas usage reporting settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GasReporterConfig {
    pub enabled: bool,
    pub currency: String,
}

impl Default for GasReporterConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            currency: "USD".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accounts_defaults() {
        let accounts = AccountsConfig::default();
        assert_eq!(accounts.path, "m/44'/60'/0'/0");
        assert_eq!(accounts.count, 10);
        assert!(accounts.mnemonic.is_empty());
    }

    #[test]
    fn test_mnemonic_not_serialized() {
        let config = NetworkConfig {
            rpc_url: "http://127.0.0.1:8545".to_string(),
            chain_id: 31337,
            accounts: AccountsConfig {
                mnemonic: "test test test".to_string(),
                ..AccountsConfig::default()
            },
        };

        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("test test test"));
        assert!(!json.contains("mnemonic"));
    }

    #[test]
    fn test_mnemonic_not_in_debug() {
        let accounts = AccountsConfig {
            mnemonic: "secret words here".to_string(),
            ..AccountsConfig::default()
        };
        let debug = format!("{:?}", accounts);
        assert!(!debug.contains("secret words here"));
    }

    #[test]
    fn test_project_defaults() {
        let settings = ProjectSettings::default();
        assert_eq!(settings.solc.versions.len(), 3);
        assert_eq!(settings.solc.optimizer_runs, 800);
        assert!(!settings.gas_reporter.enabled);
        assert_eq!(settings.gas_reporter.currency, "USD");
        assert_eq!(settings.paths.sources, "./contracts");
    }
}
