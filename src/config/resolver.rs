//! Network config resolution.
//!
//! Combines a static chain descriptor with the global signing
//! parameters. Pure lookup-and-merge: no network I/O, no mutation
//! beyond reading the environment and secret store.

use url::Url;

use crate::chains::ChainId;
use crate::config::schema::{AccountsConfig, NetworkConfig, ProjectSettings};
use crate::config::secrets::{self, SecretStore};
use crate::config::ConfigError;

/// Resolve the connection parameters for `chain`.
///
/// The mnemonic comes from the secret sources and may be empty; a
/// task that needs signing fails when it tries to derive accounts,
/// not here.
pub fn resolve(chain: ChainId, store: &SecretStore) -> Result<NetworkConfig, ConfigError> {
    let descriptor = chain.descriptor();

    // Descriptors are compile-time constants, but a malformed URL must
    // still fail closed rather than reach a downstream client.
    Url::parse(descriptor.rpc_url).map_err(|source| ConfigError::InvalidRpcUrl {
        url: descriptor.rpc_url.to_string(),
        source,
    })?;

    Ok(NetworkConfig {
        rpc_url: descriptor.rpc_url.to_string(),
        chain_id: descriptor.id,
        accounts: AccountsConfig {
            mnemonic: store.resolve(secrets::MNEMONIC),
            ..AccountsConfig::default()
        },
    })
}

/// Resolve by CLI network name. Unknown names are a fatal
/// configuration error, never a guessed default.
pub fn resolve_by_name(name: &str, store: &SecretStore) -> Result<NetworkConfig, ConfigError> {
    let chain =
        ChainId::from_name(name).ok_or_else(|| ConfigError::UnknownChain(name.to_string()))?;
    resolve(chain, store)
}

/// Resolve by numeric chain id.
pub fn resolve_by_id(id: u64, store: &SecretStore) -> Result<NetworkConfig, ConfigError> {
    let chain = ChainId::from_id(id).ok_or(ConfigError::UnknownChainId(id))?;
    resolve(chain, store)
}

/// Block-explorer verification API key for `chain`. Empty when the
/// chain has no explorer or no key is configured.
pub fn explorer_api_key(chain: ChainId, store: &SecretStore) -> String {
    let key = match chain {
        ChainId::Mainnet | ChainId::Sepolia => secrets::ETHERSCAN_API_KEY,
        ChainId::Bsc => secrets::BSCSCAN_API_KEY,
        ChainId::Arbitrum => secrets::ARBISCAN_API_KEY,
        ChainId::Optimism => secrets::OPTIMISM_API_KEY,
        ChainId::Local => return String::new(),
    };
    store.resolve(key)
}

/// Whether the gas reporter is enabled (any non-empty `REPORT_GAS`).
pub fn gas_reporter_enabled(store: &SecretStore) -> bool {
    !store.resolve(secrets::REPORT_GAS).is_empty()
}

/// Project build settings with environment-driven toggles applied.
pub fn project_settings(store: &SecretStore) -> ProjectSettings {
    let mut settings = ProjectSettings::default();
    settings.gas_reporter.enabled = gas_reporter_enabled(store);
    settings
}
