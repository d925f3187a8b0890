//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! env files (.env.local → .env)
//!     → env.rs (layered load, first match wins)
//!     → secrets.rs (process env, then vars store, else empty)
//!     → resolver.rs (chain descriptor + signing params)
//!     → NetworkConfig (resolved, immutable)
//! ```
//!
//! # Design Decisions
//! - Unknown chains fail closed at resolution time
//! - Missing secrets resolve to empty strings; consumers decide when
//!   an empty value is fatal
//! - A missing env file or vars store is not an error

pub mod env;
pub mod resolver;
pub mod schema;
pub mod secrets;

pub use schema::{AccountsConfig, NetworkConfig, ProjectSettings};
pub use secrets::SecretStore;

use thiserror::Error;

/// Errors raised while building configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Network name not present in the fixed chain set.
    #[error("unknown network: {0}")]
    UnknownChain(String),

    /// Numeric chain id not present in the fixed chain set.
    #[error("unknown chain id: {0}")]
    UnknownChainId(u64),

    /// A descriptor carries an RPC URL that does not parse.
    #[error("invalid RPC URL {url}: {source}")]
    InvalidRpcUrl {
        url: String,
        source: url::ParseError,
    },

    /// Vars store exists but could not be read.
    #[error("vars store IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Vars store exists but is not valid TOML.
    #[error("vars store parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
