//! Deployment tooling for an EVM contract project.
//!
//! # Architecture Overview
//!
//! ```text
//! .env.local / .env.development / .env.test / .env
//!     → config::env (layered load, first match wins)
//!     → config::secrets (process env, then vars store)
//!     → config::resolver (chain descriptor + signing params)
//!     → NetworkConfig
//!     → wallet (mnemonic-derived signers)
//!     → tasks::accounts (diagnostic output)
//! ```

pub mod chains;
pub mod config;
pub mod tasks;
pub mod wallet;

pub use chains::ChainId;
pub use config::schema::NetworkConfig;
pub use config::secrets::SecretStore;
pub use config::ConfigError;
pub use wallet::{MnemonicWalletProvider, WalletProvider};
