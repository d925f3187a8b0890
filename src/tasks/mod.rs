//! Diagnostic CLI tasks.

pub mod accounts;

use thiserror::Error;

use crate::wallet::WalletError;

/// Errors raised while running a task. Provider failures propagate
/// unchanged; there is no retry or partial-result reporting.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error(transparent)]
    Wallet(#[from] WalletError),

    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}
