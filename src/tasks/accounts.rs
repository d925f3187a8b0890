//! Account listing task.
//!
//! Prints the address of every account derived for the active network,
//! one per line, in provider order. Read-only diagnostic: the only
//! side effect is the write to `out`.

use std::io::Write;

use crate::config::schema::NetworkConfig;
use crate::tasks::TaskError;
use crate::wallet::WalletProvider;

/// Run the `accounts` task against `config`, writing addresses to `out`.
pub async fn run<P: WalletProvider>(
    provider: &P,
    config: &NetworkConfig,
    out: &mut dyn Write,
) -> Result<(), TaskError> {
    let clients = provider.wallet_clients(config).await?;

    for client in &clients {
        writeln!(out, "{}", client.address())?;
    }

    Ok(())
}
