use std::path::Path;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chainops::config::{env, resolver};
use chainops::{tasks, ChainId, MnemonicWalletProvider, SecretStore};

#[derive(Parser)]
#[command(name = "chainops")]
#[command(about = "Deployment network tooling for the contract project", long_about = None)]
struct Cli {
    /// Target network (local, mainnet, sepolia, bsc, arbitrum, optimism)
    #[arg(short, long, default_value = "local")]
    network: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the list of derived account addresses
    Accounts,
    /// Show the resolved configuration (never prints key material)
    Config,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chainops=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    // Layered env files from the working directory, then the vars store.
    env::load_env_files(Path::new("."));
    let store = SecretStore::open_default()?;

    let config = resolver::resolve_by_name(&cli.network, &store)?;

    tracing::info!(
        network = %cli.network,
        chain_id = config.chain_id,
        rpc_url = %config.rpc_url,
        "network resolved"
    );

    match cli.command {
        Commands::Accounts => {
            let provider = MnemonicWalletProvider;
            let mut stdout = std::io::stdout().lock();
            tasks::accounts::run(&provider, &config, &mut stdout).await?;
        }
        Commands::Config => {
            // Chain is known valid here; resolve_by_name already checked.
            let chain = ChainId::from_name(&cli.network)
                .ok_or_else(|| format!("unknown network: {}", cli.network))?;

            let view = serde_json::json!({
                "network": config,
                "project": resolver::project_settings(&store),
                "explorer_api_key_set": !resolver::explorer_api_key(chain, &store).is_empty(),
            });
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
    }

    Ok(())
}
