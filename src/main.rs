use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;

use token_launch::config::OperatorConfig;
use token_launch::ledger::HederaLedger;
use token_launch::mirror::{MirrorClient, TESTNET_MIRROR_BASE};
use token_launch::observability::logging;
use token_launch::workflow::{self, RunOptions, DEFAULT_MIRROR_WAIT_SECS};

#[derive(Parser)]
#[command(name = "token-launch")]
#[command(
    about = "Create a fungible token on the Hedera testnet and verify it",
    long_about = None
)]
struct Cli {
    /// Path to a .env file holding the operator credentials
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Seconds to wait before querying the mirror node
    #[arg(long, default_value_t = DEFAULT_MIRROR_WAIT_SECS)]
    mirror_wait_secs: u64,

    /// Mirror node REST base URL
    #[arg(long, default_value = TESTNET_MIRROR_BASE)]
    mirror_url: String,

    /// Create the token and print the explorer link, skipping the mirror read
    #[arg(long)]
    skip_mirror: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init();

    // Seed the environment before any variable is read
    match cli.env_file.as_deref() {
        Some(path) => {
            if let Err(e) = dotenvy::from_path(path) {
                eprintln!("Error: could not read {}: {e}", path.display());
                return ExitCode::FAILURE;
            }
        }
        None => {
            dotenvy::dotenv().ok();
        }
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let operator = OperatorConfig::from_env()?;
    tracing::info!(
        account_id = %operator.account_id,
        display_name = %operator.display_name,
        "Configuration loaded"
    );

    let mirror = MirrorClient::new(&cli.mirror_url)?;
    let options = RunOptions {
        mirror_wait: Duration::from_secs(cli.mirror_wait_secs),
        skip_mirror: cli.skip_mirror,
    };

    // The ledger must be the last fallible construction: once it exists,
    // the workflow owns it and closes it on every exit path
    let ledger = HederaLedger::for_testnet(&operator)?;

    workflow::run(ledger, &mirror, &operator, &options).await?;
    Ok(())
}
