//! The tutorial workflow: create, link, verify.
//!
//! Strictly sequential. Every network call is awaited before the next step;
//! the only timing construct is one fixed sleep that lets record files reach
//! the mirror node. The ledger connection is closed exactly once, whether
//! the run succeeds or fails partway.

use std::time::Duration;

use thiserror::Error;

use crate::config::OperatorConfig;
use crate::explorer;
use crate::ledger::{LedgerError, TokenLedger, TokenSpec};
use crate::mirror::{MirrorClient, MirrorError};

/// Errors that abort the workflow.
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Mirror(#[from] MirrorError),
}

/// Result type for workflow runs.
pub type WorkflowResult<T> = Result<T, WorkflowError>;

/// Default wait before the mirror read; exceeds typical record-file
/// propagation to mirror nodes.
pub const DEFAULT_MIRROR_WAIT_SECS: u64 = 6;

/// Knobs the CLI exposes; defaults match the tutorial.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Fixed wait before the single mirror-node read.
    pub mirror_wait: Duration,
    /// Create the token and print the explorer link only.
    pub skip_mirror: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            mirror_wait: Duration::from_secs(DEFAULT_MIRROR_WAIT_SECS),
            skip_mirror: false,
        }
    }
}

/// Everything the run printed, for callers and assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub transaction_id: String,
    pub token_id: String,
    pub explorer_url: String,
    pub mirror_url: Option<String>,
    pub token_name: Option<String>,
    pub total_supply: Option<String>,
}

/// Run the full workflow, then release the ledger connection.
///
/// Takes ownership of the ledger so that `close` runs exactly once on both
/// the success and failure paths.
pub async fn run<L: TokenLedger>(
    ledger: L,
    mirror: &MirrorClient,
    operator: &OperatorConfig,
    options: &RunOptions,
) -> WorkflowResult<RunSummary> {
    let result = drive(&ledger, mirror, operator, options).await;
    ledger.close();
    result
}

async fn drive<L: TokenLedger>(
    ledger: &L,
    mirror: &MirrorClient,
    operator: &OperatorConfig,
    options: &RunOptions,
) -> WorkflowResult<RunSummary> {
    tracing::info!("Creating new HTS token");
    let spec = TokenSpec::fungible_for(&operator.display_name);
    let outcome = ledger.create_token(&spec).await?;

    println!("The token create transaction ID: {}", outcome.transaction_id);
    println!("tokenId: {}", outcome.token_id);
    println!();

    tracing::info!("View the token on HashScan");
    let explorer_url = explorer::token_url(&outcome.token_id);
    println!("Paste URL in browser: {explorer_url}");
    println!();

    if options.skip_mirror {
        return Ok(RunSummary {
            transaction_id: outcome.transaction_id,
            token_id: outcome.token_id,
            explorer_url,
            mirror_url: None,
            token_name: None,
            total_supply: None,
        });
    }

    // One fixed wait for record files to propagate; no poll loop
    tokio::time::sleep(options.mirror_wait).await;

    tracing::info!("Get token data from the Hedera Mirror Node");
    let mirror_url = mirror.token_url(&outcome.token_id);
    println!("The token Hedera Mirror Node API URL:\n{mirror_url}");

    let info = mirror.fetch_token(&outcome.token_id).await?;
    println!(
        "The name of this token: {}",
        display_or_absent(info.name.as_deref())
    );
    println!(
        "The total supply of this token: {}",
        display_or_absent(info.total_supply.as_deref())
    );
    println!();

    Ok(RunSummary {
        transaction_id: outcome.transaction_id,
        token_id: outcome.token_id,
        explorer_url,
        mirror_url: Some(mirror_url),
        token_name: info.name,
        total_supply: info.total_supply,
    })
}

fn display_or_absent(value: Option<&str>) -> &str {
    value.unwrap_or("(not yet available)")
}
