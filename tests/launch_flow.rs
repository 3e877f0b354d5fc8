//! End-to-end run of the launch workflow against a mock ledger and a mock
//! mirror node. The real Hedera client is never touched here; the ledger
//! seam is exercised through the same trait the binary uses.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use httpmock::prelude::*;

use token_launch::config::OperatorConfig;
use token_launch::ledger::{LedgerError, LedgerResult, TokenCreateOutcome, TokenLedger, TokenSpec};
use token_launch::mirror::MirrorClient;
use token_launch::workflow::{self, RunOptions};

struct ScriptedLedger {
    outcome: Option<TokenCreateOutcome>,
    closes: Arc<AtomicUsize>,
    seen_specs: Arc<std::sync::Mutex<Vec<TokenSpec>>>,
}

#[async_trait]
impl TokenLedger for ScriptedLedger {
    async fn create_token(&self, spec: &TokenSpec) -> LedgerResult<TokenCreateOutcome> {
        self.seen_specs.lock().unwrap().push(spec.clone());
        self.outcome
            .clone()
            .ok_or_else(|| LedgerError::Submit("TOKEN_HAS_NO_SUPPLY_KEY".to_string()))
    }

    fn close(&self) {
        self.closes.fetch_add(1, Ordering::SeqCst);
    }
}

fn operator() -> OperatorConfig {
    OperatorConfig::from_values(
        Some("Alice".to_string()),
        Some("0.0.12345".to_string()),
        Some("unused-in-tests".to_string()),
    )
    .unwrap()
}

#[tokio::test]
async fn launch_flow_creates_and_verifies() {
    let server = MockServer::start_async().await;
    let mirror_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/tokens/0.0.1234");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"name":"X coin","total_supply":"1000000"}"#);
        })
        .await;

    let closes = Arc::new(AtomicUsize::new(0));
    let seen_specs = Arc::new(std::sync::Mutex::new(Vec::new()));
    let ledger = ScriptedLedger {
        outcome: Some(TokenCreateOutcome {
            transaction_id: "0.0.12345@1700000000.000000001".to_string(),
            token_id: "0.0.1234".to_string(),
        }),
        closes: closes.clone(),
        seen_specs: seen_specs.clone(),
    };
    let mirror = MirrorClient::new(&server.base_url()).unwrap();
    let options = RunOptions {
        mirror_wait: Duration::from_secs(0),
        skip_mirror: false,
    };

    let summary = workflow::run(ledger, &mirror, &operator(), &options)
        .await
        .unwrap();

    mirror_mock.assert_async().await;
    assert_eq!(
        summary.transaction_id,
        "0.0.12345@1700000000.000000001"
    );
    assert_eq!(summary.token_id, "0.0.1234");
    assert_eq!(
        summary.explorer_url,
        "https://hashscan.io/testnet/token/0.0.1234"
    );
    assert_eq!(
        summary.mirror_url.as_deref(),
        Some(format!("{}/tokens/0.0.1234", server.base_url()).as_str())
    );
    assert_eq!(summary.token_name.as_deref(), Some("X coin"));
    assert_eq!(summary.total_supply.as_deref(), Some("1000000"));
    assert_eq!(closes.load(Ordering::SeqCst), 1);

    // The submitted request carried the tutorial's fixed fields
    let specs = seen_specs.lock().unwrap();
    assert_eq!(specs.len(), 1);
    assert_eq!(specs[0].name, "Alice coin");
    assert_eq!(specs[0].decimals, 2);
    assert_eq!(specs[0].initial_supply, 1_000_000);
    assert!(!specs[0].freeze_default);
}

#[tokio::test]
async fn launch_flow_propagation_miss_is_not_an_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/tokens/0.0.1234");
            then.status(404)
                .header("content-type", "application/json")
                .body(r#"{"_status":{"messages":[{"message":"Not found"}]}}"#);
        })
        .await;

    let ledger = ScriptedLedger {
        outcome: Some(TokenCreateOutcome {
            transaction_id: "0.0.12345@1700000000.000000001".to_string(),
            token_id: "0.0.1234".to_string(),
        }),
        closes: Arc::new(AtomicUsize::new(0)),
        seen_specs: Arc::new(std::sync::Mutex::new(Vec::new())),
    };
    let mirror = MirrorClient::new(&server.base_url()).unwrap();
    let options = RunOptions {
        mirror_wait: Duration::from_secs(0),
        skip_mirror: false,
    };

    let summary = workflow::run(ledger, &mirror, &operator(), &options)
        .await
        .unwrap();

    assert_eq!(summary.token_name, None);
    assert_eq!(summary.total_supply, None);
}

#[tokio::test]
async fn launch_flow_mirror_failure_still_closes_once() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/tokens/0.0.1234");
            then.status(502).body("Bad Gateway");
        })
        .await;

    let closes = Arc::new(AtomicUsize::new(0));
    let ledger = ScriptedLedger {
        outcome: Some(TokenCreateOutcome {
            transaction_id: "0.0.12345@1700000000.000000001".to_string(),
            token_id: "0.0.1234".to_string(),
        }),
        closes: closes.clone(),
        seen_specs: Arc::new(std::sync::Mutex::new(Vec::new())),
    };
    let mirror = MirrorClient::new(&server.base_url()).unwrap();
    let options = RunOptions {
        mirror_wait: Duration::from_secs(0),
        skip_mirror: false,
    };

    let result = workflow::run(ledger, &mirror, &operator(), &options).await;

    // A failure after submission still releases the connection exactly once
    assert!(result.is_err());
    assert_eq!(closes.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn launch_flow_rejection_closes_before_mirror() {
    let server = MockServer::start_async().await;
    let mirror_mock = server
        .mock_async(|_when, then| {
            then.status(200).body("{}");
        })
        .await;

    let closes = Arc::new(AtomicUsize::new(0));
    let ledger = ScriptedLedger {
        outcome: None,
        closes: closes.clone(),
        seen_specs: Arc::new(std::sync::Mutex::new(Vec::new())),
    };
    let mirror = MirrorClient::new(&server.base_url()).unwrap();
    let options = RunOptions {
        mirror_wait: Duration::from_secs(0),
        skip_mirror: false,
    };

    let result = workflow::run(ledger, &mirror, &operator(), &options).await;

    assert!(result.is_err());
    assert_eq!(closes.load(Ordering::SeqCst), 1);
    // The workflow aborted before the mirror step
    mirror_mock.assert_hits_async(0).await;
}
