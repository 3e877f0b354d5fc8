//! HashScan explorer links.
//!
//! Verification on the explorer is a manual step; this module only produces
//! the URL a human pastes into a browser. No network call is made.

const HASHSCAN_TESTNET_BASE: &str = "https://hashscan.io/testnet";

/// URL of the token page on HashScan for the testnet.
pub fn token_url(token_id: &str) -> String {
    format!("{HASHSCAN_TESTNET_BASE}/token/{token_id}")
}
