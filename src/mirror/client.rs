//! Mirror-node REST client.
//!
//! # Responsibilities
//! - Build the token endpoint URL
//! - Issue one unauthenticated GET and parse the JSON body
//! - Treat missing fields as absent data, not failure

use url::Url;

use crate::mirror::types::{MirrorError, MirrorResult, TokenInfo};

/// Public testnet mirror-node REST base.
pub const TESTNET_MIRROR_BASE: &str = "https://testnet.mirrornode.hedera.com/api/v1";

/// Read-only client for the mirror-node REST API.
#[derive(Debug, Clone)]
pub struct MirrorClient {
    http: reqwest::Client,
    // Validated on construction, kept as a string so joined URLs print
    // exactly as configured
    base_url: String,
}

impl MirrorClient {
    /// Client against the public testnet mirror node.
    pub fn for_testnet() -> MirrorResult<Self> {
        Self::new(TESTNET_MIRROR_BASE)
    }

    /// Client against an arbitrary base URL (tests point this at a mock).
    ///
    /// Fails fast on anything that is not an `http`/`https` URL; a
    /// scheme-less string like `localhost:5551` parses, but with
    /// `localhost` as the scheme, and would otherwise only fail at
    /// request time.
    pub fn new(base_url: &str) -> MirrorResult<Self> {
        let trimmed = base_url.trim_end_matches('/');
        let parsed: Url = trimmed
            .parse()
            .map_err(|e: url::ParseError| MirrorError::BaseUrl {
                url: base_url.to_string(),
                reason: e.to_string(),
            })?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(MirrorError::BaseUrl {
                url: base_url.to_string(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        Ok(Self {
            http: reqwest::Client::new(),
            base_url: trimmed.to_string(),
        })
    }

    /// URL of the token record; also printed for manual verification.
    pub fn token_url(&self, token_id: &str) -> String {
        format!("{}/tokens/{}", self.base_url, token_id)
    }

    /// Fetch the token record once. No retry on miss.
    ///
    /// Any JSON body counts as an answer, whatever the status code: a
    /// pre-propagation 404 carries neither `name` nor `total_supply`, and
    /// those come back as `None`. Only transport failures and non-JSON
    /// bodies are errors.
    pub async fn fetch_token(&self, token_id: &str) -> MirrorResult<TokenInfo> {
        let url = self.token_url(token_id);
        tracing::debug!(url = %url, "Querying mirror node");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| MirrorError::Http(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| MirrorError::Http(e.to_string()))?;

        let info: TokenInfo = serde_json::from_str(&body)
            .map_err(|e| MirrorError::Parse(format!("status {status}: {e}")))?;

        tracing::debug!(
            status = %status,
            name = ?info.name,
            total_supply = ?info.total_supply,
            "Mirror node answered"
        );

        Ok(info)
    }
}
