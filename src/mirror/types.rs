//! Mirror-node types and error definitions.

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while querying the mirror node.
#[derive(Debug, Error)]
pub enum MirrorError {
    /// Base URL could not be parsed.
    #[error("Invalid mirror node base URL '{url}': {reason}")]
    BaseUrl { url: String, reason: String },

    /// Transport-level failure (connect, TLS, body read).
    #[error("Mirror node request failed: {0}")]
    Http(String),

    /// The response body was not JSON at all.
    #[error("Mirror node returned a non-JSON body: {0}")]
    Parse(String),
}

/// Result type for mirror-node operations.
pub type MirrorResult<T> = Result<T, MirrorError>;

/// Token record as exposed by `/api/v1/tokens/{id}`.
///
/// Both fields are optional on purpose: before record files propagate to
/// the mirror node the endpoint answers without them (or with an error
/// body), and the workflow prints them as absent rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TokenInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub total_supply: Option<String>,
}
