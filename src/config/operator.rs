//! Operator identity loaded from the environment.
//!
//! # Security
//! - The private key is read ONLY from environment variables
//! - Keys are never logged or serialized

use std::fmt;

use thiserror::Error;

/// Environment variable holding the operator's display name.
pub const YOUR_NAME_ENV_VAR: &str = "YOUR_NAME";
/// Environment variable holding the operator account id (`0.0.x`).
pub const OPERATOR_ID_ENV_VAR: &str = "OPERATOR_ACCOUNT_ID";
/// Environment variable holding the operator's ECDSA private key.
pub const OPERATOR_KEY_ENV_VAR: &str = "OPERATOR_ACCOUNT_PRIVATE_KEY";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is absent or empty.
    #[error("Environment variable {0} not set")]
    MissingVar(&'static str),
}

/// The account identity that pays fees and signs the transaction.
///
/// Values are kept as the raw configuration strings; parsing into SDK
/// credential types happens when the ledger client is constructed.
#[derive(Clone)]
pub struct OperatorConfig {
    /// Human name used in the token name and memo.
    pub display_name: String,
    /// Account id string, e.g. `0.0.12345`.
    pub account_id: String,
    /// ECDSA private key string.
    pub private_key: String,
}

impl OperatorConfig {
    /// Load the operator identity from the environment.
    ///
    /// Fails fast with the name of the first missing variable; empty values
    /// count as missing.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            env_value(YOUR_NAME_ENV_VAR),
            env_value(OPERATOR_ID_ENV_VAR),
            env_value(OPERATOR_KEY_ENV_VAR),
        )
    }

    /// Build a config from explicit values.
    pub fn from_values(
        display_name: Option<String>,
        account_id: Option<String>,
        private_key: Option<String>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            display_name: display_name.ok_or(ConfigError::MissingVar(YOUR_NAME_ENV_VAR))?,
            account_id: account_id.ok_or(ConfigError::MissingVar(OPERATOR_ID_ENV_VAR))?,
            private_key: private_key.ok_or(ConfigError::MissingVar(OPERATOR_KEY_ENV_VAR))?,
        })
    }
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

impl fmt::Debug for OperatorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperatorConfig")
            .field("display_name", &self.display_name)
            .field("account_id", &self.account_id)
            .field("private_key", &"<redacted>")
            .finish()
    }
}
