//! Ledger-side types and error definitions.

use thiserror::Error;

/// Errors that can occur while talking to the ledger.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Operator account id string could not be parsed.
    #[error("Invalid operator account id: {0}")]
    AccountId(String),

    /// Operator private key string could not be parsed as ECDSA.
    #[error("Invalid operator private key: {0}")]
    PrivateKey(String),

    /// Transaction could not be frozen against the client.
    #[error("Failed to freeze transaction: {0}")]
    Freeze(String),

    /// Submission to the network failed.
    #[error("Transaction submission failed: {0}")]
    Submit(String),

    /// Receipt retrieval failed, including on-network transaction failure.
    #[error("Receipt retrieval failed: {0}")]
    Receipt(String),

    /// The receipt came back without an assigned token id.
    #[error("Receipt did not contain a token id")]
    MissingTokenId,
}

/// Result type for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// What a successful token creation yields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenCreateOutcome {
    /// Transaction id assigned at submission, e.g. `0.0.12345@1700000000.000000001`.
    pub transaction_id: String,
    /// Token id extracted from the receipt, e.g. `0.0.1234`.
    pub token_id: String,
}
