//! Ledger integration subsystem.
//!
//! # Data Flow
//! ```text
//! Environment variables (operator id, private key)
//!     → config (credential strings)
//!     → client.rs (SDK client: freeze, sign, submit, receipt)
//!     → workflow (sequencing and operator-facing output)
//! ```
//!
//! # Security Constraints
//! - Private keys ONLY from environment variables
//! - Never log private keys or sensitive data
//! - Signing, fee handling, and consensus submission are delegated to the SDK

pub mod client;
pub mod token;
pub mod types;

pub use client::{HederaLedger, TokenLedger};
pub use token::TokenSpec;
pub use types::{LedgerError, LedgerResult, TokenCreateOutcome};
