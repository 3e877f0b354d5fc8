//! Create and verify a fungible token on the Hedera testnet.
//!
//! # Workflow
//! ```text
//! .env / environment
//!     → config    (operator name, account id, ECDSA private key)
//!     → ledger    (freeze, sign, submit TokenCreateTransaction; receipt)
//!     → explorer  (HashScan URL for manual verification)
//!     → mirror    (one REST read after a fixed propagation wait)
//! ```
//!
//! Everything cryptographic — signing, fee handling, consensus submission,
//! receipt polling — is delegated to the `hedera` SDK and the network. The
//! crate's own job is the sequencing, the operator-facing output, and the
//! guarantee that the client connection is released exactly once.

pub mod config;
pub mod explorer;
pub mod ledger;
pub mod mirror;
pub mod observability;
pub mod workflow;

pub use config::OperatorConfig;
pub use ledger::{HederaLedger, TokenLedger, TokenSpec};
pub use mirror::MirrorClient;
pub use workflow::{RunOptions, RunSummary};
