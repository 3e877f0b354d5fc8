//! Mirror-node REST verification.
//!
//! The mirror node is a read-only replica, eventually consistent with the
//! primary ledger. The workflow performs exactly one GET against it after a
//! fixed propagation wait; absent fields are data, not errors.

pub mod client;
pub mod types;

pub use client::{MirrorClient, TESTNET_MIRROR_BASE};
pub use types::{MirrorError, MirrorResult, TokenInfo};
