//! Configuration subsystem.
//!
//! All credentials come from the process environment (optionally seeded from
//! a `.env` file by the binary). Loading is a fatal precondition check: any
//! missing value aborts the run before a single network call is made.

pub mod operator;

pub use operator::{ConfigError, OperatorConfig};
