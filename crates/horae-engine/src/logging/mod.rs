//! Logging utilities.
//!
//! Centralizes logger initialization behind the `log` facade so binaries get
//! consistent output without each wiring up a backend themselves.

mod init;

pub use init::{init_logging, LoggingConfig};
