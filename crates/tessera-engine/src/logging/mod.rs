//! Logging utilities.
//!
//! The library only talks to the `log` facade. Hosts that want output call
//! [`init_logging`] once at startup; it installs `env_logger`.

mod init;

pub use init::{init_logging, LoggingConfig, FRAME_STATS_DIRECTIVE};