//! Observability layer: tracing setup.
//!
//! The browser instruments state transitions and loading with `tracing`
//! spans and events. This module wires those to a file-backed subscriber,
//! since the terminal itself is occupied by the UI.
//!
//! Logging is best-effort: if the log file cannot be created, the
//! application runs without it.

pub mod init;

pub use init::init_tracing;
