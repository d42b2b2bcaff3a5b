//! Actions representing side effects to be executed by the terminal host.
//!
//! This module defines the [`Action`] type, the imperative commands produced by
//! the event handler after processing user input. Actions bridge pure state
//! transformations and effectful operations the host performs, keeping the
//! library layer free of terminal concerns.
//!
//! In this system every browsing operation is an in-memory state change that
//! the next render reflects, so the only action left for the host is leaving
//! the event loop.

/// Commands representing side effects to be executed by the terminal host.
///
/// Produced by the event handler and executed by `main.rs` after state
/// mutation completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leaves the event loop, restores the terminal, and exits.
    ///
    /// Sent when the user explicitly quits (pressing 'q' in browse mode).
    Quit,
}
