//! Infrastructure layer for platform-specific utilities.
//!
//! This module groups the small pieces that touch the host environment:
//! filesystem locations for application data and the one-time terminal
//! background detection used to pick the initial theme.
//!
//! # Organization
//!
//! - [`paths`]: Data directory resolution and tilde expansion
//! - [`environment`]: Terminal background (dark/light) detection

pub mod environment;
pub mod paths;

pub use environment::prefers_dark;
pub use paths::{data_dir, expand_tilde};
