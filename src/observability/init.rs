//! Tracing initialization and subscriber setup.
//!
//! This module configures the tracing subscriber with a file-backed format
//! layer. The TUI owns stdout while it runs, so log output goes to a file
//! under the application data directory instead of the terminal.

use crate::Config;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber with file-based output.
///
/// Sets up a pipeline that:
/// 1. Filters events based on the configured log level
/// 2. Formats them without ANSI styling
/// 3. Appends to `bookcase.log` in the data directory
///
/// # Level Resolution
///
/// 1. `config.log_level` if set (an `env_filter` directive string)
/// 2. Default: `"info"`
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently does nothing if the directory or file cannot be created
///   (observability is optional)
/// - Idempotent: safe to call multiple times, only the first call takes effect
///
/// # Example
///
/// ```
/// use bookcase::observability::init_tracing;
/// use bookcase::Config;
///
/// let config = Config {
///     log_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config
        .log_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = crate::infrastructure::paths::data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let Ok(log_file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(data_dir.join("bookcase.log"))
    else {
        return;
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .with_target(true);

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(fmt_layer);

    let _ = subscriber.try_init();
}
