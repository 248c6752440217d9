//! Tracing/logging setup shared by binaries.
//!
//! Library crates only emit events; installing a subscriber is the job of the
//! process entry point.

/// Initialize process-wide logging with the default configuration
/// (JSON, `info`, overridable via `RUST_LOG`).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init_with(&tracing::LogConfig::default());
}

/// Tracing configuration (filters, formats).
pub mod tracing;

pub use self::tracing::{LogConfig, LogFormat, ParseLogFormatError, init_with};
