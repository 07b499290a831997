//! Debug tracing infrastructure for development diagnostics
//!
//! The engine emits `tracing` events from every mutation path:
//! - `debug` for applied edits, undo/redo steps, and condense/uncondense
//! - `trace` for run splits and history coalescing
//! - `warn` for rejected or suspicious input
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=cardmark::format=trace` - module-level filtering

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize a console tracing subscriber
///
/// Respects RUST_LOG, defaulting to `warn`. Intended for binaries and
/// manual debugging; a second call is a no-op.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let _ = tracing_subscriber::registry().with(console_layer).try_init();
}
