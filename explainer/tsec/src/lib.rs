//! TypeScript Error Explainer
//!
//! Library half of the `tse` binary: command handlers and the `tsc` log
//! parser. The pipeline is stateless request/response — build the catalog,
//! look the diagnostic up, render the explanation in the chosen format.

use std::sync::Once;

pub mod commands;
pub mod tsc_log;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=tsec=debug` or `RUST_LOG=tsec=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
