//! Tracing initialization.
//!
//! The library itself only emits through `tracing` macros; host applications
//! own the subscriber. [`init_tracing`] is a convenience for binaries and
//! integration harnesses that want a sensible default pipeline.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs a formatted stderr subscriber filtered by `level`.
///
/// # Parameters
///
/// * `level` - Default filter directive, overridden by `RUST_LOG` when set
///
/// # Initialization Behavior
///
/// Idempotent: safe to call multiple times, only the first call takes effect.
///
/// # Example
///
/// ```rust
/// huddle_core::observability::init_tracing("debug");
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
