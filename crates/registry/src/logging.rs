//! Logging bootstrap for binaries and tests that use the registry
//!
//! The registry only emits `tracing` events; nothing is printed until a
//! subscriber is installed, either by the host application or by [`init`].

use teardown_core::constants::TEARDOWN_LOG_VAR;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a compact stderr subscriber as the global default.
///
/// The filter comes from `TEARDOWN_LOG`, then `RUST_LOG`, then `info`.
/// Fails if a global subscriber is already set.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let filter = EnvFilter::try_from_env(TEARDOWN_LOG_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .or_else(|_| EnvFilter::try_new("info"))?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .compact()
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

