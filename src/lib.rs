//! Application state core for a cryptocurrency wallet UI.
//!
//! This crate owns the vocabulary of state-transition events (actions), the
//! state container and reducer that apply them, an async dispatch loop, and
//! an append-only action journal that can replay a recorded session.
//! Rendering, wallet cryptography, and network calls belong to the embedding
//! application; handlers there construct actions and send them through a
//! [`store::dispatch::DispatchHandle`].

pub mod config;
pub mod journal;
pub mod store;

use tracing_subscriber::EnvFilter;

/// Install a global tracing subscriber reading `RUST_LOG` (default `info`).
///
/// Meant for binaries and integration tests embedding this crate; installing
/// a second subscriber returns an error.
pub fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}
