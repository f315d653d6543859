//! Diagnostic logging setup
//!
//! Events go to stderr through `tracing-subscriber`. The default filter only
//! lets warnings from this crate through; `RUST_LOG` overrides it.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "money_manager=warn";

/// Install the global subscriber; later calls are no-ops
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
