//! Diagnostic sink for the injected library.
//!
//! Nothing initializes `tracing` inside a target process, so the first `Load`
//! installs a stderr subscriber. A subscriber the host already set is kept.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the `EnvFilter` directive for the library.
pub const LOG_ENV: &str = "CALCULATOR_LOG";

const DEFAULT_DIRECTIVE: &str = "info";

static INIT: Once = Once::new();

pub fn ensure_sink() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        let installed = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .try_init()
            .is_ok();

        if !installed {
            tracing::debug!("host subscriber already installed, keeping it");
        }
    });
}
