//! Tracing setup
//!
//! Log output goes to stderr so it never mixes with exported data written to
//! stdout. The filter comes from `TALLY_LOG` and defaults to errors only.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter directives
pub const LOG_ENV: &str = "TALLY_LOG";

const DEFAULT_DIRECTIVE: &str = "tally=error";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber; later calls are no-ops.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        // A subscriber installed elsewhere (e.g. by a test harness) wins.
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
