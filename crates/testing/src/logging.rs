//! Test logging setup.

use once_cell::sync::OnceCell;
use tracing::Level;

/// Environment variable holding the log level for tests (`error` .. `trace`).
pub const LOG_LEVEL_ENV: &str = "MODHOST_LOG";

static INIT: OnceCell<()> = OnceCell::new();

/// Install a fmt subscriber that writes through the test harness.
///
/// Safe to call from every test; only the first call has an effect. The level
/// comes from `MODHOST_LOG` and defaults to `warn`.
pub fn init_logging() {
    INIT.get_or_init(|| {
        let level = std::env::var(LOG_LEVEL_ENV)
            .ok()
            .and_then(|v| v.parse::<Level>().ok())
            .unwrap_or(Level::WARN);
        // Another subscriber may already be installed by the test binary.
        let _ = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_test_writer()
            .try_init();
    });
}
