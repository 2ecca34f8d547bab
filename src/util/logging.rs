// Linkfolio - util/logging.rs
//
// Structured logging setup for the host application shell.
//
// Activation:
//   - Environment variable: RUST_LOG=debug (or trace)
//   - Explicit level from the embedding shell
//
// Output: stderr. Never logs profile field contents at any level; log
// records carry ids and paths only.

use tracing_subscriber::EnvFilter;

/// Initialise the logging subsystem.
///
/// `level` is an explicit level requested by the embedding shell.
///
/// Priority: RUST_LOG env var > explicit level > default "info".
/// A subscriber already installed by the host wins; this is a no-op then.
pub fn init(level: Option<&str>) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        // RUST_LOG takes highest priority (already set)
        EnvFilter::from_default_env()
    } else if let Some(level) = level {
        EnvFilter::new(level)
    } else {
        EnvFilter::new(super::constants::DEFAULT_LOG_LEVEL)
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(
            app = super::constants::APP_NAME,
            version = super::constants::APP_VERSION,
            "Logging initialised"
        );
    }
}
