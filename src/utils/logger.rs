use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initializes the global tracing subscriber.
///
/// The filter is taken from the `LOG_LEVEL` environment variable, falling
/// back to `RUST_LOG` and finally to `info`. Safe to call more than once;
/// only the first call installs a subscriber.
pub fn setup_logger() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("LOG_LEVEL")
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::fmt().with_env_filter(filter).init();
    });
}
