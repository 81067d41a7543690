//! Log output for embedders

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "LANGSWITCH_LOG";

/// Install a formatting subscriber filtered by `LANGSWITCH_LOG`
/// (default `info`).
///
/// Fails if a global subscriber is already installed.
#[cfg(feature = "tracing-subscriber")]
pub fn init_tracing() -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    init_with_filter(filter)
}

/// Install a formatting subscriber with an explicit filter directive.
#[cfg(feature = "tracing-subscriber")]
pub fn init_tracing_with_level(level: &str) -> Result<(), tracing_subscriber::util::TryInitError> {
    init_with_filter(tracing_subscriber::EnvFilter::new(level))
}

#[cfg(feature = "tracing-subscriber")]
fn init_with_filter(
    filter: tracing_subscriber::EnvFilter,
) -> Result<(), tracing_subscriber::util::TryInitError> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init()
}
