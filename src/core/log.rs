use anyhow::{Result, anyhow};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, filter::Targets, fmt, prelude::__tracing_subscriber_SubscriberExt,
    util::SubscriberInitExt,
};

const APP_TARGET: &str = "fundlens";

/// Chooses the level for this crate's own target.
///
/// `--verbose` turns on debug output. Without it the crate stays silent
/// unless `RUST_LOG` is set, in which case `RUST_LOG` alone decides.
fn app_level(verbose: bool, env_configured: bool) -> LevelFilter {
    match (verbose, env_configured) {
        (true, _) => LevelFilter::DEBUG,
        (false, true) => LevelFilter::TRACE,
        (false, false) => LevelFilter::OFF,
    }
}

/// Installs the global subscriber.
pub fn init_logging(verbose: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().ok();
    let app_level = app_level(verbose, env_filter.is_some());
    let app_filter = Targets::new()
        .with_target(APP_TARGET, app_level)
        .with_default(LevelFilter::TRACE);
    let env_filter = env_filter
        .unwrap_or_else(|| EnvFilter::new(app_level.to_string().to_lowercase()));

    tracing_subscriber::registry()
        .with(fmt::layer().pretty().without_time().with_target(verbose))
        .with(app_filter)
        .with(env_filter)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialise logging: {e}"))
}
