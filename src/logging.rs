use crate::settings::{AppSettings, DEFAULT_LOG_FILTER};
use tracing_subscriber::EnvFilter;

/// Route `log` records to stderr so they never mix with the report on stdout.
pub fn init(settings: &AppSettings) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(&settings.log_filter).unwrap_or_else(|e| {
        eprintln!("Ignoring invalid log filter {:?}: {e}", settings.log_filter);
        EnvFilter::new(DEFAULT_LOG_FILTER)
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .without_time()
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}
