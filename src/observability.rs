use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "GIT_CHURN_LOG";
const DEFAULT_DIRECTIVE: &str = "warn";

/// Install the global stderr subscriber. The filter comes from `GIT_CHURN_LOG`
/// (e.g. `debug` or `git_churn::churn=trace`) and defaults to `warn`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
