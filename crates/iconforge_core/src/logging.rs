//! Structured logging setup for the command-line run.
//!
//! Console-only `tracing` output with an environment filter; filter
//! priority is ICONFORGE_LOG, then RUST_LOG, then a build-type default.
//! A one-shot generator has no use for rotating log files, so there is no
//! file appender.

use tracing_subscriber::EnvFilter;

/// Initialize stdout logging with the default filter chain.
pub fn init_logging() {
    init_logging_with_filter(None);
}

/// Initialize stdout logging with an optional custom filter.
pub fn init_logging_with_filter(filter: Option<&str>) {
    let env_filter = build_env_filter(filter);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(atty::is(atty::Stream::Stdout))
        .with_target(false)
        .with_thread_ids(false)
        .init();
}

/// Build the environment filter from the custom filter or env/defaults.
fn build_env_filter(custom_filter: Option<&str>) -> EnvFilter {
    if let Some(filter) = custom_filter {
        return EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(default_log_filter()));
    }

    EnvFilter::try_from_env("ICONFORGE_LOG")
        .or_else(|_| EnvFilter::try_from_env("RUST_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(default_log_filter()))
}

/// Get the default log filter based on build type.
pub fn default_log_filter() -> &'static str {
    #[cfg(debug_assertions)]
    {
        "debug"
    }
    #[cfg(not(debug_assertions))]
    {
        "info"
    }
}
