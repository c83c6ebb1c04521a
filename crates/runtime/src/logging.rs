//! Tracing subscriber setup for hosts.

use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "info";

/// Installs a stderr fmt subscriber filtered by `RUST_LOG`. Falls back to
/// `info` when the variable is unset or does not parse. Returns false when a
/// global subscriber is already set.
pub fn init() -> bool {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(filter(directives.as_deref()))
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

fn filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}
