//! Logging setup for the terminal front-end.
//!
//! Logs go to stderr so that `--json` output on stdout stays machine-readable.

use tracing_subscriber::EnvFilter;

/// Default filter directive for a `-v` count.
pub fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber.
///
/// An explicit `filter` (from `--log` or `BREAKEVEN_LOG`) takes precedence
/// over the `-v` count.
pub fn init_logging(verbose: u8, filter: Option<&str>) -> anyhow::Result<()> {
    let env_filter = match filter {
        Some(directives) => EnvFilter::try_new(directives)
            .map_err(|e| anyhow::anyhow!("invalid log filter '{}': {}", directives, e))?,
        None => EnvFilter::new(level_for(verbose)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise logging: {}", e))
}
