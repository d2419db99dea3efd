//! Structured logging for the command-line tool.
//!
//! Logs go to stderr so stdout carries only command output. Records emitted
//! by the library crates through the `log` facade are forwarded to the same
//! subscriber.

use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;

fn filter_from_config(config: &CliConfig) -> EnvFilter {
    EnvFilter::new(config.log_level.as_filter_str())
}

/// Initialise the logging subsystem based on configuration.
///
/// Log level precedence (highest to lowest):
///
/// 1. CLI `--log-level`
/// 2. `ANNOTEXT_LOG_LEVEL`
/// 3. Default configuration value
///
/// If a global subscriber is already set the call is a no-op.
pub fn init_logging(config: &CliConfig) {
    // The first subscriber wins; later initialisation attempts are expected in tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_from_config(config))
        .with_writer(std::io::stderr)
        .with_target(true)
        .without_time()
        .try_init();
}
