//! Tool configuration parsed from environment variables.
//!
//! Settings can be overridden via environment variables prefixed with
//! `ANNOTEXT_` and, where a flag exists, on the command line.

use std::env;
use std::str::FromStr;

use annotext::TrimPolicy;

use crate::error::CliError;

/// Environment variable selecting the log level.
pub const LOG_LEVEL_ENV: &str = "ANNOTEXT_LOG_LEVEL";

/// Log level enumeration matching tracing crate levels.
///
/// Defaults to `Warn` so diagnostics stay off stderr unless requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Most verbose logging, including per-term parser events.
    Trace,
    /// Query parsing and match outcomes.
    Debug,
    /// Informational messages such as loaded document sizes.
    Info,
    /// Warning messages for potentially problematic situations.
    #[default]
    Warn,
    /// Error messages for failures.
    Error,
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(CliError::InvalidConfig(format!(
                "unknown log level '{s}', expected one of: trace, debug, info, warn, error"
            ))),
        }
    }
}

impl LogLevel {
    /// Convert to a tracing filter directive string.
    #[must_use]
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Configuration for a single invocation.
///
/// # Environment Variables
///
/// - `ANNOTEXT_LOG_LEVEL`: log level (trace, debug, info, warn, error)
/// - `ANNOTEXT_TRIM_TERMS`: whether query segments are trimmed (see
///   [`annotext::config`])
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log level written to stderr.
    pub log_level: LogLevel,
    /// Whitespace policy for filter queries.
    pub trim_policy: TrimPolicy,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Falls back to defaults for missing values.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` if `ANNOTEXT_LOG_LEVEL` holds an
    /// unknown level.
    pub fn from_env() -> Result<Self, CliError> {
        let log_level = match env::var(LOG_LEVEL_ENV) {
            Ok(val) => val.parse()?,
            Err(_) => LogLevel::default(),
        };

        Ok(Self {
            log_level,
            trim_policy: annotext::config::trim_policy(),
        })
    }

    /// Apply optional command-line overrides on top of environment values.
    #[must_use]
    pub fn apply_overrides(mut self, log_level: Option<LogLevel>, verbatim: bool) -> Self {
        if let Some(level) = log_level {
            self.log_level = level;
        }

        if verbatim {
            self.trim_policy = TrimPolicy::Verbatim;
        }

        self
    }

    /// Create a new configuration with the specified log level.
    #[must_use]
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }
}
