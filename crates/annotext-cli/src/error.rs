//! Semantic error types for the command-line tool.

use annotext::QueryError;
use thiserror::Error;

/// Errors the command-line tool reports with a dedicated exit status.
#[derive(Debug, Error)]
pub enum CliError {
    /// An invalid configuration value was provided.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A query was rejected by the strict parser.
    #[error("invalid filter query: {0}")]
    InvalidQuery(#[from] QueryError),
}
