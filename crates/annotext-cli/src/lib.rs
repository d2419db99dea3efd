//! Command-line access to annotated-text documents.
//!
//! This library powers the `annotext` command. Documents are read as JSON,
//! then listed or tested against filter queries such as
//! `"Nice/Location, attack"`.

mod cli;
pub mod config;
pub mod error;
pub mod logging;
mod output;

use std::process::ExitCode;

use cli::Outcome;

/// Exit status when a filter finds no matching tag.
pub const EXIT_NO_MATCH: u8 = 1;

/// Exit status for configuration, input and strict-query errors.
pub const EXIT_FAILURE: u8 = 2;

/// Parse arguments, run the selected command and map the result to an exit
/// status.
#[must_use]
pub fn main_entry() -> ExitCode {
    match cli::run() {
        Ok(Outcome::Success) => ExitCode::SUCCESS,
        Ok(Outcome::NoMatch) => ExitCode::from(EXIT_NO_MATCH),
        Err(err) => {
            report(&err);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

/// Write the error chain to stderr as a single line.
fn report(err: &eyre::Report) {
    use std::io::Write;

    let stderr = std::io::stderr();
    let mut handle = stderr.lock();
    let _ = writeln!(handle, "error: {err:#}");
}
