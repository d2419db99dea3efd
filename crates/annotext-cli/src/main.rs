//! Command-line entrypoint for annotext.

use std::process::ExitCode;

fn main() -> ExitCode {
    annotext_cli::main_entry()
}
