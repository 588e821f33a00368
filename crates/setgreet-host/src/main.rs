//! Entry point for the `setgreet-host` harness.

use std::io;
use std::process::ExitCode;

use setgreet_host::{SystemConfigLoader, run_with};

fn main() -> ExitCode {
    let stdin = io::stdin();
    match run_with(&SystemConfigLoader, stdin.lock(), io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("setgreet-host: {error}");
            ExitCode::FAILURE
        }
    }
}
