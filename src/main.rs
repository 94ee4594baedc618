//! yoink - Keyboard-driven file and content finder

use std::env;
use std::process::ExitCode;

use yoink::app::{self, Config};
use yoink::error::YoinkError;
use yoink::integrate::{check_dependencies, exit_code, signal};
use yoink::logging;

fn main() -> ExitCode {
    // Parse config first to return INVALID exit code for argument errors
    let config = match Config::from_args() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(exit_code::INVALID as u8);
        }
    };

    logging::init();

    if let Err(e) = signal::install() {
        tracing::warn!(error = %e, "interrupt handler not installed");
    }

    // Every missing tool is reported before any UI appears
    let toolchain = match check_dependencies() {
        Ok(t) => t,
        Err(YoinkError::MissingDependencies(missing)) => {
            eprintln!("Error: missing binary dependencies: {}", missing.join(", "));
            eprintln!("Install them and make sure they are on PATH.");
            return ExitCode::from(exit_code::ERROR as u8);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(exit_code::ERROR as u8);
        }
    };

    let cwd = match env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Error: cannot read working directory: {}", e);
            return ExitCode::from(exit_code::ERROR as u8);
        }
    };

    match app::run(config, &toolchain, cwd) {
        Ok(result) => ExitCode::from(result.exit_code() as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(exit_code::ERROR as u8)
        }
    }
}
