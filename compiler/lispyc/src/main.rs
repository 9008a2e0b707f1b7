//! Lispy command-line driver.

use std::process::ExitCode;

use lispy_eval::SourceError;
use lispyc::cli::{parse_args, print_usage, Command};
use lispyc::run::{run, DriverError};
use lispyc::tracing_setup::init_tracing;

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(Command::Run(options)) => options,
        Ok(Command::Help) => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        Ok(Command::Version) => {
            println!("lispy {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("Run 'lispy --help' for usage.");
            return ExitCode::from(2);
        }
    };

    match run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        // Already rendered with its source snippet.
        Err(DriverError::Source {
            error: SourceError::Parse(_),
            ..
        }) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
