//! `ts2xl` command-line tool
//!
//! Converts a Table Schema into an Excel template with column validation.

use std::process::ExitCode;

use template_service::cli;

fn main() -> ExitCode {
    let code = cli::main_with_args(std::env::args_os());
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
