use std::process::ExitCode;

use clap::Parser;
use demo_mcp::cli::{Arguments, ExitStatus};

fn main() -> ExitCode {
    let args = Arguments::parse();

    if let Err(err) = demo_mcp::logging::init(&args.log_level) {
        eprintln!("Error: {}", err);
        return ExitStatus::Error.into();
    }

    match demo_mcp::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            tracing::error!(error = %err, "fatal");
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
