//! Command-line interface layer.
//!
//! ## Module Structure
//!
//! - `args`: clap argument definitions
//! - `exit_status`: process exit codes
//! - `run`: command dispatch

mod args;
mod exit_status;
mod run;

use anyhow::Result;

pub use args::{Arguments, CallArgs, Command, LOG_ENV, ReadArgs};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    run::run(args.command)
}
