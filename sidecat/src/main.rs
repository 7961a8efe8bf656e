//! CLI entry point: print the `example.txt` next to the running binary.
//!
//! The runtime directory comes from argument zero, so it reflects how the
//! program was invoked rather than any installation manifest.

use std::ffi::OsString;
use std::io::{stderr, stdout};

use anyhow::{Context, Result};
use clap::Parser;

use sidecat::exit_codes;
use sidecat::io::printer::PrintOutcome;
use sidecat::logging;
use sidecat::print::print_sidecar;

#[derive(Parser)]
#[command(
    name = "sidecat",
    version,
    about = "Print the example.txt stored next to the running binary"
)]
struct Cli {
    /// Extra arguments are accepted and ignored.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    rest: Vec<OsString>,
}

fn main() {
    logging::init();
    let _cli = Cli::parse();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let invocation = std::env::args_os().next().context("missing argument zero")?;
    let invocation = invocation
        .to_str()
        .context("invocation path is not valid UTF-8")?;

    let outcome = print_sidecar(invocation, &mut stdout().lock(), &mut stderr().lock())?;
    Ok(match outcome {
        PrintOutcome::Printed => exit_codes::OK,
        PrintOutcome::OpenFailed => exit_codes::OPEN_FAILED,
    })
}
