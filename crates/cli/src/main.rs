//! Finds the local minimum of a two-variable function closest to a start.
//!
//! Run:
//! ```bash
//! $ gradwalk -h
//! ```
//! to see which surfaces and settings can be chosen.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use yansi::Paint;

use gradwalk_cli::{Args, Report, Settings, run};

/// Exit status when every start diverged.
const DIVERGED: u8 = 2;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // Help and version go to stdout and are not failures.
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if args.no_color || !io::stdout().is_terminal() {
        Paint::disable();
    }

    match try_main(&args) {
        Ok(report) if report.all_diverged() => ExitCode::from(DIVERGED),
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", Paint::red("error:").bold());
            ExitCode::FAILURE
        }
    }
}

fn try_main(args: &Args) -> Result<Report> {
    let settings = Settings::resolve(args)?;
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    run(&settings, &mut out)
}
