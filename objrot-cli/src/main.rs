/// objrot - rotate an OBJ mesh about the X, Y or Z axis
///
/// Usage:
///   objrot input.obj output.obj axis angle
///
/// Set RUST_LOG=info (or debug) for diagnostics on stderr.

use anyhow::{Context, Result};
use clap::Parser;
use objrot_cli::{report, run, Cli};
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match rotate_file(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let stderr = io::stderr();
            let styled = stderr.is_terminal();
            // Nothing sensible left to do if stderr itself is gone.
            let _ = report::print_error(&mut stderr.lock(), &format!("{err:#}"), styled);
            ExitCode::FAILURE
        }
    }
}

fn rotate_file(cli: &Cli) -> Result<()> {
    let report = run(cli)?;
    let stdout = io::stdout();
    let styled = stdout.is_terminal();
    report
        .print(&mut stdout.lock(), styled)
        .context("failed to print summary")?;
    Ok(())
}
