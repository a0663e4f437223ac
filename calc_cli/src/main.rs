//! # Break-Even Calculator CLI
//!
//! Terminal front-end for `calc_core`. Converts typed values to numbers,
//! runs the calculation, and prints either the figures or the validation
//! message.
//!
//! ```text
//! breakeven calc -f 5000 -p 25 -c 10
//! breakeven target -f 5000 -p 25 -c 10 -t 2000
//! breakeven project -f 5000 -p 25 -c 10 -u 500 --json
//! breakeven page guide
//! breakeven            # interactive
//! ```
//!
//! Exit status: 0 on a result, 2 when the inputs are rejected, 1 on I/O errors.

mod cli;
mod format;
mod interactive;
mod logging;
mod pages;
mod render;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::render::{render_json, render_page, render_text};

const EXIT_INVALID_INPUT: u8 = 2;

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let command = cli.command.unwrap_or(Commands::Interactive);

    if let Commands::Page { page } = command {
        print!("{}", render_page(page));
        return Ok(ExitCode::SUCCESS);
    }

    let Some(calc) = command.calculation() else {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        let count = interactive::run(&mut stdin.lock(), &mut stdout, cli.json)?;
        tracing::debug!(count, "interactive session finished");
        return Ok(ExitCode::SUCCESS);
    };

    tracing::debug!(calc_type = calc.calc_type(), input = ?calc.input(), "running calculation");
    let outcome = calc.run();

    let rendered = if cli.json {
        let mut json = render_json(&outcome)?;
        json.push('\n');
        json
    } else {
        render_text(&outcome)
    };

    let mut stdout = io::stdout().lock();
    match &outcome {
        Ok(_) => {
            stdout.write_all(rendered.as_bytes()).context("failed to write result")?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            tracing::info!(code = e.error_code(), "inputs rejected");
            if cli.json {
                stdout.write_all(rendered.as_bytes()).context("failed to write result")?;
            } else {
                eprint!("{}", rendered);
            }
            Ok(ExitCode::from(EXIT_INVALID_INPUT))
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(cli.verbose, cli.log_filter.as_deref()) {
        eprintln!("Error: {:#}", e);
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "breakeven failed");
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
