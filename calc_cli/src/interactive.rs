//! Prompt-driven mode: ask for the three figures, show the result, repeat.

use std::io::{BufRead, Write};

use anyhow::Context;
use calc_core::calculations::{BreakEvenInput, Calculation};

use crate::render::{render_json, render_text};

/// Read one line after printing `prompt`. `None` at end of input.
fn prompt_line<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> anyhow::Result<Option<String>> {
    write!(out, "{}", prompt).context("failed to write prompt")?;
    out.flush().context("failed to flush stdout")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Run the prompt loop until the user declines another calculation or
/// input ends. Returns how many calculations were performed.
pub fn run<R: BufRead, W: Write>(input: &mut R, out: &mut W, json: bool) -> anyhow::Result<usize> {
    if !json {
        writeln!(out, "Break-Even Point Analysis")?;
        writeln!(out, "=========================")?;
        writeln!(out, "Enter your business costs to find the point where revenue equals total costs.")?;
        writeln!(out)?;
    }

    let mut count = 0;
    loop {
        let Some(fixed) = prompt_line(input, out, "Total Fixed Costs ($): ")? else {
            break;
        };
        let Some(price) = prompt_line(input, out, "Selling Price / Unit ($): ")? else {
            break;
        };
        let Some(variable) = prompt_line(input, out, "Variable Costs / Unit ($): ")? else {
            break;
        };

        let calc = Calculation::BreakEven {
            input: BreakEvenInput::from_text(&fixed, &price, &variable),
        };
        let outcome = calc.run();
        count += 1;
        match &outcome {
            Ok(_) => tracing::info!(calculation = count, "break-even calculated"),
            Err(e) => tracing::info!(calculation = count, code = e.error_code(), "input rejected"),
        }

        writeln!(out)?;
        if json {
            writeln!(out, "{}", render_json(&outcome)?)?;
        } else {
            write!(out, "{}", render_text(&outcome))?;
        }
        writeln!(out)?;

        match prompt_line(input, out, "Calculate again? [y/N]: ")? {
            Some(answer) if answer.trim().eq_ignore_ascii_case("y") => writeln!(out)?,
            _ => break,
        }
    }

    Ok(count)
}
