//! Text and JSON rendering of calculation outcomes.
//!
//! The error text is always the calculator's own message, shown verbatim.

use anyhow::Context;
use calc_core::calculations::{BreakEvenResult, CalculationOutput, TargetProfitResult, VolumeProjection};
use calc_core::{CalcError, CalcResult};

use crate::format::{format_currency, format_unit_delta, format_units};
use crate::pages::Page;

const RULE: &str = "═══════════════════════════════════════";

/// Render an outcome as human-readable text.
pub fn render_text(outcome: &CalcResult<CalculationOutput>) -> String {
    match outcome {
        Ok(CalculationOutput::BreakEven(r)) => break_even_text(r),
        Ok(CalculationOutput::TargetProfit(r)) => target_profit_text(r),
        Ok(CalculationOutput::ProfitAtVolume(r)) => projection_text(r),
        Err(e) => error_text(e),
    }
}

/// Render an outcome as pretty-printed JSON.
///
/// Successes serialize as the tagged output; errors as `{ "code", "error" }`.
pub fn render_json(outcome: &CalcResult<CalculationOutput>) -> anyhow::Result<String> {
    let json = match outcome {
        Ok(output) => serde_json::to_string_pretty(output),
        Err(e) => serde_json::to_string_pretty(&e.report()),
    };
    json.context("failed to encode result as JSON")
}

/// Render a static page with its title.
pub fn render_page(page: Page) -> String {
    format!("{}\n{}\n\n{}\n", page.title(), "─".repeat(page.title().chars().count()), page.body())
}

fn break_even_text(r: &BreakEvenResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n  YOUR RESULTS\n{}\n", RULE, RULE));
    out.push_str(&format!(
        "  BEP (Units):          {}  units to sell\n",
        format_units(r.break_even_units)
    ));
    out.push_str(&format!(
        "  BEP (Revenue):        {}  in total sales\n",
        format_currency(r.break_even_revenue)
    ));
    out.push_str(&format!(
        "  Contribution Margin:  {}  profit per unit\n",
        format_currency(r.contribution_margin_per_unit)
    ));
    out.push_str(RULE);
    out.push('\n');
    out
}

fn target_profit_text(r: &TargetProfitResult) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n  TARGET PROFIT: {}\n{}\n",
        RULE,
        format_currency(r.target_profit),
        RULE
    ));
    out.push_str(&format!(
        "  Units Required:       {}\n",
        format_units(r.required_units)
    ));
    out.push_str(&format!(
        "  Revenue Required:     {}\n",
        format_currency(r.required_revenue)
    ));
    out.push_str(&format!(
        "  Contribution Margin:  {}  profit per unit\n",
        format_currency(r.contribution_margin_per_unit)
    ));
    out.push_str(RULE);
    out.push('\n');
    out
}

fn projection_text(r: &VolumeProjection) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n  PROJECTION AT {} UNITS\n{}\n",
        RULE,
        format_units(r.units_sold),
        RULE
    ));
    out.push_str(&format!("  Revenue:              {}\n", format_currency(r.revenue)));
    out.push_str(&format!("  Total Costs:          {}\n", format_currency(r.total_costs)));
    out.push_str(&format!(
        "  Profit:               {}  [{}]\n",
        format_currency(r.profit),
        if r.is_profitable() { "PROFIT" } else if r.profit == 0.0 { "BREAK-EVEN" } else { "LOSS" }
    ));
    out.push_str(&format!(
        "  Margin of Safety:     {} units\n",
        format_unit_delta(r.margin_of_safety_units)
    ));
    out.push_str(RULE);
    out.push('\n');
    out
}

fn error_text(e: &CalcError) -> String {
    format!("Error: {}\n", e)
}
