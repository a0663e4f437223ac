//! # Profit Planning
//!
//! Two single-scenario questions that build on the break-even figures:
//!
//! - **Target profit**: how many units must be sold to earn a given profit
//!   on top of covering fixed costs? `ceil((F + target) / CM)`
//! - **Volume projection**: what does the business earn at a given sales
//!   volume? `profit = n * P - (F + n * V)`
//!
//! Both run the break-even validation first, in the same order, so the same
//! bad input always produces the same error regardless of which question is
//! asked.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::break_even::BreakEvenInput;
//! use calc_core::calculations::profit::{profit_at_volume, units_for_target_profit};
//!
//! let input = BreakEvenInput::new(5000.0, 25.0, 10.0);
//!
//! // ($5,000 + $2,000) / $15 = 466.67 -> 467 units
//! let plan = units_for_target_profit(&input, 2000.0).unwrap();
//! assert_eq!(plan.required_units, 467);
//!
//! let projection = profit_at_volume(&input, 500).unwrap();
//! assert_eq!(projection.profit, 2500.0);
//! ```

use serde::{Deserialize, Serialize};

use super::break_even::{revenue_for, whole_units, BreakEvenInput};
use crate::errors::{CalcError, CalcResult};
use crate::input::NumericInput;

/// Units and revenue needed to reach a target profit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetProfitResult {
    /// Profit the plan was built for
    pub target_profit: f64,

    /// Whole units to sell to cover fixed costs plus the target
    pub required_units: u64,

    /// Revenue from selling `required_units`
    pub required_revenue: f64,

    /// Selling price minus variable cost, per unit
    pub contribution_margin_per_unit: f64,
}

/// Earnings at a fixed sales volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeProjection {
    pub units_sold: u64,
    pub revenue: f64,

    /// Fixed costs plus variable costs for every unit sold
    pub total_costs: f64,

    /// Revenue minus total costs; negative below break-even
    pub profit: f64,

    /// Units sold beyond the break-even volume; negative below it
    pub margin_of_safety_units: i64,
}

impl VolumeProjection {
    pub fn is_profitable(&self) -> bool {
        self.profit > 0.0
    }
}

/// Units needed to earn `target_profit` after covering fixed costs.
///
/// A target of zero gives the break-even volume.
///
/// # Errors
///
/// Break-even validation errors first, then
/// [`CalcError::NonNumericInput`] for an unparseable target and
/// [`CalcError::NegativeTargetProfit`] for a negative one.
/// [`CalcError::ResultOutOfRange`] when the figures overflow.
pub fn units_for_target_profit(
    input: &BreakEvenInput,
    target_profit: impl Into<NumericInput>,
) -> CalcResult<TargetProfitResult> {
    let v = input.validate()?;

    let target: NumericInput = target_profit.into();
    let target_profit = target.value().ok_or(CalcError::NonNumericInput)?;
    if target_profit < 0.0 {
        return Err(CalcError::NegativeTargetProfit);
    }

    let required_units = whole_units(v.fixed_costs + target_profit, v.contribution_margin_per_unit)?;
    let required_revenue = revenue_for(required_units, v.selling_price_per_unit)?;

    Ok(TargetProfitResult {
        target_profit,
        required_units,
        required_revenue,
        contribution_margin_per_unit: v.contribution_margin_per_unit,
    })
}

/// Project revenue, costs and profit at `units_sold`.
///
/// # Errors
///
/// Same validation errors as the break-even calculation, and
/// [`CalcError::ResultOutOfRange`] when revenue, costs or profit overflow.
pub fn profit_at_volume(input: &BreakEvenInput, units_sold: u64) -> CalcResult<VolumeProjection> {
    let v = input.validate()?;

    let units = units_sold as f64;
    let revenue = revenue_for(units_sold, v.selling_price_per_unit)?;
    let total_costs = v.fixed_costs + units * v.variable_costs_per_unit;
    let profit = revenue - total_costs;
    if !total_costs.is_finite() || !profit.is_finite() {
        return Err(CalcError::ResultOutOfRange);
    }
    let break_even_units = whole_units(v.fixed_costs, v.contribution_margin_per_unit)?;

    Ok(VolumeProjection {
        units_sold,
        revenue,
        total_costs,
        profit,
        margin_of_safety_units: signed_difference(units_sold, break_even_units),
    })
}

fn signed_difference(a: u64, b: u64) -> i64 {
    if a >= b {
        i64::try_from(a - b).unwrap_or(i64::MAX)
    } else {
        i64::try_from(b - a).map_or(i64::MIN, |d| -d)
    }
}
