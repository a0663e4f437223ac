//! # Break-Even Calculation
//!
//! Finds the sales volume at which revenue covers fixed costs plus the
//! variable cost of every unit sold.
//!
//! ## Method
//!
//! - Contribution margin per unit: `CM = P - V`
//! - Break-even units: `ceil(F / CM)` (a fractional unit cannot be sold)
//! - Break-even revenue: `units * P`, using the rounded-up unit count, so the
//!   reported revenue is what selling that many whole units actually brings in
//!
//! ## Validation Order
//!
//! The first failing check decides the error:
//!
//! 1. every input is a number ([`CalcError::NonNumericInput`])
//! 2. `F > 0` and `P > 0` ([`CalcError::NonPositiveBaseValue`])
//! 3. `V >= 0` ([`CalcError::NegativeVariableCost`])
//! 4. `P - V > 0` ([`CalcError::UnprofitableMargin`])
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::break_even::{calculate, BreakEvenInput};
//!
//! let input = BreakEvenInput::new(5000.0, 25.0, 10.0);
//! let result = calculate(&input).unwrap();
//!
//! assert_eq!(result.break_even_units, 334);
//! assert_eq!(result.contribution_margin_per_unit, 15.0);
//! assert_eq!(result.break_even_revenue, 8350.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::input::NumericInput;

/// Input parameters for a break-even calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "fixed_costs": 5000.0,
///   "selling_price_per_unit": 25.0,
///   "variable_costs_per_unit": 10.0
/// }
/// ```
///
/// A field that failed to parse is `null`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BreakEvenInput {
    /// Total fixed costs for the period (rent, salaries, subscriptions)
    pub fixed_costs: NumericInput,

    /// Price charged for one unit
    pub selling_price_per_unit: NumericInput,

    /// Cost incurred for each additional unit produced and sold
    pub variable_costs_per_unit: NumericInput,
}

/// Validated figures, all finite and within the ranges the checks allow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Validated {
    pub fixed_costs: f64,
    pub selling_price_per_unit: f64,
    pub variable_costs_per_unit: f64,
    pub contribution_margin_per_unit: f64,
}

impl BreakEvenInput {
    /// Build an input from three numbers. NaN or infinite values become
    /// [`NumericInput::Invalid`].
    pub fn new(fixed_costs: f64, selling_price_per_unit: f64, variable_costs_per_unit: f64) -> Self {
        BreakEvenInput {
            fixed_costs: fixed_costs.into(),
            selling_price_per_unit: selling_price_per_unit.into(),
            variable_costs_per_unit: variable_costs_per_unit.into(),
        }
    }

    /// Build an input from the raw text of three form fields.
    ///
    /// ```rust
    /// use calc_core::calculations::break_even::BreakEvenInput;
    /// use calc_core::input::NumericInput;
    ///
    /// let input = BreakEvenInput::from_text("5000", "", "10");
    /// assert_eq!(input.selling_price_per_unit, NumericInput::Invalid);
    /// ```
    pub fn from_text(fixed_costs: &str, selling_price_per_unit: &str, variable_costs_per_unit: &str) -> Self {
        BreakEvenInput {
            fixed_costs: NumericInput::parse(fixed_costs),
            selling_price_per_unit: NumericInput::parse(selling_price_per_unit),
            variable_costs_per_unit: NumericInput::parse(variable_costs_per_unit),
        }
    }

    /// Run the four checks in order and return the validated figures.
    pub(crate) fn validate(&self) -> CalcResult<Validated> {
        let (fixed, price, variable) = match (
            self.fixed_costs.value(),
            self.selling_price_per_unit.value(),
            self.variable_costs_per_unit.value(),
        ) {
            (Some(f), Some(p), Some(v)) => (f, p, v),
            _ => return Err(reject(CalcError::NonNumericInput)),
        };

        if fixed <= 0.0 || price <= 0.0 {
            return Err(reject(CalcError::NonPositiveBaseValue));
        }

        if variable < 0.0 {
            return Err(reject(CalcError::NegativeVariableCost));
        }

        let margin = price - variable;
        if margin <= 0.0 {
            return Err(reject(CalcError::UnprofitableMargin));
        }

        Ok(Validated {
            fixed_costs: fixed,
            selling_price_per_unit: price,
            variable_costs_per_unit: variable,
            contribution_margin_per_unit: margin,
        })
    }
}

fn reject(err: CalcError) -> CalcError {
    tracing::debug!(code = err.error_code(), "break-even input rejected");
    err
}

/// Break-even calculation results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreakEvenResult {
    /// Whole units to sell before revenue covers all costs (always >= 1)
    pub break_even_units: u64,

    /// Selling price minus variable cost, per unit (always > 0)
    pub contribution_margin_per_unit: f64,

    /// Revenue from selling `break_even_units` at the unit price
    pub break_even_revenue: f64,
}

impl BreakEvenResult {
    /// Total contribution earned at the break-even volume. Never less than
    /// the fixed costs the calculation started from.
    pub fn total_contribution(&self) -> f64 {
        self.break_even_units as f64 * self.contribution_margin_per_unit
    }
}

/// Smallest whole number of units whose contribution covers `amount`.
///
/// Callers guarantee `amount > 0` and `margin > 0`, so at least one unit is
/// always needed, even when the quotient underflows to zero.
///
/// # Errors
///
/// [`CalcError::ResultOutOfRange`] when the count does not fit in a `u64`.
pub(crate) fn whole_units(amount: f64, margin: f64) -> CalcResult<u64> {
    let units = (amount / margin).ceil();
    // u64::MAX rounds up to 2^64 as an f64, the first value that cannot be cast
    if !units.is_finite() || units >= u64::MAX as f64 {
        return Err(reject(CalcError::ResultOutOfRange));
    }
    Ok((units as u64).max(1))
}

/// `units * price`, rejected if it overflows.
pub(crate) fn revenue_for(units: u64, price: f64) -> CalcResult<f64> {
    let revenue = units as f64 * price;
    if revenue.is_finite() {
        Ok(revenue)
    } else {
        Err(reject(CalcError::ResultOutOfRange))
    }
}

/// Perform a break-even calculation.
///
/// # Errors
///
/// Returns the first failing validation as a [`CalcError`]; see the module
/// docs for the order. Valid inputs whose unit count exceeds `u64::MAX`, or
/// whose revenue overflows, give [`CalcError::ResultOutOfRange`].
pub fn calculate(input: &BreakEvenInput) -> CalcResult<BreakEvenResult> {
    let v = input.validate()?;

    let break_even_units = whole_units(v.fixed_costs, v.contribution_margin_per_unit)?;
    let break_even_revenue = revenue_for(break_even_units, v.selling_price_per_unit)?;

    Ok(BreakEvenResult {
        break_even_units,
        contribution_margin_per_unit: v.contribution_margin_per_unit,
        break_even_revenue,
    })
}

/// Shorthand for [`calculate`] over three loose values.
///
/// Accepts anything convertible to [`NumericInput`]: `f64`, `&str`, or a
/// `NumericInput` itself.
///
/// ```rust
/// use calc_core::calculations::break_even::break_even;
/// use calc_core::errors::CalcError;
///
/// assert_eq!(break_even("abc", 25.0, 10.0), Err(CalcError::NonNumericInput));
/// assert_eq!(break_even(5000.0, 20.0, 10.0).unwrap().break_even_units, 500);
/// ```
pub fn break_even(
    fixed_costs: impl Into<NumericInput>,
    selling_price_per_unit: impl Into<NumericInput>,
    variable_costs_per_unit: impl Into<NumericInput>,
) -> CalcResult<BreakEvenResult> {
    calculate(&BreakEvenInput {
        fixed_costs: fixed_costs.into(),
        selling_price_per_unit: selling_price_per_unit.into(),
        variable_costs_per_unit: variable_costs_per_unit.into(),
    })
}
