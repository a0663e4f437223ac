//! # Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - a pure function returning `Result<*Result, CalcError>`
//!
//! ## Available Calculations
//!
//! - [`break_even`] - Break-even units and revenue
//! - [`profit`] - Target-profit volume and profit at a given volume

pub mod break_even;
pub mod profit;

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::input::NumericInput;

// Re-export commonly used types
pub use break_even::{break_even, calculate, BreakEvenInput, BreakEvenResult};
pub use profit::{profit_at_volume, units_for_target_profit, TargetProfitResult, VolumeProjection};

/// Enum wrapper for all calculation requests.
///
/// Lets a front-end or JSON consumer submit any request through one entry
/// point and get a matching [`CalculationOutput`] back.
///
/// ## JSON Example
///
/// ```json
/// {
///   "type": "TargetProfit",
///   "input": {
///     "fixed_costs": 5000.0,
///     "selling_price_per_unit": 25.0,
///     "variable_costs_per_unit": 10.0
///   },
///   "target_profit": 2000.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Calculation {
    /// Break-even units and revenue
    BreakEven { input: BreakEvenInput },
    /// Units needed to reach a profit goal
    TargetProfit {
        input: BreakEvenInput,
        target_profit: NumericInput,
    },
    /// Revenue, costs and profit at a sales volume
    ProfitAtVolume { input: BreakEvenInput, units_sold: u64 },
}

/// Result of running a [`Calculation`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutput {
    BreakEven(BreakEvenResult),
    TargetProfit(TargetProfitResult),
    ProfitAtVolume(VolumeProjection),
}

impl Calculation {
    /// The shared break-even inputs of this request
    pub fn input(&self) -> &BreakEvenInput {
        match self {
            Calculation::BreakEven { input }
            | Calculation::TargetProfit { input, .. }
            | Calculation::ProfitAtVolume { input, .. } => input,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            Calculation::BreakEven { .. } => "BreakEven",
            Calculation::TargetProfit { .. } => "TargetProfit",
            Calculation::ProfitAtVolume { .. } => "ProfitAtVolume",
        }
    }

    /// Run the calculation.
    pub fn run(&self) -> CalcResult<CalculationOutput> {
        match *self {
            Calculation::BreakEven { input } => calculate(&input).map(CalculationOutput::BreakEven),
            Calculation::TargetProfit { input, target_profit } => {
                units_for_target_profit(&input, target_profit).map(CalculationOutput::TargetProfit)
            }
            Calculation::ProfitAtVolume { input, units_sold } => {
                profit_at_volume(&input, units_sold).map(CalculationOutput::ProfitAtVolume)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcError;

    #[test]
    fn test_run_dispatches() {
        let input = BreakEvenInput::new(5000.0, 25.0, 10.0);

        match (Calculation::BreakEven { input }).run().unwrap() {
            CalculationOutput::BreakEven(r) => assert_eq!(r.break_even_units, 334),
            other => panic!("unexpected output: {:?}", other),
        }

        let calc = Calculation::TargetProfit {
            input,
            target_profit: NumericInput::Valid(2000.0),
        };
        match calc.run().unwrap() {
            CalculationOutput::TargetProfit(r) => assert_eq!(r.required_units, 467),
            other => panic!("unexpected output: {:?}", other),
        }

        let calc = Calculation::ProfitAtVolume { input, units_sold: 500 };
        match calc.run().unwrap() {
            CalculationOutput::ProfitAtVolume(r) => assert_eq!(r.profit, 2500.0),
            other => panic!("unexpected output: {:?}", other),
        }
    }

    #[test]
    fn test_run_propagates_errors() {
        let calc = Calculation::BreakEven {
            input: BreakEvenInput::new(5000.0, 10.0, 10.0),
        };
        assert_eq!(calc.run(), Err(CalcError::UnprofitableMargin));
        assert_eq!(calc.calc_type(), "BreakEven");
    }

    #[test]
    fn test_calculation_from_json() {
        let json = r#"{
            "type": "TargetProfit",
            "input": {
                "fixed_costs": 5000.0,
                "selling_price_per_unit": 25.0,
                "variable_costs_per_unit": 10.0
            },
            "target_profit": 2000.0
        }"#;
        let calc: Calculation = serde_json::from_str(json).unwrap();
        assert_eq!(calc.calc_type(), "TargetProfit");
        assert_eq!(calc.input().fixed_costs, NumericInput::Valid(5000.0));
    }

    #[test]
    fn test_null_field_from_json_is_rejected() {
        let json = r#"{
            "type": "BreakEven",
            "input": {
                "fixed_costs": null,
                "selling_price_per_unit": 25.0,
                "variable_costs_per_unit": 10.0
            }
        }"#;
        let calc: Calculation = serde_json::from_str(json).unwrap();
        assert_eq!(calc.run(), Err(CalcError::NonNumericInput));
    }
}
