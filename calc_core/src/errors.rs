//! # Error Types
//!
//! Structured validation errors for calc_core. Every variant is a problem with
//! the numbers the user typed, so every variant is recoverable by correcting
//! the input and recalculating. The `Display` text of each variant is the
//! exact message shown to the user.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn check_variable_cost(variable_costs_per_unit: f64) -> CalcResult<()> {
//!     if variable_costs_per_unit < 0.0 {
//!         return Err(CalcError::NegativeVariableCost);
//!     }
//!     Ok(())
//! }
//!
//! let err = check_variable_cost(-1.0).unwrap_err();
//! assert_eq!(err.to_string(), "Variable Costs cannot be negative.");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Validation failure for a calculation request.
///
/// Variants are listed in the order the checks run; the first failing check
/// determines the error.
#[derive(Error, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(tag = "type")]
pub enum CalcError {
    /// One or more inputs did not parse as a finite number
    #[error("Please enter valid numbers in all fields.")]
    NonNumericInput,

    /// Fixed costs or selling price is zero or negative
    #[error("Fixed Costs and Selling Price must be positive numbers.")]
    NonPositiveBaseValue,

    /// Variable cost per unit is negative
    #[error("Variable Costs cannot be negative.")]
    NegativeVariableCost,

    /// Selling price does not exceed variable cost per unit
    #[error("Selling price per unit must be greater than variable costs per unit to be profitable.")]
    UnprofitableMargin,

    /// Desired profit for a target-profit plan is negative
    #[error("Target profit cannot be negative.")]
    NegativeTargetProfit,

    /// Inputs are valid but the resulting unit count or money figure does
    /// not fit the number range (more than `u64::MAX` units, or an amount
    /// that overflows `f64`)
    #[error("The result is too large to calculate. Please check the values entered.")]
    ResultOutOfRange,
}

impl CalcError {
    /// Human-readable message, identical to the `Display` output.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Every validation error can be fixed by the user editing the inputs.
    pub fn is_recoverable(&self) -> bool {
        true
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::NonNumericInput => "NON_NUMERIC_INPUT",
            CalcError::NonPositiveBaseValue => "NON_POSITIVE_BASE_VALUE",
            CalcError::NegativeVariableCost => "NEGATIVE_VARIABLE_COST",
            CalcError::UnprofitableMargin => "UNPROFITABLE_MARGIN",
            CalcError::NegativeTargetProfit => "NEGATIVE_TARGET_PROFIT",
            CalcError::ResultOutOfRange => "RESULT_OUT_OF_RANGE",
        }
    }

    /// Build the JSON-facing report for this error.
    pub fn report(&self) -> ErrorReport {
        ErrorReport::from(self)
    }
}

/// Serializable error payload: a code plus the single message field.
///
/// ## JSON Example
///
/// ```json
/// {
///   "code": "UNPROFITABLE_MARGIN",
///   "error": "Selling price per unit must be greater than variable costs per unit to be profitable."
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorReport {
    pub code: String,
    pub error: String,
}

impl From<&CalcError> for ErrorReport {
    fn from(err: &CalcError) -> Self {
        ErrorReport {
            code: err.error_code().to_string(),
            error: err.message(),
        }
    }
}
