//! # Numeric Input
//!
//! Text typed into a form has to be turned into a number before any
//! arithmetic happens. A failed conversion is kept as an explicit
//! [`NumericInput::Invalid`] tag instead of a floating-point NaN, because NaN
//! compares false against everything and would slip past `<= 0.0` checks.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::input::NumericInput;
//!
//! assert_eq!(NumericInput::parse(" 5000 "), NumericInput::Valid(5000.0));
//! assert_eq!(NumericInput::parse("abc"), NumericInput::Invalid);
//! assert_eq!(NumericInput::from(f64::NAN), NumericInput::Invalid);
//! ```
//!
//! In JSON a valid input is a plain number and an invalid one is `null`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A caller-supplied number, or the marker for one that failed to convert.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum NumericInput {
    /// A finite number
    Valid(f64),
    /// Empty, unparseable, NaN or infinite input
    #[default]
    Invalid,
}

impl NumericInput {
    /// Convert raw field text into a numeric input.
    ///
    /// Surrounding whitespace is ignored. The whole remaining string must be a
    /// decimal number (`"12"`, `"-3.5"`, `"1e3"`); anything else, including
    /// the literals `NaN` and `inf`, is `Invalid`.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return NumericInput::Invalid;
        }
        match trimmed.parse::<f64>() {
            Ok(value) => NumericInput::from(value),
            Err(_) => NumericInput::Invalid,
        }
    }

    /// The number, if this input is valid.
    pub fn value(self) -> Option<f64> {
        match self {
            NumericInput::Valid(v) => Some(v),
            NumericInput::Invalid => None,
        }
    }

    pub fn is_valid(self) -> bool {
        matches!(self, NumericInput::Valid(_))
    }
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        if value.is_finite() {
            NumericInput::Valid(value)
        } else {
            NumericInput::Invalid
        }
    }
}

impl From<Option<f64>> for NumericInput {
    fn from(value: Option<f64>) -> Self {
        value.map_or(NumericInput::Invalid, NumericInput::from)
    }
}

impl From<NumericInput> for Option<f64> {
    fn from(input: NumericInput) -> Self {
        input.value()
    }
}

impl From<&str> for NumericInput {
    fn from(text: &str) -> Self {
        NumericInput::parse(text)
    }
}

impl FromStr for NumericInput {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(NumericInput::parse(s))
    }
}

impl fmt::Display for NumericInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericInput::Valid(v) => write!(f, "{}", v),
            NumericInput::Invalid => write!(f, "invalid"),
        }
    }
}
