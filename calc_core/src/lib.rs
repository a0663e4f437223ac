//! # calc_core - Break-Even Calculation Engine
//!
//! `calc_core` is the computational heart of the break-even calculator. Given
//! fixed costs, a selling price per unit and a variable cost per unit, it
//! reports how many units must be sold (and how much revenue that brings in)
//! before the business stops losing money.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types with the exact user-facing message
//! - **No NaN**: Unparseable input is an explicit tag, checked before any arithmetic
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::calculations::break_even::{calculate, BreakEvenInput};
//!
//! // Raw form text goes in; a result or a validation error comes out
//! let input = BreakEvenInput::from_text("5000", "25", "10");
//!
//! match calculate(&input) {
//!     Ok(result) => println!("Sell {} units", result.break_even_units),
//!     Err(e) => println!("{}", e),
//! }
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Break-even and profit-planning calculations
//! - [`input`] - Text-to-number conversion with an explicit invalid marker
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod input;

// Re-export commonly used types at crate root for convenience
pub use calculations::{BreakEvenInput, BreakEvenResult, Calculation, CalculationOutput};
pub use errors::{CalcError, CalcResult, ErrorReport};
pub use input::NumericInput;
