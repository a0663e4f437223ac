//! Property tests for the figures returned on success.
//!
//! Most inputs are whole numbers so the expected values can be checked with
//! exact integer arithmetic. The last group covers both ends of the `f64`
//! range: quotients that underflow to zero and counts too large for `u64`.

use proptest::prelude::*;

use calc_core::calculations::break_even::{calculate, BreakEvenInput};
use calc_core::CalcError;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Units is the smallest n with n * margin >= fixed costs.
    #[test]
    fn property_units_are_minimal(
        fixed in 1u64..10_000_000,
        variable in 0u64..10_000,
        margin in 1u64..10_000,
    ) {
        let price = variable + margin;
        let result = calculate(&BreakEvenInput::new(fixed as f64, price as f64, variable as f64))
            .expect("valid input");

        let expected = fixed.div_ceil(margin);
        prop_assert_eq!(result.break_even_units, expected);
        prop_assert!(result.break_even_units >= 1);
        prop_assert!(result.break_even_units * margin >= fixed);
        prop_assert!((result.break_even_units - 1) * margin < fixed);
    }

    /// PROPERTY: Margin and revenue follow from the rounded unit count.
    #[test]
    fn property_margin_and_revenue(
        fixed in 1u64..1_000_000,
        variable in 0u64..1_000,
        margin in 1u64..1_000,
    ) {
        let price = variable + margin;
        let result = calculate(&BreakEvenInput::new(fixed as f64, price as f64, variable as f64))
            .expect("valid input");

        prop_assert_eq!(result.contribution_margin_per_unit, margin as f64);
        prop_assert_eq!(result.break_even_revenue, (result.break_even_units * price) as f64);
        prop_assert!(result.break_even_revenue >= fixed as f64);
    }

    /// PROPERTY: Fractional inputs still yield a positive whole unit count that covers fixed costs.
    #[test]
    fn property_fractional_inputs_cover_costs(
        fixed in 0.01f64..1.0e6,
        variable in 0.0f64..1.0e3,
        margin in 0.01f64..1.0e3,
    ) {
        let price = variable + margin;
        let result = calculate(&BreakEvenInput::new(fixed, price, variable));
        // Rounding in `variable + margin` can leave a slightly different
        // margin, but it stays positive.
        let result = result.expect("valid input");
        prop_assert!(result.break_even_units >= 1);
        prop_assert!(result.contribution_margin_per_unit > 0.0);
        prop_assert!(result.break_even_revenue > 0.0);
    }

    /// PROPERTY: A quotient that underflows to zero still reports one unit.
    #[test]
    fn property_subnormal_fixed_costs_need_one_unit(
        fixed in prop::num::f64::POSITIVE | prop::num::f64::SUBNORMAL,
        margin in 1.0f64..1.0e300,
    ) {
        let result = calculate(&BreakEvenInput::new(fixed, margin, 0.0)).expect("valid input");
        prop_assert_eq!(result.break_even_units, 1);
        prop_assert_eq!(result.break_even_revenue, margin);
        prop_assert!(result.total_contribution() >= fixed);
    }

    /// PROPERTY: Unit counts past u64::MAX are rejected, never clamped.
    #[test]
    fn property_unit_count_beyond_u64_rejected(
        fixed in 1.0e20f64..1.0e300,
        margin in 1.0e-3f64..1.0,
    ) {
        let result = calculate(&BreakEvenInput::new(fixed, margin, 0.0));
        prop_assert_eq!(result, Err(CalcError::ResultOutOfRange));
    }

    /// PROPERTY: Large but representable counts are exact and cover fixed costs.
    #[test]
    fn property_large_unit_counts_are_exact(
        shift in 53u32..63,
        mantissa in 0u64..(1u64 << 20),
    ) {
        // Whole numbers between 2^53 and 2^63 that are exact as f64
        let fixed = ((1u64 << shift) + (mantissa << (shift - 20))) as f64;
        let result = calculate(&BreakEvenInput::new(fixed, 2.0, 1.0)).expect("valid input");
        prop_assert_eq!(result.break_even_units, fixed as u64);
        prop_assert!(result.break_even_revenue >= fixed);
    }
}
