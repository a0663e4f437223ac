//! Property tests for the order validation errors are reported in.

use proptest::prelude::*;

use calc_core::calculations::break_even::{break_even, calculate, BreakEvenInput};
use calc_core::{CalcError, NumericInput};

fn any_numeric() -> impl Strategy<Value = NumericInput> {
    prop_oneof![
        Just(NumericInput::Invalid),
        (-1.0e6f64..1.0e6).prop_map(NumericInput::Valid),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Any unparseable field yields the non-numeric error, whatever the others hold.
    #[test]
    fn property_invalid_field_wins(
        fixed in any_numeric(),
        price in any_numeric(),
        variable in any_numeric(),
        slot in 0usize..3,
    ) {
        let mut fields = [fixed, price, variable];
        fields[slot] = NumericInput::Invalid;

        let result = break_even(fields[0], fields[1], fields[2]);
        prop_assert_eq!(result, Err(CalcError::NonNumericInput));
        prop_assert_eq!(
            CalcError::NonNumericInput.to_string(),
            "Please enter valid numbers in all fields."
        );
    }

    /// PROPERTY: A non-positive fixed cost or price is reported before variable-cost or margin problems.
    #[test]
    fn property_non_positive_base_value(
        fixed in -1.0e6f64..1.0e6,
        price in -1.0e6f64..1.0e6,
        variable in -1.0e6f64..1.0e6,
    ) {
        prop_assume!(fixed <= 0.0 || price <= 0.0);
        let result = calculate(&BreakEvenInput::new(fixed, price, variable));
        prop_assert_eq!(result, Err(CalcError::NonPositiveBaseValue));
    }

    /// PROPERTY: With positive base values, a negative variable cost is always rejected.
    #[test]
    fn property_negative_variable_cost(
        fixed in 0.01f64..1.0e6,
        price in 0.01f64..1.0e6,
        variable in -1.0e6f64..-0.0001,
    ) {
        let result = calculate(&BreakEvenInput::new(fixed, price, variable));
        prop_assert_eq!(result, Err(CalcError::NegativeVariableCost));
    }

    /// PROPERTY: Price at or below variable cost is unprofitable.
    #[test]
    fn property_unprofitable_margin(
        fixed in 0.01f64..1.0e6,
        price in 0.01f64..1.0e6,
        extra in 0.0f64..1.0e6,
    ) {
        let variable = price + extra;
        let result = calculate(&BreakEvenInput::new(fixed, price, variable));
        prop_assert_eq!(result, Err(CalcError::UnprofitableMargin));
    }

    /// PROPERTY: The same inputs always produce the same outcome.
    #[test]
    fn property_idempotent(
        fixed in any_numeric(),
        price in any_numeric(),
        variable in any_numeric(),
    ) {
        let input = BreakEvenInput {
            fixed_costs: fixed,
            selling_price_per_unit: price,
            variable_costs_per_unit: variable,
        };
        prop_assert_eq!(calculate(&input), calculate(&input));
    }

    /// PROPERTY: Arbitrary text never panics the parser or the calculation.
    #[test]
    fn property_text_never_panics(
        fixed in ".{0,12}",
        price in ".{0,12}",
        variable in ".{0,12}",
    ) {
        let input = BreakEvenInput::from_text(&fixed, &price, &variable);
        let _ = calculate(&input);
    }
}
