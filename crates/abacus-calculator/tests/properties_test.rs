//! Algebraic properties of the four operations.

use abacus_calculator::{CalculationError, Number, add, divide, multiply, subtract};
use proptest::prelude::*;

fn close(x: f64, y: f64) -> bool {
    (x - y).abs() <= 1e-9 * x.abs().max(y.abs()).max(1.0)
}

fn number() -> impl Strategy<Value = Number> {
    prop_oneof![
        (-1_000_000_000_i64..1_000_000_000).prop_map(Number::Integer),
        (-1e9..1e9_f64).prop_map(Number::Float),
    ]
}

fn non_zero() -> impl Strategy<Value = Number> {
    number().prop_filter("divisor must not be zero", |n| !n.is_zero())
}

proptest! {
    #[test]
    fn add_is_commutative(a in number(), b in number()) {
        prop_assert_eq!(add(a, b), add(b, a));
    }

    #[test]
    fn multiply_is_commutative(a in number(), b in number()) {
        prop_assert_eq!(multiply(a, b), multiply(b, a));
    }

    #[test]
    fn zero_is_the_additive_identity(a in number()) {
        prop_assert_eq!(add(a, 0_i64).unwrap().as_f64(), a.as_f64());
    }

    #[test]
    fn subtract_undoes_add(a in number(), b in number()) {
        let sum = add(a, b).unwrap();
        let back = subtract(sum, b).unwrap();
        let tolerance = 1e-9 * a.as_f64().abs().max(b.as_f64().abs()).max(1.0);
        prop_assert!((back.as_f64() - a.as_f64()).abs() <= tolerance, "{} != {}", back, a);
    }

    #[test]
    fn divide_matches_float_division(a in number(), b in non_zero()) {
        let quotient = divide(a, b).unwrap();
        prop_assert!(!quotient.is_integer());
        prop_assert!(close(quotient.as_f64(), a.as_f64() / b.as_f64()));
    }

    #[test]
    fn divide_by_any_zero_fails(a in number()) {
        prop_assert_eq!(divide(a, 0_i64), Err(CalculationError::DivisionByZero));
        prop_assert_eq!(divide(a, 0.0), Err(CalculationError::DivisionByZero));
        prop_assert_eq!(divide(a, -0.0), Err(CalculationError::DivisionByZero));
    }

    #[test]
    fn integer_inputs_keep_integer_results(
        a in -1_000_000_i64..1_000_000,
        b in -1_000_000_i64..1_000_000
    ) {
        prop_assert_eq!(add(a, b), Ok(Number::Integer(a + b)));
        prop_assert_eq!(subtract(a, b), Ok(Number::Integer(a - b)));
        prop_assert_eq!(multiply(a, b), Ok(Number::Integer(a * b)));
    }

    #[test]
    fn float_operand_gives_float_result(a in number(), b in -1e9..1e9_f64) {
        prop_assert!(!add(a, b).unwrap().is_integer());
        prop_assert!(!subtract(a, b).unwrap().is_integer());
        prop_assert!(!multiply(a, b).unwrap().is_integer());
    }
}
