use std::cell::Cell;

use loosetype::{
    DynamicValue, OperatorTag, RuntimeError, evaluate, evaluate_lazy,
    interpreter::evaluator::binary::logic::eval_logic, util::num::string_to_number,
};
use pretty_assertions::assert_eq;

const BINARY_OPS: [OperatorTag; 16] = [OperatorTag::Add,
                                       OperatorTag::Sub,
                                       OperatorTag::Mul,
                                       OperatorTag::Div,
                                       OperatorTag::Mod,
                                       OperatorTag::Pow,
                                       OperatorTag::Eq,
                                       OperatorTag::StrictEq,
                                       OperatorTag::NotEq,
                                       OperatorTag::StrictNotEq,
                                       OperatorTag::Lt,
                                       OperatorTag::Gt,
                                       OperatorTag::Lte,
                                       OperatorTag::Gte,
                                       OperatorTag::And,
                                       OperatorTag::Or];

const UNARY_OPS: [OperatorTag; 5] = [OperatorTag::Not,
                                     OperatorTag::Neg,
                                     OperatorTag::Plus,
                                     OperatorTag::TypeOf,
                                     OperatorTag::Void];

fn binary(op: OperatorTag, left: impl Into<DynamicValue>, right: impl Into<DynamicValue>)
          -> DynamicValue {
    match evaluate(op, left.into(), Some(right.into())) {
        Ok(value) => value,
        Err(e) => panic!("{op} failed: {e}"),
    }
}

fn unary(op: OperatorTag, operand: impl Into<DynamicValue>) -> DynamicValue {
    match evaluate(op, operand.into(), None) {
        Ok(value) => value,
        Err(e) => panic!("{op} failed: {e}"),
    }
}

fn sample_values() -> Vec<DynamicValue> {
    vec![DynamicValue::from(0),
         DynamicValue::from(-0.0),
         DynamicValue::from(5),
         DynamicValue::from(f64::NAN),
         DynamicValue::from(f64::INFINITY),
         DynamicValue::from(""),
         DynamicValue::from("5"),
         DynamicValue::from("apple"),
         DynamicValue::from(true),
         DynamicValue::from(false),
         DynamicValue::Null,
         DynamicValue::Undefined]
}

#[test]
fn plus_concatenates_when_a_string_is_involved() {
    assert_eq!(binary(OperatorTag::Add, "5", 2), DynamicValue::from("52"));
    assert_eq!(binary(OperatorTag::Add, 2, "5"), DynamicValue::from("25"));
    assert_eq!(binary(OperatorTag::Add, "a", DynamicValue::Null),
               DynamicValue::from("anull"));
    assert_eq!(binary(OperatorTag::Add, DynamicValue::Undefined, ""),
               DynamicValue::from("undefined"));
    assert_eq!(binary(OperatorTag::Add, true, "!"), DynamicValue::from("true!"));
    assert_eq!(binary(OperatorTag::Add, "", 1e21), DynamicValue::from("1e+21"));
    assert_eq!(binary(OperatorTag::Add, "", -0.0), DynamicValue::from("0"));
}

#[test]
fn plus_adds_numbers_otherwise() {
    assert_eq!(binary(OperatorTag::Add, true, 1), DynamicValue::Number(2.0));
    assert_eq!(binary(OperatorTag::Add, DynamicValue::Null, 5), DynamicValue::Number(5.0));
    assert_eq!(binary(OperatorTag::Add, false, DynamicValue::Null),
               DynamicValue::Number(0.0));
    assert!(binary(OperatorTag::Add, DynamicValue::Undefined, 5).is_nan());
}

#[test]
fn other_arithmetic_always_converts_to_numbers() {
    assert_eq!(binary(OperatorTag::Sub, "5", 2), DynamicValue::Number(3.0));
    assert_eq!(binary(OperatorTag::Mul, "3", "4"), DynamicValue::Number(12.0));
    assert_eq!(binary(OperatorTag::Div, " 10 ", "4"), DynamicValue::Number(2.5));
    assert_eq!(binary(OperatorTag::Mod, "17", 5), DynamicValue::Number(2.0));
    assert_eq!(binary(OperatorTag::Pow, "2", true), DynamicValue::Number(2.0));
    assert_eq!(binary(OperatorTag::Sub, "", 1), DynamicValue::Number(-1.0));
    assert_eq!(binary(OperatorTag::Mul, "0x10", 2), DynamicValue::Number(32.0));
    assert!(binary(OperatorTag::Sub, "apple", 1).is_nan());
    assert!(binary(OperatorTag::Mul, DynamicValue::Undefined, 0).is_nan());
}

#[test]
fn division_by_zero_follows_ieee() {
    assert_eq!(binary(OperatorTag::Div, 1, 0), DynamicValue::Number(f64::INFINITY));
    assert_eq!(binary(OperatorTag::Div, -1, 0), DynamicValue::Number(f64::NEG_INFINITY));
    assert_eq!(binary(OperatorTag::Div, 1, -0.0),
               DynamicValue::Number(f64::NEG_INFINITY));
    assert!(binary(OperatorTag::Div, 0, 0).is_nan());
    assert!(binary(OperatorTag::Mod, 5, 0).is_nan());
    assert!(binary(OperatorTag::Mod, f64::INFINITY, 2).is_nan());
    assert_eq!(binary(OperatorTag::Mod, 5, f64::INFINITY), DynamicValue::Number(5.0));
}

#[test]
fn exponent_edge_cases() {
    assert_eq!(binary(OperatorTag::Pow, 2, 10), DynamicValue::Number(1024.0));
    assert_eq!(binary(OperatorTag::Pow, f64::NAN, 0), DynamicValue::Number(1.0));
    assert_eq!(binary(OperatorTag::Pow, 4, 0.5), DynamicValue::Number(2.0));
    assert!(binary(OperatorTag::Pow, 1, f64::NAN).is_nan());
    assert!(binary(OperatorTag::Pow, 1, f64::INFINITY).is_nan());
    assert!(binary(OperatorTag::Pow, -1, f64::NEG_INFINITY).is_nan());
    assert!(binary(OperatorTag::Pow, -8, 1.0 / 3.0).is_nan());
}

#[test]
fn nan_is_never_equal_or_ordered() {
    let nan = DynamicValue::from(f64::NAN);
    for op in [OperatorTag::Eq,
               OperatorTag::StrictEq,
               OperatorTag::Lt,
               OperatorTag::Gt,
               OperatorTag::Lte,
               OperatorTag::Gte]
    {
        for other in sample_values() {
            assert_eq!(binary(op, nan.clone(), other.clone()),
                       DynamicValue::Boolean(false),
                       "NaN {op} {other:?}");
            assert_eq!(binary(op, other.clone(), nan.clone()),
                       DynamicValue::Boolean(false),
                       "{other:?} {op} NaN");
        }
    }
    assert_eq!(binary(OperatorTag::NotEq, nan.clone(), nan.clone()),
               DynamicValue::Boolean(true));
    assert_eq!(binary(OperatorTag::StrictNotEq, nan.clone(), nan),
               DynamicValue::Boolean(true));
}

#[test]
fn loose_equality_coerces() {
    assert_eq!(binary(OperatorTag::Eq, "5", 5), DynamicValue::Boolean(true));
    assert_eq!(binary(OperatorTag::Eq, "", 0), DynamicValue::Boolean(true));
    assert_eq!(binary(OperatorTag::Eq, "0", false), DynamicValue::Boolean(true));
    assert_eq!(binary(OperatorTag::Eq, true, "1"), DynamicValue::Boolean(true));
    assert_eq!(binary(OperatorTag::Eq, 0, -0.0), DynamicValue::Boolean(true));
    assert_eq!(binary(OperatorTag::Eq, "1.0", "1"), DynamicValue::Boolean(false));
    assert_eq!(binary(OperatorTag::NotEq, "apple", "apple"), DynamicValue::Boolean(false));
}

#[test]
fn null_and_undefined_only_loosely_equal_each_other() {
    assert_eq!(binary(OperatorTag::Eq, DynamicValue::Null, DynamicValue::Undefined),
               DynamicValue::Boolean(true));
    assert_eq!(binary(OperatorTag::StrictEq, DynamicValue::Null, DynamicValue::Undefined),
               DynamicValue::Boolean(false));

    for nullish in [DynamicValue::Null, DynamicValue::Undefined] {
        for other in [DynamicValue::from(0),
                      DynamicValue::from(""),
                      DynamicValue::from(false),
                      DynamicValue::from("null")]
        {
            assert_eq!(binary(OperatorTag::Eq, nullish.clone(), other.clone()),
                       DynamicValue::Boolean(false),
                       "{nullish:?} == {other:?}");
            assert_eq!(binary(OperatorTag::Eq, other.clone(), nullish.clone()),
                       DynamicValue::Boolean(false),
                       "{other:?} == {nullish:?}");
        }
    }
}

#[test]
fn strict_equality_requires_matching_types() {
    assert_eq!(binary(OperatorTag::StrictEq, "5", 5), DynamicValue::Boolean(false));
    assert_eq!(binary(OperatorTag::StrictEq, 1, true), DynamicValue::Boolean(false));
    assert_eq!(binary(OperatorTag::StrictEq, "dog", "dog"), DynamicValue::Boolean(true));
    assert_eq!(binary(OperatorTag::StrictEq, 0, -0.0), DynamicValue::Boolean(true));
    assert_eq!(binary(OperatorTag::StrictNotEq, "5", 5), DynamicValue::Boolean(true));
}

#[test]
fn equality_is_symmetric() {
    for a in sample_values() {
        for b in sample_values() {
            for op in [OperatorTag::Eq, OperatorTag::StrictEq] {
                assert_eq!(binary(op, a.clone(), b.clone()),
                           binary(op, b.clone(), a.clone()),
                           "{a:?} {op} {b:?}");
            }
        }
    }
}

#[test]
fn negated_equality_is_the_inverse() {
    for a in sample_values() {
        for b in sample_values() {
            let eq = binary(OperatorTag::Eq, a.clone(), b.clone()).to_boolean();
            let ne = binary(OperatorTag::NotEq, a.clone(), b.clone()).to_boolean();
            assert_eq!(eq, !ne, "{a:?} vs {b:?}");

            let eq = binary(OperatorTag::StrictEq, a.clone(), b.clone()).to_boolean();
            let ne = binary(OperatorTag::StrictNotEq, a.clone(), b.clone()).to_boolean();
            assert_eq!(eq, !ne, "{a:?} vs {b:?}");
        }
    }
}

#[test]
fn ordering_compares_strings_by_text_and_everything_else_by_number() {
    assert_eq!(binary(OperatorTag::Gt, "10", 5), DynamicValue::Boolean(true));
    assert_eq!(binary(OperatorTag::Lt, "10", "5"), DynamicValue::Boolean(true));
    assert_eq!(binary(OperatorTag::Lt, "apple", "banana"), DynamicValue::Boolean(true));
    assert_eq!(binary(OperatorTag::Lt, "Zebra", "apple"), DynamicValue::Boolean(true));
    assert_eq!(binary(OperatorTag::Gte, DynamicValue::Null, 0), DynamicValue::Boolean(true));
    assert_eq!(binary(OperatorTag::Gt, true, false), DynamicValue::Boolean(true));
    assert_eq!(binary(OperatorTag::Lte, "", ""), DynamicValue::Boolean(true));
    assert_eq!(binary(OperatorTag::Lt, "apple", 5), DynamicValue::Boolean(false));
    assert_eq!(binary(OperatorTag::Gte, "apple", 5), DynamicValue::Boolean(false));
    assert_eq!(binary(OperatorTag::Lte, DynamicValue::Undefined, 0),
               DynamicValue::Boolean(false));
}

#[test]
fn ordering_results_are_booleans() {
    for op in [OperatorTag::Lt, OperatorTag::Gt, OperatorTag::Lte, OperatorTag::Gte] {
        for a in sample_values() {
            for b in sample_values() {
                assert!(matches!(binary(op, a.clone(), b.clone()), DynamicValue::Boolean(_)),
                        "{a:?} {op} {b:?}");
            }
        }
    }
}

#[test]
fn or_returns_an_operand() {
    assert_eq!(binary(OperatorTag::Or, 0, "apple"), DynamicValue::from("apple"));
    assert_eq!(binary(OperatorTag::Or, "first", "second"), DynamicValue::from("first"));
    assert_eq!(binary(OperatorTag::Or, DynamicValue::Null, DynamicValue::Undefined),
               DynamicValue::Undefined);
}

#[test]
fn and_returns_an_operand() {
    assert_eq!(binary(OperatorTag::And, "", true), DynamicValue::from(""));
    assert_eq!(binary(OperatorTag::And, 1, "apple"), DynamicValue::from("apple"));
    assert!(binary(OperatorTag::And, f64::NAN, 1).is_nan());
}

#[test]
fn logical_operators_short_circuit() {
    let calls = Cell::new(0);
    let right = || {
        calls.set(calls.get() + 1);
        Ok(DynamicValue::from("right"))
    };

    let value = evaluate_lazy(OperatorTag::Or, "left".into(), right).unwrap();
    assert_eq!(value, DynamicValue::from("left"));
    assert_eq!(calls.get(), 0);

    let value = evaluate_lazy(OperatorTag::And, DynamicValue::Null, right).unwrap();
    assert_eq!(value, DynamicValue::Null);
    assert_eq!(calls.get(), 0);

    let value = evaluate_lazy(OperatorTag::Or, 0.into(), right).unwrap();
    assert_eq!(value, DynamicValue::from("right"));
    assert_eq!(calls.get(), 1);

    let value = evaluate_lazy(OperatorTag::And, true.into(), right).unwrap();
    assert_eq!(value, DynamicValue::from("right"));
    assert_eq!(calls.get(), 2);
}

#[test]
fn lazy_operand_errors_propagate() {
    let failure = RuntimeError::InvalidOperatorArity { op:       OperatorTag::Not,
                                                       expected: 1,
                                                       found:    2, };

    let result = evaluate_lazy(OperatorTag::Add, 1.into(), || Err(failure.clone()));
    assert_eq!(result, Err(failure.clone()));

    let result = evaluate_lazy(OperatorTag::Or, 0.into(), || Err(failure.clone()));
    assert_eq!(result, Err(failure.clone()));

    let result = evaluate_lazy(OperatorTag::Or, 1.into(), || Err(failure));
    assert_eq!(result, Ok(DynamicValue::Number(1.0)));
}

#[test]
fn logic_helper_only_short_circuits_logical_operators() {
    let value = eval_logic(OperatorTag::Add, 1.into(), || Ok(2.into())).unwrap();
    assert_eq!(value, DynamicValue::Number(3.0));

    let value = eval_logic(OperatorTag::StrictEq, 1.into(), || Ok(1.into())).unwrap();
    assert_eq!(value, DynamicValue::Boolean(true));

    let value = eval_logic(OperatorTag::Or, 1.into(), || Ok(2.into())).unwrap();
    assert_eq!(value, DynamicValue::Number(1.0));

    let called = Cell::new(false);
    let result = eval_logic(OperatorTag::Not, 1.into(), || {
        called.set(true);
        Ok(2.into())
    });
    assert_eq!(result,
               Err(RuntimeError::InvalidOperatorArity { op:       OperatorTag::Not,
                                                        expected: 1,
                                                        found:    2, }));
    assert!(called.get());
}

#[test]
fn not_is_a_boolean_and_idempotent_when_doubled() {
    for value in sample_values() {
        let once = unary(OperatorTag::Not, value.clone());
        assert_eq!(once, DynamicValue::Boolean(!value.to_boolean()));

        let twice = unary(OperatorTag::Not, once);
        assert_eq!(twice, DynamicValue::Boolean(value.to_boolean()), "!!{value:?}");
    }
}

#[test]
fn truthiness() {
    let falsy = [DynamicValue::from(false),
                 DynamicValue::from(0),
                 DynamicValue::from(-0.0),
                 DynamicValue::from(f64::NAN),
                 DynamicValue::from(""),
                 DynamicValue::Null,
                 DynamicValue::Undefined];
    for value in falsy {
        assert!(!value.to_boolean(), "{value:?} should be falsy");
    }

    let truthy = [DynamicValue::from(true),
                  DynamicValue::from(-1),
                  DynamicValue::from(f64::INFINITY),
                  DynamicValue::from("0"),
                  DynamicValue::from("false"),
                  DynamicValue::from(" ")];
    for value in truthy {
        assert!(value.to_boolean(), "{value:?} should be truthy");
    }
}

#[test]
fn unary_operators() {
    assert_eq!(unary(OperatorTag::Neg, "5"), DynamicValue::Number(-5.0));
    assert_eq!(unary(OperatorTag::Plus, " 0b11 "), DynamicValue::Number(3.0));
    assert_eq!(unary(OperatorTag::Plus, true), DynamicValue::Number(1.0));
    assert!(unary(OperatorTag::Plus, "1_000").is_nan());
    assert!(unary(OperatorTag::Plus, "infinity").is_nan());
    assert_eq!(unary(OperatorTag::TypeOf, DynamicValue::Null), DynamicValue::from("object"));
    assert_eq!(unary(OperatorTag::TypeOf, DynamicValue::Undefined),
               DynamicValue::from("undefined"));
    assert_eq!(unary(OperatorTag::TypeOf, f64::NAN), DynamicValue::from("number"));
    assert_eq!(unary(OperatorTag::Void, "anything"), DynamicValue::Undefined);
}

#[test]
fn radix_strings_round_once() {
    assert_eq!(string_to_number("0x20000000000001F"), 144_115_188_075_855_904.0);
    assert_eq!(string_to_number("0x8000000000000401"), 9_223_372_036_854_777_856.0);
    assert_eq!(string_to_number("0b100000000000000000000000000000000000000000000000000011"),
               9_007_199_254_740_996.0);
    assert_eq!(string_to_number("0o1777777777777777777777"), 18_446_744_073_709_551_616.0);
    assert_eq!(string_to_number(&format!("0x1{}", "0".repeat(32))), 2f64.powi(128));
    assert!(string_to_number("0x").is_nan());
    assert!(string_to_number("0x1G").is_nan());
    assert!(string_to_number("0x+1").is_nan());
}

#[test]
fn next_line_is_not_numeric_whitespace() {
    assert!(string_to_number("\u{85}").is_nan());
    assert!(string_to_number("\u{85}5").is_nan());
    assert!(string_to_number("5\u{85}").is_nan());
    assert_eq!(string_to_number("\u{A0}5\u{2028}"), 5.0);
    assert_eq!(string_to_number("\u{FEFF}\t\n"), 0.0);
}

#[test]
fn number_to_string_conversions() {
    let cases = [(0.1 + 0.2, "0.30000000000000004"),
                 (123_456_789.0, "123456789"),
                 (1e20, "100000000000000000000"),
                 (1.5e21, "1.5e+21"),
                 (0.000_001_5, "0.0000015"),
                 (1e-7, "1e-7"),
                 (-2.5, "-2.5"),
                 (f64::NAN, "NaN")];

    for (number, expected) in cases {
        assert_eq!(&*DynamicValue::from(number).to_js_string(), expected);
    }
}

#[test]
fn binary_operators_reject_one_operand() {
    for op in BINARY_OPS {
        assert_eq!(evaluate(op, 1.into(), None),
                   Err(RuntimeError::InvalidOperatorArity { op,
                                                            expected: 2,
                                                            found: 1 }),
                   "{op}");
    }
}

#[test]
fn unary_operators_reject_two_operands() {
    for op in UNARY_OPS {
        assert_eq!(evaluate(op, 1.into(), Some(2.into())),
                   Err(RuntimeError::InvalidOperatorArity { op,
                                                            expected: 1,
                                                            found: 2 }),
                   "{op}");

        let called = Cell::new(false);
        let result = evaluate_lazy(op, 1.into(), || {
            called.set(true);
            Ok(2.into())
        });
        assert!(result.is_err(), "{op}");
        assert!(!called.get(), "{op} evaluated its right operand");
    }
}

#[test]
fn arity_errors_name_the_operator() {
    let err = evaluate(OperatorTag::Not, true.into(), Some(false.into())).unwrap_err();
    assert_eq!(err.to_string(), "Operator '!' expects 1 operand(s), but found 2.");
}

#[test]
fn values_can_be_shared_across_threads() {
    let shared = DynamicValue::from("5");

    std::thread::scope(|scope| {
        let handles = (0..4).map(|i| {
                                let left = shared.clone();
                                scope.spawn(move || binary(OperatorTag::Add, left, i))
                            })
                            .collect::<Vec<_>>();

        for (i, handle) in handles.into_iter().enumerate() {
            let value = handle.join().unwrap();
            assert_eq!(value, DynamicValue::from(format!("5{i}")));
        }
    });
}
