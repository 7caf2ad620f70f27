use std::cmp::Ordering;

use crate::interpreter::value::core::DynamicValue;

/// Strict equality (`===`).
///
/// Both the type and the value must match. Numbers compare as IEEE-754
/// values, so `NaN` is never equal to anything and `0 === -0` holds. `null`
/// and `undefined` are only equal to themselves.
///
/// # Example
/// ```
/// use loosetype::interpreter::{
///     evaluator::binary::comparison::strict_eq,
///     value::core::DynamicValue,
/// };
///
/// assert!(!strict_eq(&"5".into(), &5.into()));
/// assert!(!strict_eq(&DynamicValue::Null, &DynamicValue::Undefined));
/// assert!(!strict_eq(&f64::NAN.into(), &f64::NAN.into()));
/// assert!(strict_eq(&"dog".into(), &"dog".into()));
/// ```
#[must_use]
pub fn strict_eq(left: &DynamicValue, right: &DynamicValue) -> bool {
    match (left, right) {
        (DynamicValue::Number(a), DynamicValue::Number(b)) => a == b,
        (DynamicValue::String(a), DynamicValue::String(b)) => a == b,
        (DynamicValue::Boolean(a), DynamicValue::Boolean(b)) => a == b,
        (DynamicValue::Null, DynamicValue::Null)
        | (DynamicValue::Undefined, DynamicValue::Undefined) => true,
        _ => false,
    }
}

/// Loose equality (`==`).
///
/// `null` and `undefined` are equal to each other and to nothing else.
/// Operands of the same type compare strictly, so two strings compare by
/// text. Any other mix is converted to numbers on both sides. `NaN` is never
/// equal to anything.
///
/// # Example
/// ```
/// use loosetype::interpreter::{
///     evaluator::binary::comparison::loose_eq,
///     value::core::DynamicValue,
/// };
///
/// assert!(loose_eq(&"5".into(), &5.into()));
/// assert!(loose_eq(&false.into(), &0.into()));
/// assert!(loose_eq(&DynamicValue::Null, &DynamicValue::Undefined));
/// assert!(!loose_eq(&DynamicValue::Null, &0.into()));
/// assert!(!loose_eq(&"1.0".into(), &"1".into()));
/// ```
#[must_use]
pub fn loose_eq(left: &DynamicValue, right: &DynamicValue) -> bool {
    match (left, right) {
        (DynamicValue::Null | DynamicValue::Undefined,
         DynamicValue::Null | DynamicValue::Undefined) => true,
        (DynamicValue::Null | DynamicValue::Undefined, _)
        | (_, DynamicValue::Null | DynamicValue::Undefined) => false,
        _ if left.same_type(right) => strict_eq(left, right),
        _ => left.to_number() == right.to_number(),
    }
}

/// Orders two values for `<`, `>`, `<=` and `>=`.
///
/// Two strings are ordered by code point. Any other pair is converted to
/// numbers. Returns `None` when either number is `NaN`, which makes every
/// ordering comparison false.
///
/// # Example
/// ```
/// use std::cmp::Ordering;
///
/// use loosetype::interpreter::{
///     evaluator::binary::comparison::ordering,
///     value::core::DynamicValue,
/// };
///
/// assert_eq!(ordering(&"10".into(), &5.into()), Some(Ordering::Greater));
/// assert_eq!(ordering(&"10".into(), &"5".into()), Some(Ordering::Less));
/// assert_eq!(ordering(&DynamicValue::Undefined, &0.into()), None);
/// ```
#[must_use]
pub fn ordering(left: &DynamicValue, right: &DynamicValue) -> Option<Ordering> {
    match (left, right) {
        (DynamicValue::String(a), DynamicValue::String(b)) => Some(a.cmp(b)),
        _ => left.to_number().partial_cmp(&right.to_number()),
    }
}
