use crate::interpreter::value::core::DynamicValue;

/// Evaluates `left + right`.
///
/// If either operand is a string, the other is converted to its string form
/// and the two are concatenated. Otherwise both operands are converted to
/// numbers and added.
///
/// # Example
/// ```
/// use loosetype::interpreter::{
///     evaluator::binary::arithmetic::eval_add,
///     value::core::DynamicValue,
/// };
///
/// let joined = eval_add(&"5".into(), &2.into());
/// assert_eq!(joined, DynamicValue::from("52"));
///
/// let sum = eval_add(&DynamicValue::Null, &5.into());
/// assert_eq!(sum, DynamicValue::Number(5.0));
///
/// assert!(eval_add(&DynamicValue::Undefined, &5.into()).is_nan());
/// ```
#[must_use]
pub fn eval_add(left: &DynamicValue, right: &DynamicValue) -> DynamicValue {
    match (left, right) {
        (DynamicValue::String(_), _) | (_, DynamicValue::String(_)) => {
            let left = left.to_js_string();
            let right = right.to_js_string();

            let mut joined = String::with_capacity(left.len() + right.len());
            joined.push_str(&left);
            joined.push_str(&right);
            DynamicValue::from(joined)
        },
        _ => DynamicValue::Number(left.to_number() + right.to_number()),
    }
}

/// Converts both operands to numbers and combines them with `op`.
#[must_use]
pub fn eval_numeric(left: &DynamicValue,
                    right: &DynamicValue,
                    op: impl Fn(f64, f64) -> f64)
                    -> DynamicValue {
    DynamicValue::Number(op(left.to_number(), right.to_number()))
}

/// Floating point remainder. The result takes the sign of the dividend.
///
/// # Example
/// ```
/// use loosetype::interpreter::evaluator::binary::arithmetic::remainder;
///
/// assert_eq!(remainder(17.0, 3.0), 2.0);
/// assert_eq!(remainder(-17.0, 3.0), -2.0);
/// assert!(remainder(1.0, 0.0).is_nan());
/// ```
#[must_use]
pub fn remainder(dividend: f64, divisor: f64) -> f64 {
    dividend % divisor
}

/// Raises `base` to `exponent`.
///
/// Matches `powf` except that a `NaN` exponent always yields `NaN`, and so
/// does a base of `±1` raised to `±Infinity`.
///
/// # Example
/// ```
/// use loosetype::interpreter::evaluator::binary::arithmetic::pow;
///
/// assert_eq!(pow(2.0, 3.0), 8.0);
/// assert_eq!(pow(f64::NAN, 0.0), 1.0);
/// assert!(pow(1.0, f64::INFINITY).is_nan());
/// assert!(pow(1.0, f64::NAN).is_nan());
/// ```
#[must_use]
pub fn pow(base: f64, exponent: f64) -> f64 {
    if exponent.is_nan() || (base.abs() == 1.0 && exponent.is_infinite()) {
        return f64::NAN;
    }

    base.powf(exponent)
}
