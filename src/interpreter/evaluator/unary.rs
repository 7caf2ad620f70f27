use crate::{
    ast::{Arity, OperatorTag},
    interpreter::{
        evaluator::core::{EvalResult, arity_mismatch},
        value::core::DynamicValue,
    },
};

/// Evaluates a unary operation on a value.
///
/// Supported operators:
/// - `Not`: negated truthiness, always a boolean.
/// - `Neg`: numeric negation after conversion to a number.
/// - `Plus`: conversion to a number.
/// - `TypeOf`: the type name as a string (`null` reports `"object"`).
/// - `Void`: always `undefined`.
///
/// # Errors
/// Returns `RuntimeError::InvalidOperatorArity` if `op` is a binary operator.
///
/// # Example
/// ```
/// use loosetype::{
///     ast::OperatorTag,
///     interpreter::{evaluator::unary::eval_unary, value::core::DynamicValue},
/// };
///
/// let v = eval_unary(OperatorTag::Not, &DynamicValue::from("")).unwrap();
/// assert_eq!(v, DynamicValue::Boolean(true));
///
/// let v = eval_unary(OperatorTag::Neg, &DynamicValue::from("5")).unwrap();
/// assert_eq!(v, DynamicValue::Number(-5.0));
///
/// let v = eval_unary(OperatorTag::TypeOf, &DynamicValue::Null).unwrap();
/// assert_eq!(v, DynamicValue::from("object"));
/// ```
pub fn eval_unary(op: OperatorTag, value: &DynamicValue) -> EvalResult<DynamicValue> {
    match op {
        OperatorTag::Not => Ok(DynamicValue::Boolean(!value.to_boolean())),
        OperatorTag::Neg => Ok(DynamicValue::Number(-value.to_number())),
        OperatorTag::Plus => Ok(DynamicValue::Number(value.to_number())),
        OperatorTag::TypeOf => Ok(DynamicValue::from(value.type_of())),
        OperatorTag::Void => Ok(DynamicValue::Undefined),
        _ => Err(arity_mismatch(op, Arity::Unary)),
    }
}
