use crate::{
    ast::OperatorTag,
    interpreter::{
        evaluator::{binary::core::eval_binary, core::EvalResult},
        value::core::DynamicValue,
    },
};

/// Evaluates a short-circuit logical operation.
///
/// The result is always one of the operands, never a coerced boolean:
/// - `&&` returns `left` if it is falsy, otherwise the right operand.
/// - `||` returns `left` if it is truthy, otherwise the right operand.
///
/// `right` is only called when its value becomes the result. Any other
/// operator evaluates `right` and goes through
/// [`eval_binary`](crate::interpreter::evaluator::binary::core::eval_binary).
///
/// # Errors
/// Returns the error produced by `right`, if it is called and fails, or
/// `RuntimeError::InvalidOperatorArity` for a unary operator.
///
/// # Example
/// ```
/// use loosetype::{
///     ast::OperatorTag,
///     interpreter::{evaluator::binary::logic::eval_logic, value::core::DynamicValue},
/// };
///
/// let fruit = eval_logic(OperatorTag::Or, 0.into(), || Ok("apple".into()));
/// assert_eq!(fruit.unwrap(), DynamicValue::from("apple"));
///
/// let empty = eval_logic(OperatorTag::And, "".into(), || Ok(true.into()));
/// assert_eq!(empty.unwrap(), DynamicValue::from(""));
///
/// let sum = eval_logic(OperatorTag::Add, 0.into(), || Ok("apple".into()));
/// assert_eq!(sum.unwrap(), DynamicValue::from("0apple"));
/// ```
pub fn eval_logic<F>(op: OperatorTag, left: DynamicValue, right: F) -> EvalResult<DynamicValue>
    where F: FnOnce() -> EvalResult<DynamicValue>
{
    let decided = match op {
        OperatorTag::And => !left.to_boolean(),
        OperatorTag::Or => left.to_boolean(),
        _ => return eval_binary(op, &left, &right()?),
    };

    if decided { Ok(left) } else { right() }
}
