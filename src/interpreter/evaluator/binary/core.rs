use std::cmp::Ordering;

use crate::{
    ast::{Arity, OperatorTag},
    interpreter::{
        evaluator::{
            binary::{
                arithmetic::{eval_add, eval_numeric, pow, remainder},
                comparison::{loose_eq, ordering, strict_eq},
                logic::eval_logic,
            },
            core::{EvalResult, arity_mismatch},
        },
        value::core::DynamicValue,
    },
};

/// Evaluates a binary operation between two computed values.
///
/// Routes the operator to its handler:
/// - `Add` concatenates or adds, see [`eval_add`].
/// - `Sub`, `Mul`, `Div`, `Mod` and `Pow` convert both sides to numbers.
/// - `Eq`, `NotEq`, `StrictEq` and `StrictNotEq` use loose or strict
///   equality.
/// - `Lt`, `Gt`, `Lte` and `Gte` use [`ordering`], so `NaN` makes them all
///   `false`.
/// - `And` and `Or` pick one of the two operands.
///
/// Both operands are already evaluated here. Callers that need
/// short-circuiting go through
/// [`evaluate_lazy`](crate::interpreter::evaluator::core::evaluate_lazy).
///
/// # Errors
/// Returns `RuntimeError::InvalidOperatorArity` if `op` is a unary operator.
///
/// # Example
/// ```
/// use loosetype::{
///     ast::OperatorTag,
///     interpreter::{evaluator::binary::core::eval_binary, value::core::DynamicValue},
/// };
///
/// let left = DynamicValue::from(true);
/// let right = DynamicValue::from(false);
///
/// let result = eval_binary(OperatorTag::Add, &left, &right);
/// assert_eq!(result.unwrap(), DynamicValue::Number(1.0));
/// ```
pub fn eval_binary(op: OperatorTag,
                   left: &DynamicValue,
                   right: &DynamicValue)
                   -> EvalResult<DynamicValue> {
    use OperatorTag::{
        Add, And, Div, Eq, Gt, Gte, Lt, Lte, Mod, Mul, NotEq, Or, Pow, StrictEq, StrictNotEq,
        Sub,
    };

    let result = match op {
        Add => eval_add(left, right),
        Sub => eval_numeric(left, right, |l, r| l - r),
        Mul => eval_numeric(left, right, |l, r| l * r),
        Div => eval_numeric(left, right, |l, r| l / r),
        Mod => eval_numeric(left, right, remainder),
        Pow => eval_numeric(left, right, pow),

        Eq => DynamicValue::Boolean(loose_eq(left, right)),
        NotEq => DynamicValue::Boolean(!loose_eq(left, right)),
        StrictEq => DynamicValue::Boolean(strict_eq(left, right)),
        StrictNotEq => DynamicValue::Boolean(!strict_eq(left, right)),

        Lt => DynamicValue::Boolean(ordering(left, right).is_some_and(Ordering::is_lt)),
        Gt => DynamicValue::Boolean(ordering(left, right).is_some_and(Ordering::is_gt)),
        Lte => DynamicValue::Boolean(ordering(left, right).is_some_and(Ordering::is_le)),
        Gte => DynamicValue::Boolean(ordering(left, right).is_some_and(Ordering::is_ge)),

        And | Or => return eval_logic(op, left.clone(), || Ok(right.clone())),

        _ => return Err(arity_mismatch(op, Arity::Binary)),
    };

    Ok(result)
}
