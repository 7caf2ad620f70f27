use tracing::trace;

use crate::{
    ast::{Arity, Expr, OperatorTag},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::{core::eval_binary, logic::eval_logic},
            unary::eval_unary,
        },
        value::core::DynamicValue,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Builds the error for an operator that received `supplied` operands.
#[must_use]
pub const fn arity_mismatch(op: OperatorTag, supplied: Arity) -> RuntimeError {
    RuntimeError::InvalidOperatorArity { op,
                                         expected: op.arity().operand_count(),
                                         found: supplied.operand_count() }
}

/// Checks that `op` accepts the number of operands described by `supplied`.
///
/// # Example
/// ```
/// use loosetype::{
///     ast::{Arity, OperatorTag},
///     interpreter::evaluator::core::check_arity,
/// };
///
/// assert!(check_arity(OperatorTag::Mul, Arity::Binary).is_ok());
/// assert!(check_arity(OperatorTag::Not, Arity::Binary).is_err());
/// ```
pub fn check_arity(op: OperatorTag, supplied: Arity) -> EvalResult<()> {
    if op.arity() == supplied {
        Ok(())
    } else {
        Err(arity_mismatch(op, supplied))
    }
}

/// Applies an operator to one or two operands.
///
/// This is the entry point of the coercion engine. Pass `None` as `right` for
/// the unary operators (`Not`, `Neg`, `Plus`, `TypeOf`, `Void`) and
/// `Some(..)` for every other operator. Type mismatches never fail: operands
/// are coerced and may produce `NaN`.
///
/// # Errors
/// Returns `RuntimeError::InvalidOperatorArity` if the operand count does not
/// match the operator.
///
/// # Example
/// ```
/// use loosetype::{
///     ast::OperatorTag,
///     interpreter::{evaluator::core::evaluate, value::core::DynamicValue},
/// };
///
/// let joined = evaluate(OperatorTag::Add, "5".into(), Some(2.into())).unwrap();
/// assert_eq!(joined, DynamicValue::from("52"));
///
/// let difference = evaluate(OperatorTag::Sub, "5".into(), Some(2.into())).unwrap();
/// assert_eq!(difference, DynamicValue::Number(3.0));
///
/// assert!(evaluate(OperatorTag::Not, true.into(), Some(false.into())).is_err());
/// ```
pub fn evaluate(op: OperatorTag,
                left: DynamicValue,
                right: Option<DynamicValue>)
                -> EvalResult<DynamicValue> {
    match right {
        Some(right) => evaluate_lazy(op, left, || Ok(right)),
        None => {
            trace!(%op, operand = %left.inspect(), "evaluating unary operator");
            eval_unary(op, &left)
        },
    }
}

/// Applies a binary operator whose right operand has not been computed yet.
///
/// `right` is called at most once, and only when the operator needs it: `&&`
/// skips it when `left` is falsy and `||` skips it when `left` is truthy. An
/// error from `right` is returned unchanged. A unary operator is rejected
/// before `right` is touched.
///
/// # Errors
/// Returns `RuntimeError::InvalidOperatorArity` if `op` is unary, or whatever
/// error `right` produces.
///
/// # Example
/// ```
/// use loosetype::{
///     ast::OperatorTag,
///     interpreter::{evaluator::core::evaluate_lazy, value::core::DynamicValue},
/// };
///
/// let mut touched = false;
/// let result = evaluate_lazy(OperatorTag::And, 0.into(), || {
///                  touched = true;
///                  Ok("apple".into())
///              }).unwrap();
///
/// assert_eq!(result, DynamicValue::Number(0.0));
/// assert!(!touched);
/// ```
pub fn evaluate_lazy<F>(op: OperatorTag, left: DynamicValue, right: F) -> EvalResult<DynamicValue>
    where F: FnOnce() -> EvalResult<DynamicValue>
{
    check_arity(op, Arity::Binary)?;
    trace!(%op, left = %left.inspect(), "evaluating binary operator");

    match op {
        OperatorTag::And | OperatorTag::Or => eval_logic(op, left, right),
        _ => eval_binary(op, &left, &right()?),
    }
}

/// Evaluates an expression tree.
///
/// Literals evaluate to themselves. Operators go through [`evaluate`] and
/// [`evaluate_lazy`], so the right operand of `&&` and `||` and the unused
/// branch of a conditional are never evaluated.
///
/// # Errors
/// Propagates any `RuntimeError` raised by an operator.
///
/// # Example
/// ```
/// use loosetype::{
///     ast::{Expr, OperatorTag},
///     interpreter::{evaluator::core::eval_expr, value::core::DynamicValue},
/// };
///
/// let expr = Expr::BinaryOp { left:  Box::new(Expr::Literal { value: "10".into(),
///                                                             line:  1, }),
///                             op:    OperatorTag::Mul,
///                             right: Box::new(Expr::Literal { value: "2".into(),
///                                                             line:  1, }),
///                             line:  1, };
///
/// assert_eq!(eval_expr(&expr).unwrap(), DynamicValue::Number(20.0));
/// ```
pub fn eval_expr(expr: &Expr) -> EvalResult<DynamicValue> {
    match expr {
        Expr::Literal { value, .. } => Ok(value.clone()),
        Expr::UnaryOp { op, expr, .. } => evaluate(*op, eval_expr(expr)?, None),
        Expr::BinaryOp { left, op, right, .. } => {
            evaluate_lazy(*op, eval_expr(left)?, || eval_expr(right))
        },
        Expr::Conditional { condition,
                            then_branch,
                            else_branch,
                            .. } => {
            if eval_expr(condition)?.to_boolean() {
                eval_expr(then_branch)
            } else {
                eval_expr(else_branch)
            }
        },
    }
}
