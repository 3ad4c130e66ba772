use crate::{
    ast::{Position, UnaryOperator},
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates a unary operation on a value.
///
/// Supported operators:
/// - `Negate`: numeric negation for integers and doubles. Negating
///   `i64::MIN` overflows and is an error.
/// - `Not`: boolean negation.
///
/// # Errors
/// Returns `RuntimeError::UnsupportedOperand` if the operand kind does not
/// fit the operator, and `RuntimeError::Overflow` as described above.
///
/// # Example
/// ```
/// use pancake::{
///     ast::{Position, UnaryOperator},
///     interpreter::{evaluator::unary::eval_unary, value::core::Value},
/// };
///
/// let pos = Position::new(1, 1);
///
/// let v = eval_unary(UnaryOperator::Negate, &Value::Integer(5), pos).unwrap();
/// assert_eq!(v, Value::Integer(-5));
///
/// let v = eval_unary(UnaryOperator::Not, &Value::Bool(false), pos).unwrap();
/// assert_eq!(v, Value::Bool(true));
///
/// assert!(eval_unary(UnaryOperator::Not, &Value::Integer(0), pos).is_err());
/// ```
pub fn eval_unary(op: UnaryOperator, value: &Value, pos: Position) -> EvalResult<Value> {
    match (op, value) {
        (UnaryOperator::Negate, Value::Integer(n)) => {
            n.checked_neg()
             .map(Value::Integer)
             .ok_or(RuntimeError::Overflow { line:   pos.line,
                                             column: pos.column, })
        },
        (UnaryOperator::Negate, Value::Double(x)) => Ok(Value::Double(-x)),
        (UnaryOperator::Not, Value::Bool(b)) => Ok(Value::Bool(!b)),
        _ => Err(RuntimeError::UnsupportedOperand { op,
                                                    operand: value.kind(),
                                                    line: pos.line,
                                                    column: pos.column }),
    }
}
