use crate::{
    ast::{BinaryOperator, Position},
    error::RuntimeError,
    interpreter::{
        evaluator::{binary::comparison::eval_comparison, core::EvalResult},
        value::core::Value,
    },
};

/// Evaluates a binary operation on two integers.
///
/// Arithmetic is checked: a result outside the `i64` range is an error
/// rather than a wrapped value. Division truncates toward zero and the
/// remainder of `mod` takes the sign of the dividend.
///
/// Returns `Ok(None)` for operators integers do not define (`and`, `or`).
///
/// # Errors
/// - `RuntimeError::DivisionByZero` for `/` by zero.
/// - `RuntimeError::ModuloByZero` for `mod` by zero.
/// - `RuntimeError::Overflow` if the result does not fit in an `i64`.
///
/// # Example
/// ```
/// use pancake::{
///     ast::{BinaryOperator, Position},
///     interpreter::{evaluator::binary::scalar::eval_integer_op, value::core::Value},
/// };
///
/// let pos = Position::new(1, 1);
///
/// assert_eq!(eval_integer_op(BinaryOperator::Div, -7, 2, pos).unwrap(), Some(Value::Integer(-3)));
/// assert_eq!(eval_integer_op(BinaryOperator::Mod, -7, 2, pos).unwrap(), Some(Value::Integer(-1)));
/// assert!(eval_integer_op(BinaryOperator::Mod, 1, 0, pos).is_err());
/// ```
pub fn eval_integer_op(op: BinaryOperator,
                       left: i64,
                       right: i64,
                       pos: Position)
                       -> EvalResult<Option<Value>> {
    use BinaryOperator::{Add, Div, Mod, Mul, Sub};

    let overflow = || RuntimeError::Overflow { line:   pos.line,
                                               column: pos.column, };

    let result = match op {
        Add => left.checked_add(right).ok_or_else(overflow)?,
        Sub => left.checked_sub(right).ok_or_else(overflow)?,
        Mul => left.checked_mul(right).ok_or_else(overflow)?,
        Div => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero { line:   pos.line,
                                                          column: pos.column, });
            }
            left.checked_div(right).ok_or_else(overflow)?
        },
        Mod => {
            if right == 0 {
                return Err(RuntimeError::ModuloByZero { line:   pos.line,
                                                        column: pos.column, });
            }
            left.checked_rem(right).ok_or_else(overflow)?
        },
        _ => return Ok(eval_comparison(op, &left, &right)),
    };
    Ok(Some(Value::Integer(result)))
}

/// Evaluates a binary operation on two doubles.
///
/// Supports `+ - * /` and the comparisons. `mod` is not defined on doubles
/// and, like `and` and `or`, yields `Ok(None)`.
///
/// # Errors
/// Returns `RuntimeError::DivisionByZero` if the divisor of `/` is exactly
/// zero.
///
/// # Example
/// ```
/// use pancake::{
///     ast::{BinaryOperator, Position},
///     interpreter::{evaluator::binary::scalar::eval_double_op, value::core::Value},
/// };
///
/// let pos = Position::new(1, 1);
///
/// assert_eq!(eval_double_op(BinaryOperator::Mul, 1.5, 2.0, pos).unwrap(), Some(Value::Double(3.0)));
/// assert_eq!(eval_double_op(BinaryOperator::Mod, 1.5, 2.0, pos).unwrap(), None);
/// assert!(eval_double_op(BinaryOperator::Div, 1.5, 0.0, pos).is_err());
/// ```
pub fn eval_double_op(op: BinaryOperator,
                      left: f64,
                      right: f64,
                      pos: Position)
                      -> EvalResult<Option<Value>> {
    use BinaryOperator::{Add, Div, Mod, Mul, Sub};

    let result = match op {
        Add => left + right,
        Sub => left - right,
        Mul => left * right,
        Div => {
            if right == 0.0 {
                return Err(RuntimeError::DivisionByZero { line:   pos.line,
                                                          column: pos.column, });
            }
            left / right
        },
        Mod => return Ok(None),
        _ => return Ok(eval_comparison(op, &left, &right)),
    };
    Ok(Some(Value::Double(result)))
}
