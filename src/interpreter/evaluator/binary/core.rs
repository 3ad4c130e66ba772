use crate::{
    ast::{BinaryOperator, Position},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::{
                logic::eval_logic,
                scalar::{eval_double_op, eval_integer_op},
                string::eval_string_op,
            },
            core::EvalResult,
        },
        value::core::Value,
    },
    util::num::i64_to_f64_checked,
};

/// Evaluates a binary operation between two already evaluated values.
///
/// The pair of runtime kinds selects the rule set:
/// - two integers use integer arithmetic and comparison,
/// - two doubles, or an integer and a double, use double arithmetic and
///   comparison after promoting the integer,
/// - two strings support `+`, `==` and `!=`,
/// - two booleans support `and`, `or`, `==` and `!=`.
///
/// # Errors
/// Returns `RuntimeError::UnsupportedOperands` for any other kind pair or an
/// operator the pair does not define, and the arithmetic errors of the
/// selected rule set.
///
/// # Example
/// ```
/// use pancake::{
///     ast::{BinaryOperator, Position},
///     interpreter::{evaluator::binary::core::eval_binary, value::core::Value},
/// };
///
/// let pos = Position::new(1, 3);
///
/// let sum = eval_binary(BinaryOperator::Add, &Value::Integer(3), &Value::Double(0.5), pos);
/// assert_eq!(sum.unwrap(), Value::Double(3.5));
///
/// let mixed = eval_binary(BinaryOperator::Add, &Value::Integer(3), &Value::from("x"), pos);
/// assert!(mixed.is_err());
/// ```
pub fn eval_binary(op: BinaryOperator,
                   left: &Value,
                   right: &Value,
                   pos: Position)
                   -> EvalResult<Value> {
    use Value::{Bool, Double, Integer, String};

    let result = match (left, right) {
        (Integer(a), Integer(b)) => eval_integer_op(op, *a, *b, pos)?,
        (Integer(a), Double(b)) => eval_double_op(op, i64_to_f64_checked(*a, pos)?, *b, pos)?,
        (Double(a), Integer(b)) => eval_double_op(op, *a, i64_to_f64_checked(*b, pos)?, pos)?,
        (Double(a), Double(b)) => eval_double_op(op, *a, *b, pos)?,
        (String(a), String(b)) => eval_string_op(op, a, b),
        (Bool(a), Bool(b)) => eval_logic(op, *a, *b),
        _ => None,
    };

    result.ok_or_else(|| unsupported(op, left, right, pos))
}

fn unsupported(op: BinaryOperator, left: &Value, right: &Value, pos: Position) -> RuntimeError {
    RuntimeError::UnsupportedOperands { op,
                                        left: left.kind(),
                                        right: right.kind(),
                                        line: pos.line,
                                        column: pos.column }
}
