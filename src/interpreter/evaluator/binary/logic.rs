use crate::{
    ast::BinaryOperator,
    interpreter::{evaluator::binary::comparison::eval_equality, value::core::Value},
};

/// Evaluates a binary operation on two booleans.
///
/// Both operands are already evaluated, so `and` and `or` compute the plain
/// logical combination without short-circuiting. `==` and `!=` compare the
/// two values. Returns `None` for any other operator.
///
/// # Example
/// ```
/// use pancake::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::logic::eval_logic, value::core::Value},
/// };
///
/// assert_eq!(eval_logic(BinaryOperator::Or, false, true), Some(Value::Bool(true)));
/// assert_eq!(eval_logic(BinaryOperator::Less, false, true), None);
/// ```
#[must_use]
pub fn eval_logic(op: BinaryOperator, left: bool, right: bool) -> Option<Value> {
    match op {
        BinaryOperator::And => Some(Value::Bool(left && right)),
        BinaryOperator::Or => Some(Value::Bool(left || right)),
        _ => eval_equality(op, &left, &right),
    }
}
