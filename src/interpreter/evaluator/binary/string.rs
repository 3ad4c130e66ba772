use crate::{
    ast::BinaryOperator,
    interpreter::{evaluator::binary::comparison::eval_equality, value::core::Value},
};

/// Evaluates a binary operation on two strings.
///
/// `+` concatenates; `==` and `!=` compare by value. Strings have no
/// ordering, so every other operator yields `None`.
///
/// ```
/// use pancake::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::string::eval_string_op, value::core::Value},
/// };
///
/// assert_eq!(eval_string_op(BinaryOperator::Add, "pan", "cake"), Some(Value::from("pancake")));
/// assert_eq!(eval_string_op(BinaryOperator::Less, "a", "b"), None);
/// ```
#[must_use]
pub fn eval_string_op(op: BinaryOperator, left: &str, right: &str) -> Option<Value> {
    match op {
        BinaryOperator::Add => Some(Value::String(format!("{left}{right}"))),
        _ => eval_equality(op, left, right),
    }
}
