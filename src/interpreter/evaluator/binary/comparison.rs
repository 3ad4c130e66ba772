use crate::{ast::BinaryOperator, interpreter::value::core::Value};

/// Evaluates one of the six comparison operators on two operands of the same
/// kind.
///
/// Returns `None` if `op` is not a comparison operator, leaving the caller to
/// report the operator as unsupported.
///
/// # Example
/// ```
/// use pancake::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::comparison::eval_comparison, value::core::Value},
/// };
///
/// assert_eq!(eval_comparison(BinaryOperator::LessEqual, &2, &2), Some(Value::Bool(true)));
/// assert_eq!(eval_comparison(BinaryOperator::Greater, &1.5, &2.5), Some(Value::Bool(false)));
/// assert_eq!(eval_comparison(BinaryOperator::Add, &1, &2), None);
/// ```
pub fn eval_comparison<T: PartialOrd>(op: BinaryOperator, left: &T, right: &T) -> Option<Value> {
    use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

    let result = match op {
        Equal => left == right,
        NotEqual => left != right,
        Less => left < right,
        Greater => left > right,
        LessEqual => left <= right,
        GreaterEqual => left >= right,
        _ => return None,
    };
    Some(Value::Bool(result))
}

/// Evaluates `==` or `!=` for kinds that have equality but no ordering.
///
/// Returns `None` for every other operator.
pub fn eval_equality<T: PartialEq + ?Sized>(op: BinaryOperator,
                                            left: &T,
                                            right: &T)
                                            -> Option<Value> {
    match op {
        BinaryOperator::Equal => Some(Value::Bool(left == right)),
        BinaryOperator::NotEqual => Some(Value::Bool(left != right)),
        _ => None,
    }
}
