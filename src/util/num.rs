use crate::{ast::Position, error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Largest integer magnitude exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_I64_INT: i64 = 9_007_199_254_740_991;

/// Converts an `i64` to `f64` if and only if it is exactly representable.
///
/// Used whenever an integer operand meets a double operand and has to be
/// promoted.
///
/// ## Errors
/// Returns `RuntimeError::PrecisionLoss` if the magnitude of `value` exceeds
/// `MAX_SAFE_I64_INT`.
///
/// ## Example
/// ```
/// use pancake::{
///     ast::Position,
///     error::RuntimeError,
///     util::num::{MAX_SAFE_I64_INT, i64_to_f64_checked},
/// };
///
/// let pos = Position::new(3, 7);
///
/// assert_eq!(i64_to_f64_checked(42, pos).unwrap(), 42.0);
/// assert_eq!(i64_to_f64_checked(-MAX_SAFE_I64_INT, pos).unwrap(), -9_007_199_254_740_991.0);
///
/// let err = i64_to_f64_checked(MAX_SAFE_I64_INT + 1, pos).unwrap_err();
/// assert!(matches!(err, RuntimeError::PrecisionLoss { line: 3, column: 7, .. }));
/// ```
#[allow(clippy::cast_precision_loss)]
pub const fn i64_to_f64_checked(value: i64, pos: Position) -> EvalResult<f64> {
    if value.unsigned_abs() > MAX_SAFE_I64_INT.unsigned_abs() {
        return Err(RuntimeError::PrecisionLoss { value,
                                                 line: pos.line,
                                                 column: pos.column });
    }
    Ok(value as f64)
}
