/// Core evaluation logic and interpreter state.
///
/// Contains the `Interpreter`, which owns the environment, the input source
/// and the output sink, and the expression evaluator.
pub mod core;

/// The flat runtime environment mapping names to values.
pub mod environment;

/// Input sources for `in` statements.
///
/// Declares the `InputSource` capability and its implementations: an
/// interactive line reader and a pre-seeded queue for batch runs.
pub mod input;

/// Statement execution.
///
/// Implements declarations, assignments, `out`, `in` and conditionals.
pub mod statement;

/// Unary operator evaluation.
///
/// Handles negation and logical not.
pub mod unary;

/// Binary operator evaluation.
///
/// Dispatches on the pair of operand kinds to arithmetic, comparison,
/// string and logical rules.
pub mod binary;
