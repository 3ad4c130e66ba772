/// Entry point for binary operator evaluation.
///
/// Resolves the pair of operand kinds and routes to the matching rule set.
pub mod core;

/// Integer and double arithmetic.
pub mod scalar;

/// Ordering and equality comparisons.
pub mod comparison;

/// Boolean `and`, `or` and equality.
pub mod logic;

/// String concatenation and equality.
pub mod string;
