/// Parser entry points and shared result type.
///
/// Holds [`parse`](core::parse), which turns a whole token stream into
/// statements, and [`parse_expression`](core::parse_expression).
pub mod core;

/// Statement parsing.
///
/// Dispatches on the leading token to declarations, assignments, `out`, `in`
/// and `if` statements, and performs the literal type checks against the
/// type registry.
pub mod statement;

/// Block parsing.
///
/// Collects statements until a closing brace or the end of input, skipping
/// newlines and stray semicolons between them.
pub mod block;

/// Binary operator parsing by precedence climbing.
pub mod binary;

/// Unary and primary expressions: prefix operators, literals, variables and
/// parenthesized groups.
pub mod unary;

/// Small helpers shared by the parsing functions.
pub mod utils;
