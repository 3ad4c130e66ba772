/// The evaluator module executes statements and computes expression values.
///
/// The evaluator walks the AST once, top to bottom, against a single flat
/// environment. It owns the input source read by `in` and the sink written
/// by `out`.
///
/// # Responsibilities
/// - Evaluates expressions over the four runtime value kinds.
/// - Executes declarations, assignments, input, output and conditionals.
/// - Reports runtime errors such as division by zero or unsupported operand
///   kinds.
pub mod evaluator;
/// The lexer module turns source text into tokens.
///
/// The lexer never fails: characters it does not recognise become `Unknown`
/// tokens for the parser to reject. Every token carries its line and column,
/// and the stream always ends with one end-of-file token.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// the statements of one unit, checking literal initializers and assigned
/// literals against the declared variable types.
///
/// # Responsibilities
/// - Converts tokens into statements and expressions.
/// - Resolves operator precedence.
/// - Reports the first syntax error with its location.
pub mod parser;
/// The type registry consulted by the parser.
pub mod registry;
/// Sessions that keep declarations and variables across execution units.
pub mod session;
/// The value module defines the runtime value type.
pub mod value;
