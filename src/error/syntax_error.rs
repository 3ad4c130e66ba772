use crate::ast::{Position, ValueType};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during scanning or parsing.
pub enum SyntaxError {
    /// Found a token the grammar does not allow at this point.
    UnexpectedToken {
        /// Description of the token encountered.
        found:    String,
        /// What the parser was looking for.
        expected: String,
        /// The source line where the error occurred.
        line:     usize,
        /// The source column where the error occurred.
        column:   usize,
    },
    /// Reached the end of input while a construct was still open.
    UnexpectedEndOfInput {
        /// What the parser was looking for.
        expected: String,
        /// The source line where the error occurred.
        line:     usize,
        /// The source column where the error occurred.
        column:   usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// Line of the opening parenthesis.
        line:   usize,
        /// Column of the opening parenthesis.
        column: usize,
    },
    /// A literal of one type was used where the variable's declared type
    /// differs.
    TypeMismatch {
        /// The variable being declared or assigned.
        name:     String,
        /// The declared type of the variable.
        expected: ValueType,
        /// The type of the literal.
        found:    ValueType,
        /// The source line where the error occurred.
        line:     usize,
        /// The source column where the error occurred.
        column:   usize,
    },
    /// Parentheses, blocks or prefix operators nest deeper than the parser
    /// accepts.
    NestingTooDeep {
        /// The deepest nesting allowed.
        limit:  usize,
        /// Line of the token that went past the limit.
        line:   usize,
        /// Column of the token that went past the limit.
        column: usize,
    },
    /// Assigned to a name that was never declared with `let`.
    UndeclaredAssignment {
        /// The name of the variable.
        name:   String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
}

impl SyntaxError {
    /// The position the error points at.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnexpectedToken { line, column, .. }
            | Self::UnexpectedEndOfInput { line, column, .. }
            | Self::ExpectedClosingParen { line, column }
            | Self::TypeMismatch { line, column, .. }
            | Self::NestingTooDeep { line, column, .. }
            | Self::UndeclaredAssignment { line, column, .. } => Position::new(*line, *column),
        }
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { found,
                                    expected,
                                    line,
                                    column, } => write!(f,
                                                        "Error on line {line}, column {column}: Expected {expected}, found {found}."),

            Self::UnexpectedEndOfInput { expected, line, column } => write!(f,
                                                                            "Error on line {line}, column {column}: Unexpected end of input, expected {expected}."),

            Self::ExpectedClosingParen { line, column } => write!(f,
                                                                  "Error on line {line}, column {column}: Expected closing parenthesis ')' but none found."),

            Self::TypeMismatch { name,
                                 expected,
                                 found,
                                 line,
                                 column, } => write!(f,
                                                     "Error on line {line}, column {column}: Type mismatch for '{name}': expected {expected}, found {found} literal."),

            Self::NestingTooDeep { limit, line, column } => write!(f,
                                                                   "Error on line {line}, column {column}: Nesting exceeds {limit} levels."),

            Self::UndeclaredAssignment { name, line, column } => write!(f,
                                                                        "Error on line {line}, column {column}: Assignment to undeclared variable '{name}'."),
        }
    }
}

impl std::error::Error for SyntaxError {}
