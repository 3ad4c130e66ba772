use crate::ast::{BinaryOperator, Position, UnaryOperator, ValueType};

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during execution.
pub enum RuntimeError {
    /// Tried to use or assign a variable that has no binding.
    UnknownVariable {
        /// The name of the variable.
        name:   String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// Declared a variable that already has a binding.
    Redeclaration {
        /// The name of the variable.
        name:   String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// An `if` or `elif` condition did not evaluate to a boolean.
    ConditionNotBoolean {
        /// The kind the condition evaluated to.
        found:  ValueType,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A binary operator is not defined for the operand kinds.
    UnsupportedOperands {
        /// The operator.
        op:     BinaryOperator,
        /// Kind of the left operand.
        left:   ValueType,
        /// Kind of the right operand.
        right:  ValueType,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A unary operator is not defined for the operand kind.
    UnsupportedOperand {
        /// The operator.
        op:      UnaryOperator,
        /// Kind of the operand.
        operand: ValueType,
        /// The source line where the error occurred.
        line:    usize,
        /// The source column where the error occurred.
        column:  usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// Attempted `mod` by zero.
    ModuloByZero {
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// Integer arithmetic overflowed.
    Overflow {
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// An integer is too large to be promoted to a double without losing
    /// precision.
    PrecisionLoss {
        /// The integer being promoted.
        value:  i64,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A literal could not be converted to its tagged type.
    InvalidLiteral {
        /// The literal text.
        text:   String,
        /// The type the literal was tagged with.
        ty:     ValueType,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// An `in` statement could not obtain a value.
    InputUnavailable {
        /// The variable that was to receive the input.
        name:    String,
        /// Why no value was read.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
        /// The source column where the error occurred.
        column:  usize,
    },
    /// Writing the output of an `out` statement failed.
    OutputFailed {
        /// The underlying I/O failure.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
        /// The source column where the error occurred.
        column:  usize,
    },
}

impl RuntimeError {
    /// The position the error points at.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnknownVariable { line, column, .. }
            | Self::Redeclaration { line, column, .. }
            | Self::ConditionNotBoolean { line, column, .. }
            | Self::UnsupportedOperands { line, column, .. }
            | Self::UnsupportedOperand { line, column, .. }
            | Self::DivisionByZero { line, column }
            | Self::ModuloByZero { line, column }
            | Self::Overflow { line, column }
            | Self::PrecisionLoss { line, column, .. }
            | Self::InvalidLiteral { line, column, .. }
            | Self::InputUnavailable { line, column, .. }
            | Self::OutputFailed { line, column, .. } => Position::new(*line, *column),
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, line, column } => {
                write!(f, "Error on line {line}, column {column}: Unknown variable '{name}'.")
            },
            Self::Redeclaration { name, line, column } => write!(f,
                                                                 "Error on line {line}, column {column}: Variable '{name}' is already declared."),
            Self::ConditionNotBoolean { found, line, column } => write!(f,
                                                                        "Error on line {line}, column {column}: Condition must be boolean, found {found}."),
            Self::UnsupportedOperands { op,
                                        left,
                                        right,
                                        line,
                                        column, } => write!(f,
                                                            "Error on line {line}, column {column}: Cannot apply '{op}' to {left} and {right}."),
            Self::UnsupportedOperand { op,
                                       operand,
                                       line,
                                       column, } => write!(f,
                                                           "Error on line {line}, column {column}: Cannot apply unary '{op}' to {operand}."),
            Self::DivisionByZero { line, column } => {
                write!(f, "Error on line {line}, column {column}: Division by zero.")
            },
            Self::ModuloByZero { line, column } => {
                write!(f, "Error on line {line}, column {column}: Modulo by zero.")
            },
            Self::Overflow { line, column } => write!(f,
                                                      "Error on line {line}, column {column}: Integer overflow while trying to compute result."),
            Self::PrecisionLoss { value, line, column } => write!(f,
                                                                  "Error on line {line}, column {column}: Integer {value} cannot be represented exactly as a double."),
            Self::InvalidLiteral { text,
                                   ty,
                                   line,
                                   column, } => write!(f,
                                                       "Error on line {line}, column {column}: Literal '{text}' is not a valid {ty}."),
            Self::InputUnavailable { name,
                                     details,
                                     line,
                                     column, } => write!(f,
                                                         "Error on line {line}, column {column}: Could not read input for '{name}': {details}."),
            Self::OutputFailed { details, line, column } => write!(f,
                                                                   "Error on line {line}, column {column}: Could not write output: {details}."),
        }
    }
}

impl std::error::Error for RuntimeError {}
