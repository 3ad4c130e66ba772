use std::fmt;

use crate::{
    ast::{Position, ValueType},
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
};

/// Represents a runtime value in the interpreter.
///
/// Values are produced by evaluating expressions and stored in the
/// environment. They are copied on assignment, so two variables never share
/// a value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64 bit signed integer.
    Integer(i64),
    /// A double precision floating-point number.
    Double(f64),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators, `and`, `or` and `!`. Used as the
    /// condition of `if` and `elif`, which must evaluate to `Bool`.
    Bool(bool),
    /// A string.
    String(String),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl Value {
    /// The kind of the value.
    ///
    /// ```
    /// use pancake::{ast::ValueType, interpreter::value::core::Value};
    ///
    /// assert_eq!(Value::Double(1.5).kind(), ValueType::Double);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ValueType {
        match self {
            Self::Integer(_) => ValueType::Int,
            Self::Double(_) => ValueType::Double,
            Self::Bool(_) => ValueType::Bool,
            Self::String(_) => ValueType::String,
        }
    }

    /// Converts literal source text to a value of the tagged type.
    ///
    /// # Errors
    /// Returns `RuntimeError::InvalidLiteral` if the text does not fit the
    /// type, such as an integer literal beyond the `i64` range.
    ///
    /// # Example
    /// ```
    /// use pancake::{
    ///     ast::{Position, ValueType},
    ///     interpreter::value::core::Value,
    /// };
    ///
    /// let pos = Position::new(1, 1);
    ///
    /// assert_eq!(Value::from_literal("42", ValueType::Int, pos).unwrap(),
    ///            Value::Integer(42));
    /// assert!(Value::from_literal("99999999999999999999", ValueType::Int, pos).is_err());
    /// ```
    pub fn from_literal(text: &str, ty: ValueType, pos: Position) -> EvalResult<Self> {
        let invalid = || RuntimeError::InvalidLiteral { text: text.to_string(),
                                                        ty,
                                                        line: pos.line,
                                                        column: pos.column };
        match ty {
            ValueType::Int => text.parse().map(Self::Integer).map_err(|_| invalid()),
            ValueType::Double => text.parse().map(Self::Double).map_err(|_| invalid()),
            ValueType::Bool => match text {
                "true" => Ok(Self::Bool(true)),
                "false" => Ok(Self::Bool(false)),
                _ => Err(invalid()),
            },
            ValueType::String => Ok(Self::String(text.to_string())),
        }
    }

    /// Interprets a line of interactive input for a variable whose current
    /// value is `current`.
    ///
    /// If the variable already holds an integer or a double and the text
    /// parses as that kind, the parsed number is returned. In every other
    /// case the text is kept as a string.
    ///
    /// ```
    /// use pancake::interpreter::value::core::Value;
    ///
    /// let current = Value::Integer(0);
    ///
    /// assert_eq!(Value::coerce_input("12".to_string(), Some(&current)),
    ///            Value::Integer(12));
    /// assert_eq!(Value::coerce_input("twelve".to_string(), Some(&current)),
    ///            Value::String("twelve".to_string()));
    /// assert_eq!(Value::coerce_input("12".to_string(), None),
    ///            Value::String("12".to_string()));
    /// ```
    #[must_use]
    pub fn coerce_input(text: String, current: Option<&Self>) -> Self {
        match current {
            Some(Self::Integer(_)) => {
                if let Ok(n) = text.trim().parse() {
                    return Self::Integer(n);
                }
            },
            Some(Self::Double(_)) => {
                if let Ok(x) = text.trim().parse() {
                    return Self::Double(x);
                }
            },
            _ => {},
        }
        Self::String(text)
    }
}

impl fmt::Display for Value {
    /// The textual form written by `out`: numbers in plain decimal form,
    /// booleans as `true`/`false`, strings verbatim.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Double(x) => write!(f, "{x}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::String(s) => f.write_str(s),
        }
    }
}
