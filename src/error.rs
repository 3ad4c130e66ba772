/// Syntax errors.
///
/// Defines all error types that can occur while turning source text into
/// statements: unexpected tokens, missing delimiters, and the parser's
/// literal type checks at declaration and assignment sites.
pub mod syntax_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during execution, such as
/// division by zero, unsupported operand kinds, unknown variables, or a failed
/// input read.
pub mod runtime_error;

pub use runtime_error::RuntimeError;
pub use syntax_error::SyntaxError;

/// Either kind of failure, as surfaced by a [`Session`](crate::Session).
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The unit failed to parse; nothing in it was executed.
    Syntax(SyntaxError),
    /// The unit parsed but a statement failed while executing.
    Runtime(RuntimeError),
}

impl From<SyntaxError> for Error {
    fn from(error: SyntaxError) -> Self {
        Self::Syntax(error)
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax(e) => write!(f, "Syntax Error: {e}"),
            Self::Runtime(e) => write!(f, "Runtime Error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Syntax(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
