use std::io::{Stdout, Write};

use tracing::debug;

use crate::{
    ast::Statement,
    error::{Error, RuntimeError, SyntaxError},
    interpreter::{
        evaluator::core::Interpreter,
        lexer::{Token, tokenize},
        parser::core::parse,
        registry::TypeRegistry,
    },
};

/// The state that persists across execution units.
///
/// A session owns one [`TypeRegistry`] and one [`Interpreter`]. Each call to
/// [`run`](Self::run) scans, parses and executes one unit (an interactive
/// line or a whole file) against that state, so variables declared by one
/// unit stay visible to the next. After a failure the session keeps the
/// state of the last successfully executed statement and can keep running.
///
/// # Example
/// ```
/// use pancake::{Interpreter, Session};
///
/// let mut session = Session::with_interpreter(Interpreter::with_output(Vec::new()));
///
/// session.run("let int x = 20;").unwrap();
/// session.run("x = x + 1;").unwrap();
/// assert!(session.run("out -> y;").is_err());
/// session.run("out -> x * 2;").unwrap();
///
/// assert_eq!(session.interpreter().output(), b"42\n");
/// ```
pub struct Session<W = Stdout> {
    registry:    TypeRegistry,
    interpreter: Interpreter<W>,
}

impl Session<Stdout> {
    /// Creates a session printing to standard output and reading standard
    /// input.
    #[must_use]
    pub fn new() -> Self {
        Self::with_interpreter(Interpreter::new())
    }
}

impl Default for Session<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Session<W> {
    /// Creates a session around a configured interpreter, with an empty type
    /// registry.
    pub fn with_interpreter(interpreter: Interpreter<W>) -> Self {
        Self { registry: TypeRegistry::new(),
               interpreter }
    }

    /// Parses tokens against the session's type registry.
    ///
    /// # Errors
    /// Returns the first `SyntaxError` in the unit.
    pub fn parse(&mut self, tokens: &[Token]) -> Result<Vec<Statement>, SyntaxError> {
        parse(tokens, &mut self.registry)
    }

    /// Executes statements against the session's environment.
    ///
    /// # Errors
    /// Returns the `RuntimeError` of the first statement that fails.
    pub fn execute(&mut self, statements: &[Statement]) -> Result<(), RuntimeError> {
        self.interpreter.execute(statements)
    }

    /// Scans, parses and executes one unit of source text.
    ///
    /// Nothing is executed if the unit fails to parse.
    ///
    /// # Errors
    /// Returns `Error::Syntax` if the unit does not parse and
    /// `Error::Runtime` if a statement fails.
    pub fn run(&mut self, source: &str) -> Result<(), Error> {
        let tokens = tokenize(source);
        let statements = self.parse(&tokens)?;
        debug!(statements = statements.len(), "parsed unit");
        self.execute(&statements)?;
        Ok(())
    }

    /// The declared variable types.
    pub const fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// The interpreter running this session.
    pub const fn interpreter(&self) -> &Interpreter<W> {
        &self.interpreter
    }

    /// Mutable access to the interpreter, for example to replace its input
    /// source.
    pub const fn interpreter_mut(&mut self) -> &mut Interpreter<W> {
        &mut self.interpreter
    }

    /// Consumes the session and returns its interpreter.
    pub fn into_interpreter(self) -> Interpreter<W> {
        self.interpreter
    }
}
