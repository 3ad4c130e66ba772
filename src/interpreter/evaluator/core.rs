use std::io::{self, Stdout, Write};

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::core::eval_binary,
            environment::Environment,
            input::{InputSource, StdinInput},
            unary::eval_unary,
        },
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Executes statements and evaluates expressions.
///
/// An interpreter owns the single flat [`Environment`] of a program, the
/// [`InputSource`] read by `in` statements, and the sink `out` statements
/// write to. Keeping one interpreter alive across several
/// [`execute`](Self::execute) calls keeps the variables of earlier calls,
/// which is how an interactive session works.
///
/// ## Usage
///
/// ```
/// use pancake::interpreter::{
///     evaluator::{core::Interpreter, input::QueuedInput},
///     lexer::tokenize,
///     parser::core::parse,
///     registry::TypeRegistry,
/// };
///
/// let mut registry = TypeRegistry::new();
/// let statements = parse(&tokenize("in <- name; out -> \"hi \" -> name;"), &mut registry).unwrap();
///
/// let mut interpreter = Interpreter::with_output(Vec::new()).with_input(QueuedInput::new(["Ada"]));
/// interpreter.execute(&statements).unwrap();
///
/// assert_eq!(interpreter.output(), b"hi Ada\n");
/// ```
pub struct Interpreter<W = Stdout> {
    pub(crate) environment: Environment,
    pub(crate) input:       Box<dyn InputSource>,
    pub(crate) output:      W,
}

impl Interpreter<Stdout> {
    /// Creates an interpreter that prints to standard output and reads
    /// standard input.
    #[must_use]
    pub fn new() -> Self {
        Self::with_output(io::stdout())
    }
}

impl Default for Interpreter<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Interpreter<W> {
    /// Creates an interpreter writing to `output`, with an empty environment
    /// and standard input as its input source.
    pub fn with_output(output: W) -> Self {
        Self { environment: Environment::new(),
               input: Box::new(StdinInput),
               output }
    }

    /// Replaces the input source.
    #[must_use]
    pub fn with_input(mut self, input: impl InputSource + 'static) -> Self {
        self.input = Box::new(input);
        self
    }

    /// Replaces the input source of a running interpreter.
    pub fn set_input(&mut self, input: Box<dyn InputSource>) {
        self.input = input;
    }

    /// The variables bound so far.
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// The output sink.
    pub const fn output(&self) -> &W {
        &self.output
    }

    /// Consumes the interpreter and returns its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// Binary operands are evaluated left first, then right, then combined;
    /// there is no short-circuiting.
    ///
    /// # Errors
    /// Returns a `RuntimeError` for unknown variables, malformed literals,
    /// and any operator failure.
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { text, ty, pos } => Value::from_literal(text, *ty, *pos),
            Expr::Variable { name, pos } => {
                self.environment
                    .get(name)
                    .cloned()
                    .ok_or_else(|| RuntimeError::UnknownVariable { name:   name.clone(),
                                                                   line:   pos.line,
                                                                   column: pos.column, })
            },
            Expr::UnaryOp { op, expr, pos } => {
                let value = self.eval(expr)?;
                eval_unary(*op, &value, *pos)
            },
            Expr::BinaryOp { left, op, right, pos } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                eval_binary(*op, &left, &right, *pos)
            },
        }
    }
}
