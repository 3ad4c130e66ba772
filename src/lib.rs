//! # pancake
//!
//! pancake is an interpreter for a small, statically declared scripting
//! language. It scans source text into tokens, parses them into statements
//! while checking literal types against the declared variable types, and
//! executes the statements against a single flat environment.
//!
//! ```text
//! let int total = 2;
//! in <- name;
//! if (total > 1) {
//!     out -> "hello " -> name -> ", total is " -> total * 21;
//! } else {
//!     out -> "nothing to do";
//! }
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed code.
///
/// This module declares the `Statement` and `Expr` enums and the operator and
/// type tags they use. The AST is built by the parser and walked by the
/// evaluator.
///
/// # Responsibilities
/// - Defines statement and expression types for all language constructs.
/// - Attaches source positions to AST nodes for error reporting.
/// - Renders statement trees as indented text for inspection.
pub mod ast;
/// Provides the error types for parsing and execution.
///
/// Every error carries the line and column it points at and renders as
/// `Error on line L, column C: message`.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations, and provides sessions that keep state across units of
/// source text.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

pub use crate::{
    error::Error,
    interpreter::{
        evaluator::{
            core::Interpreter,
            input::{InputSource, LineInput, QueuedInput, StdinInput},
        },
        lexer::{Token, TokenKind, tokenize},
        parser::core::parse,
        registry::TypeRegistry,
        session::Session,
        value::core::Value,
    },
};

/// Runs a complete program against standard output and standard input.
///
/// # Errors
/// Returns the first syntax or runtime error. Output written before a
/// runtime error stays written.
///
/// # Examples
/// ```
/// use pancake::run_source;
///
/// assert!(run_source("let int x = 2; x = x * 3;").is_ok());
/// assert!(run_source("x = 1;").is_err());
/// ```
pub fn run_source(source: &str) -> Result<(), Error> {
    Session::new().run(source)
}

/// Runs a complete program with pre-seeded input and returns what it printed.
///
/// Each `in` statement consumes one entry of `inputs`, bound verbatim as a
/// string. Reading past the last entry is a runtime error.
///
/// # Errors
/// Returns the first syntax or runtime error.
///
/// # Examples
/// ```
/// use pancake::run_captured;
///
/// let output = run_captured("in <- x; out -> x -> \"!\";", &["5"]).unwrap();
/// assert_eq!(output, "5!\n");
///
/// assert!(run_captured("out -> 1 / 0;", &[]).is_err());
/// ```
pub fn run_captured(source: &str, inputs: &[&str]) -> Result<String, Error> {
    let interpreter =
        Interpreter::with_output(Vec::new()).with_input(QueuedInput::new(inputs.iter().copied()));
    let mut session = Session::with_interpreter(interpreter);
    session.run(source)?;

    let output = session.into_interpreter().into_output();
    Ok(String::from_utf8_lossy(&output).into_owned())
}
