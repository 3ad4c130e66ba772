use std::iter::Peekable;

use tracing::debug;

use crate::{
    ast::{Expr, Statement},
    error::SyntaxError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            binary::{LOWEST_PRECEDENCE, parse_binary},
            block::parse_block,
            unary::parse_unary,
            utils::{check_nesting, unexpected},
        },
        registry::TypeRegistry,
    },
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// How deeply parentheses, blocks and prefix operators may nest.
pub const MAX_NESTING: usize = 256;

/// Parses a whole token stream into statements.
///
/// This is the entry point of the parser. Newlines and stray `;` tokens
/// between statements are skipped. Declarations that parse successfully are
/// recorded in `registry`, which the caller keeps across calls so later
/// units can assign to variables declared by earlier ones.
///
/// Parsing stops at the first error; there is no recovery. Sources nested
/// deeper than [`MAX_NESTING`] are rejected before any statement is parsed.
///
/// # Parameters
/// - `tokens`: The output of [`tokenize`](crate::interpreter::lexer::tokenize).
/// - `registry`: Declared variable types for the session.
///
/// # Returns
/// The statements in source order.
///
/// # Example
/// ```
/// use pancake::interpreter::{lexer::tokenize, parser::core::parse, registry::TypeRegistry};
///
/// let mut registry = TypeRegistry::new();
/// let statements = parse(&tokenize("let int x = 1;\nout -> x;"), &mut registry).unwrap();
///
/// assert_eq!(statements.len(), 2);
/// assert!(registry.contains("x"));
/// ```
pub fn parse(tokens: &[Token], registry: &mut TypeRegistry) -> ParseResult<Vec<Statement>> {
    check_nesting(tokens, MAX_NESTING)?;

    let mut iter = tokens.iter().peekable();
    let statements = parse_block(&mut iter, registry)?;

    // `parse_block` only stops early at a closing brace.
    if let Some(token) = iter.peek()
       && token.kind != TokenKind::EndOfFile
    {
        return Err(unexpected(token, "a statement"));
    }

    debug!(statements = statements.len(),
           declared = registry.len(),
           "parsed unit");
    Ok(statements)
}

/// Parses a full expression.
///
/// Reads one unary expression and then climbs through the binary operators
/// starting at the lowest precedence.
///
/// Grammar: `expression := unary (binary_op unary)*`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let left = parse_unary(tokens)?;
    parse_binary(tokens, left, LOWEST_PRECEDENCE)
}
