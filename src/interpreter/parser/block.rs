use std::iter::Peekable;

use crate::{
    ast::Statement,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::ParseResult,
            statement::parse_statement,
            utils::{expect, skip_newlines, skip_separators},
        },
        registry::TypeRegistry,
    },
};

/// Parses statements until a closing brace or the end of input.
///
/// Neither terminator is consumed; the caller decides whether it was
/// expected. Newlines and stray `;` tokens before each statement are
/// ignored.
///
/// Grammar: `block := statement*`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the first statement.
/// - `registry`: Declared variable types, updated by declarations.
///
/// # Returns
/// The parsed statements in order.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>,
                          registry: &mut TypeRegistry)
                          -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut statements = Vec::new();

    loop {
        skip_separators(tokens);

        match tokens.peek() {
            None => break,
            Some(token) if matches!(token.kind, TokenKind::RBrace | TokenKind::EndOfFile) => break,
            Some(_) => statements.push(parse_statement(tokens, registry)?),
        }
    }

    Ok(statements)
}

/// Parses a block delimited by braces.
///
/// Newlines before the opening brace are skipped, so the brace may sit on
/// the line after an `if (...)` or `else`.
///
/// Grammar: `braced_block := "{" block "}"`
pub fn parse_braced_block<'a, I>(tokens: &mut Peekable<I>,
                                 registry: &mut TypeRegistry)
                                 -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a Token> + Clone
{
    skip_newlines(tokens);
    expect(tokens, TokenKind::LBrace, "'{' to open a block")?;
    let statements = parse_block(tokens, registry)?;
    expect(tokens, TokenKind::RBrace, "'}' to close the block")?;

    Ok(statements)
}
