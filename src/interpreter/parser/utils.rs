use std::iter::Peekable;

use crate::{
    error::SyntaxError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
    },
};

/// Builds the error for `token` appearing where `expected` was required.
///
/// Running into the end-of-file token is reported as an unexpected end of
/// input rather than as an unexpected token.
pub(crate) fn unexpected(token: &Token, expected: &str) -> SyntaxError {
    if token.kind == TokenKind::EndOfFile {
        SyntaxError::UnexpectedEndOfInput { expected: expected.to_string(),
                                            line:     token.line,
                                            column:   token.column, }
    } else {
        SyntaxError::UnexpectedToken { found:    token.describe(),
                                       expected: expected.to_string(),
                                       line:     token.line,
                                       column:   token.column, }
    }
}

/// Error for a token stream that ran out without an end-of-file token.
pub(crate) fn exhausted(expected: &str) -> SyntaxError {
    SyntaxError::UnexpectedEndOfInput { expected: expected.to_string(),
                                        line:     0,
                                        column:   0, }
}

/// Consumes the next token, which must be of `kind`.
///
/// # Parameters
/// - `tokens`: Token iterator.
/// - `kind`: The required token kind.
/// - `expected`: Description used in the error message.
///
/// # Returns
/// The consumed token.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    kind: TokenKind,
                                                    expected: &str)
                                                    -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(token) if token.kind == kind => Ok(token),
        Some(token) => Err(unexpected(token, expected)),
        None => Err(exhausted(expected)),
    }
}

/// Parses a plain identifier and returns its token.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>,
                                                              expected: &str)
                                                              -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    expect(tokens, TokenKind::Identifier, expected)
}

/// Skips end-of-line tokens.
pub(in crate::interpreter::parser) fn skip_newlines<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a Token>
{
    while tokens.next_if(|token| token.kind == TokenKind::EndOfLine)
                .is_some()
    {}
}

/// Skips end-of-line and `;` tokens found between statements.
pub(in crate::interpreter::parser) fn skip_separators<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a Token>
{
    while tokens.next_if(|token| {
                    matches!(token.kind, TokenKind::EndOfLine | TokenKind::Semicolon)
                })
                .is_some()
    {}
}

/// Rejects token streams nested deeper than `limit`.
///
/// Every open `(` or `{` counts as one level, and so does every prefix `-` or
/// `!` until the operand it applies to ends. The walk is iterative and runs
/// before the recursive descent.
pub(in crate::interpreter::parser) fn check_nesting(tokens: &[Token],
                                                   limit: usize)
                                                   -> ParseResult<()> {
    // Prefix operators pending at each enclosing bracket.
    let mut enclosing: Vec<usize> = Vec::new();
    let mut prefixes = 0;
    let mut after_operand = false;

    for token in tokens {
        match token.kind {
            TokenKind::LParen | TokenKind::LBrace => {
                enclosing.push(prefixes);
                after_operand = false;
            },
            TokenKind::RParen | TokenKind::RBrace => {
                enclosing.pop();
                prefixes = enclosing.last().copied().unwrap_or(0);
                after_operand = token.kind == TokenKind::RParen;
            },
            TokenKind::Bang => {
                prefixes += 1;
                after_operand = false;
            },
            TokenKind::Minus if !after_operand => prefixes += 1,
            TokenKind::IntLiteral
            | TokenKind::DoubleLiteral
            | TokenKind::StringLiteral
            | TokenKind::BoolLiteral
            | TokenKind::Identifier => {
                prefixes = enclosing.last().copied().unwrap_or(0);
                after_operand = true;
            },
            TokenKind::EndOfLine => {},
            _ => after_operand = false,
        }

        if enclosing.len() + prefixes > limit {
            return Err(SyntaxError::NestingTooDeep { limit,
                                                     line:   token.line,
                                                     column: token.column, });
        }
    }

    Ok(())
}
