use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator, ValueType},
    error::SyntaxError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{exhausted, unexpected},
        },
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`  (numeric negation)
/// - `!`  (logical not)
///
/// Prefix operators are checked before the primary path and bind tighter
/// than any binary operator, so `-2 * 3` is `(-2) * 3` and `!a and b` is
/// `(!a) and b`. They nest: `!-x` is `!(-x)`.
///
/// Grammar:
/// ```text
///     unary := ("-" | "!") unary
///            | primary
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    if let Some(token) =
        tokens.next_if(|token| matches!(token.kind, TokenKind::Minus | TokenKind::Bang))
    {
        let op = if token.kind == TokenKind::Minus {
            UnaryOperator::Negate
        } else {
            UnaryOperator::Not
        };
        let expr = parse_unary(tokens)?;
        return Ok(Expr::UnaryOp { op,
                                  expr: Box::new(expr),
                                  pos: token.position() });
    }

    parse_primary(tokens)
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := INT | DOUBLE | STRING | BOOL
///              | IDENTIFIER
///              | "(" expression ")"
/// ```
/// Literals keep their source text and are tagged with the type they were
/// scanned as.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let token = tokens.next().ok_or_else(|| exhausted("an expression"))?;

    match token.kind {
        TokenKind::IntLiteral => Ok(literal(token, ValueType::Int)),
        TokenKind::DoubleLiteral => Ok(literal(token, ValueType::Double)),
        TokenKind::StringLiteral => Ok(literal(token, ValueType::String)),
        TokenKind::BoolLiteral => Ok(literal(token, ValueType::Bool)),
        TokenKind::Identifier => Ok(Expr::Variable { name: token.lexeme.clone(),
                                                     pos:  token.position(), }),
        TokenKind::LParen => parse_grouping(tokens, token),
        _ => Err(unexpected(token, "an expression")),
    }
}

fn literal(token: &Token, ty: ValueType) -> Expr {
    Expr::Literal { text: token.lexeme.clone(),
                    ty,
                    pos: token.position() }
}

/// Parses a parenthesized expression after its opening parenthesis.
///
/// Expected form `( expression )`. Failure to find the closing parenthesis
/// yields `SyntaxError::ExpectedClosingParen` pointing at the opening one.
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, open: &Token) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let expr = parse_expression(tokens)?;
    match tokens.next() {
        Some(token) if token.kind == TokenKind::RParen => Ok(expr),
        _ => Err(SyntaxError::ExpectedClosingParen { line:   open.line,
                                                     column: open.column, }),
    }
}
