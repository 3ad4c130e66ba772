use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// The minimum precedence an operator needs to be consumed at the top level
/// of an expression.
pub const LOWEST_PRECEDENCE: u8 = 1;

/// Parses a chain of binary operators by precedence climbing.
///
/// Starting from an already parsed `left` operand, operators are consumed
/// while their precedence is at least `min_precedence`. After each right
/// operand, if the following operator binds tighter than the one just
/// consumed, the right operand is extended recursively with a raised
/// minimum. Operators of equal precedence therefore group to the left:
/// `a - b - c` parses as `(a - b) - c`.
///
/// See [`BinaryOperator::precedence`] for the table.
///
/// # Parameters
/// - `tokens`: Token stream positioned after `left`.
/// - `left`: The left operand.
/// - `min_precedence`: Operators binding more loosely than this end the
///   chain.
///
/// # Returns
/// An `Expr::BinaryOp` tree, or `left` unchanged if no operator follows.
pub fn parse_binary<'a, I>(tokens: &mut Peekable<I>,
                           mut left: Expr,
                           min_precedence: u8)
                           -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    while let Some(op) = peek_operator(tokens)
          && op.precedence() >= min_precedence
          && let Some(token) = tokens.next()
    {
        let precedence = op.precedence();

        let mut right = parse_unary(tokens)?;
        if let Some(next) = peek_operator(tokens)
           && next.precedence() > precedence
        {
            right = parse_binary(tokens, right, precedence + 1)?;
        }

        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                pos: token.position() };
    }

    Ok(left)
}

fn peek_operator<'a, I>(tokens: &mut Peekable<I>) -> Option<BinaryOperator>
    where I: Iterator<Item = &'a Token>
{
    tokens.peek()
          .and_then(|token| token_to_binary_operator(token.kind))
}

/// Maps a token kind to its corresponding binary operator.
///
/// Returns `None` for all tokens that do not start a binary operation,
/// including `->`, which separates the segments of an `out` statement.
///
/// # Example
/// ```
/// use pancake::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Mod),
///            Some(BinaryOperator::Mod));
/// assert_eq!(token_to_binary_operator(TokenKind::ArrowRight), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::Mod => Some(BinaryOperator::Mod),
        TokenKind::EqualEqual => Some(BinaryOperator::Equal),
        TokenKind::BangEqual => Some(BinaryOperator::NotEqual),
        TokenKind::Less => Some(BinaryOperator::Less),
        TokenKind::Greater => Some(BinaryOperator::Greater),
        TokenKind::LessEqual => Some(BinaryOperator::LessEqual),
        TokenKind::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        TokenKind::And => Some(BinaryOperator::And),
        TokenKind::Or => Some(BinaryOperator::Or),
        _ => None,
    }
}
