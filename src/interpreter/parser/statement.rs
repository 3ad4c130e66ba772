use std::iter::Peekable;

use tracing::trace;

use crate::{
    ast::{ElifBranch, Expr, Statement, ValueType},
    error::SyntaxError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            block::parse_braced_block,
            core::{ParseResult, parse_expression},
            utils::{exhausted, expect, parse_identifier, skip_newlines, unexpected},
        },
        registry::TypeRegistry,
    },
};

/// Parses a single statement.
///
/// The leading token decides what is parsed:
/// - `let` starts a variable declaration,
/// - `out` an output statement,
/// - `in` an input statement,
/// - `if` a conditional,
/// - an identifier an assignment (it must be followed by `=`).
///
/// Anything else is a syntax error.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first token of a statement.
/// - `registry`: Declared variable types, consulted and updated by
///   declarations and assignments.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>,
                              registry: &mut TypeRegistry)
                              -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let Some(&token) = tokens.peek() else {
        return Err(exhausted("a statement"));
    };

    match token.kind {
        TokenKind::Let => parse_variable_declaration(tokens, registry),
        TokenKind::Out => parse_out(tokens),
        TokenKind::In => parse_in(tokens),
        TokenKind::If => parse_if(tokens, registry),
        TokenKind::Identifier => parse_assignment(tokens, registry),
        _ => Err(unexpected(token, "a statement")),
    }
}

/// Parses `let <type> <identifier> = <expression> ;`.
///
/// When the initializer is a bare literal its type must equal the declared
/// type; other initializers are not checked here. On success the name is
/// recorded in `registry` with the declared type, replacing any earlier
/// declaration of the same name.
///
/// # Errors
/// Returns a `SyntaxError` if:
/// - the type name, identifier, `=` or `;` is missing,
/// - the initializer fails to parse,
/// - a literal initializer has the wrong type.
fn parse_variable_declaration<'a, I>(tokens: &mut Peekable<I>,
                                     registry: &mut TypeRegistry)
                                     -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let keyword = expect(tokens, TokenKind::Let, "'let'")?;
    let ty = parse_type_name(tokens)?;
    let name = parse_identifier(tokens, "a variable name")?.lexeme.clone();
    expect(tokens, TokenKind::Assign, "'=' in variable declaration")?;
    let value = parse_expression(tokens)?;
    expect(tokens, TokenKind::Semicolon, "';' after variable declaration")?;

    check_literal_type(&name, ty, &value)?;
    registry.declare(name.clone(), ty);
    trace!(%name, %ty, "declared variable");

    Ok(Statement::VariableDeclaration { ty,
                                        name,
                                        value,
                                        pos: keyword.position() })
}

fn parse_type_name<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<ValueType>
    where I: Iterator<Item = &'a Token>
{
    const EXPECTED: &str = "a type name (int, double, string or bool)";

    let token = tokens.next().ok_or_else(|| exhausted(EXPECTED))?;
    match token.kind {
        TokenKind::TypeInt => Ok(ValueType::Int),
        TokenKind::TypeDouble => Ok(ValueType::Double),
        TokenKind::TypeString => Ok(ValueType::String),
        TokenKind::TypeBool => Ok(ValueType::Bool),
        _ => Err(unexpected(token, EXPECTED)),
    }
}

/// Parses `<identifier> = <expression> ;`.
///
/// The target must already be declared in `registry`. As with declarations,
/// only a literal value is checked against the declared type.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>,
                           registry: &TypeRegistry)
                           -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let target = parse_identifier(tokens, "a variable name")?;
    expect(tokens, TokenKind::Assign, "'=' after variable name")?;

    let Some(declared) = registry.lookup(&target.lexeme) else {
        return Err(SyntaxError::UndeclaredAssignment { name:   target.lexeme.clone(),
                                                       line:   target.line,
                                                       column: target.column, });
    };

    let value = parse_expression(tokens)?;
    expect(tokens, TokenKind::Semicolon, "';' after assignment")?;
    check_literal_type(&target.lexeme, declared, &value)?;

    Ok(Statement::Assignment { name: target.lexeme.clone(),
                               value,
                               pos: target.position() })
}

/// Rejects a literal whose type differs from the variable's type.
fn check_literal_type(name: &str, expected: ValueType, value: &Expr) -> ParseResult<()> {
    match value.literal_type() {
        Some(found) if found != expected => {
            let pos = value.position();
            Err(SyntaxError::TypeMismatch { name: name.to_string(),
                                            expected,
                                            found,
                                            line: pos.line,
                                            column: pos.column })
        },
        _ => Ok(()),
    }
}

/// Parses `out -> <expression> (-> <expression>)* ;`.
fn parse_out<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let keyword = expect(tokens, TokenKind::Out, "'out'")?;
    expect(tokens, TokenKind::ArrowRight, "'->' after 'out'")?;

    let mut outputs = vec![parse_expression(tokens)?];
    while tokens.next_if(|token| token.kind == TokenKind::ArrowRight)
                .is_some()
    {
        outputs.push(parse_expression(tokens)?);
    }
    expect(tokens, TokenKind::Semicolon, "'->' or ';' after output expression")?;

    Ok(Statement::Out { outputs,
                        pos: keyword.position() })
}

/// Parses `in <- <identifier> ;`. The target needs no prior declaration.
fn parse_in<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let keyword = expect(tokens, TokenKind::In, "'in'")?;
    expect(tokens, TokenKind::ArrowLeft, "'<-' after 'in'")?;
    let name = parse_identifier(tokens, "a variable name")?.lexeme.clone();
    expect(tokens, TokenKind::Semicolon, "';' after input statement")?;

    Ok(Statement::In { name,
                       pos: keyword.position() })
}

/// Parses a conditional with optional `elif` arms and `else` block.
///
/// Syntax:
/// ```text
///     if ( <condition> ) { <block> }
///     elif ( <condition> ) { <block> }
///     else { <block> }
/// ```
/// Any number of `elif` arms may follow, kept in source order. Newlines
/// between a closing brace and the next `elif` or `else` are skipped.
fn parse_if<'a, I>(tokens: &mut Peekable<I>,
                   registry: &mut TypeRegistry)
                   -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let keyword = expect(tokens, TokenKind::If, "'if'")?;
    let condition = parse_condition(tokens, "'(' after 'if'")?;
    let then_block = parse_braced_block(tokens, registry)?;

    let mut elif_branches = Vec::new();
    skip_newlines(tokens);
    while tokens.next_if(|token| token.kind == TokenKind::Elif)
                .is_some()
    {
        let condition = parse_condition(tokens, "'(' after 'elif'")?;
        let block = parse_braced_block(tokens, registry)?;
        elif_branches.push(ElifBranch { condition, block });
        skip_newlines(tokens);
    }

    let else_block = if tokens.next_if(|token| token.kind == TokenKind::Else)
                              .is_some()
    {
        Some(parse_braced_block(tokens, registry)?)
    } else {
        None
    };

    Ok(Statement::If { condition,
                       then_block,
                       elif_branches,
                       else_block,
                       pos: keyword.position() })
}

/// Parses `( <expression> )` for `if` and `elif`.
fn parse_condition<'a, I>(tokens: &mut Peekable<I>, expected: &str) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let open = expect(tokens, TokenKind::LParen, expected)?;
    let condition = parse_expression(tokens)?;

    match tokens.next() {
        Some(token) if token.kind == TokenKind::RParen => Ok(condition),
        _ => Err(SyntaxError::ExpectedClosingParen { line:   open.line,
                                                     column: open.column, }),
    }
}
