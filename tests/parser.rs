use pancake::{
    TypeRegistry,
    ast::{Position, Statement, ValueType, dump},
    error::SyntaxError,
    interpreter::parser::core::MAX_NESTING,
    parse, tokenize,
};

fn parse_source(source: &str) -> Result<Vec<Statement>, SyntaxError> {
    parse(&tokenize(source), &mut TypeRegistry::new())
}

fn tree(source: &str) -> String {
    match parse_source(source) {
        Ok(statements) => dump(&statements),
        Err(e) => panic!("Failed to parse {source:?}: {e}"),
    }
}

fn error(source: &str) -> SyntaxError {
    match parse_source(source) {
        Ok(statements) => panic!("Parsed {source:?} into {statements:?}, expected an error"),
        Err(e) => e,
    }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(tree("out -> 1 + 2 * 3;"),
               "Out\n  Binary +\n    Literal(int) 1\n    Binary *\n      Literal(int) 2\n      \
                Literal(int) 3\n");
}

#[test]
fn equal_precedence_groups_left() {
    assert_eq!(tree("out -> 1 - 2 - 3;"),
               "Out\n  Binary -\n    Binary -\n      Literal(int) 1\n      Literal(int) 2\n    \
                Literal(int) 3\n");
}

#[test]
fn and_binds_tighter_than_or() {
    assert_eq!(tree("out -> a or b and c;"),
               "Out\n  Binary or\n    Var a\n    Binary and\n      Var b\n      Var c\n");
}

#[test]
fn comparison_binds_tighter_than_logic() {
    assert_eq!(tree("out -> x < 1 and y == 2;"),
               "Out\n  Binary and\n    Binary <\n      Var x\n      Literal(int) 1\n    Binary \
                ==\n      Var y\n      Literal(int) 2\n");
}

#[test]
fn prefix_operators_bind_tightest() {
    assert_eq!(tree("out -> -2 * !x;"),
               "Out\n  Binary *\n    Unary -\n      Literal(int) 2\n    Unary !\n      Var x\n");
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(tree("out -> (1 + 2) * 3;"),
               "Out\n  Binary *\n    Binary +\n      Literal(int) 1\n      Literal(int) 2\n    \
                Literal(int) 3\n");
}

#[test]
fn literals_are_tagged_with_their_type() {
    assert_eq!(tree("out -> 1 -> 2.5 -> \"s\" -> false;"),
               "Out\n  Literal(int) 1\n  Literal(double) 2.5\n  Literal(string) s\n  \
                Literal(bool) false\n");
}

#[test]
fn declarations_and_assignments() {
    assert_eq!(tree("let double d = 1.5;\nd = d * 2;\nin <- name;"),
               "VarDecl double d\n  Literal(double) 1.5\nAssign d\n  Binary *\n    Var d\n    \
                Literal(int) 2\nIn name\n");
}

#[test]
fn conditionals_keep_elif_order_and_allow_newlines() {
    let source = "if (a)\n{\n out -> 1;\n}\nelif (b) { out -> 2; }\nelif (c) { }\nelse\n{\n out \
                  -> 3;\n}";
    assert_eq!(tree(source),
               "If\n  Condition:\n    Var a\n  Then:\n    Out\n      Literal(int) 1\n  Elif \
                condition:\n    Var b\n  Elif block:\n    Out\n      Literal(int) 2\n  Elif \
                condition:\n    Var c\n  Elif block:\n  Else:\n    Out\n      Literal(int) 3\n");
}

#[test]
fn separators_between_statements_are_skipped() {
    let statements = parse_source(";;\n\nlet int x = 1;;\n;").unwrap();
    assert_eq!(statements.len(), 1);
}

#[test]
fn statements_are_positioned_at_their_leading_token() {
    let statements = parse_source("let int x = 1;\n  x = 2;\n    out -> x;").unwrap();
    let positions: Vec<Position> = statements.iter().map(Statement::position).collect();

    assert_eq!(positions,
               [Position::new(1, 1), Position::new(2, 3), Position::new(3, 5)]);
}

#[test]
fn registry_persists_between_units() {
    let mut registry = TypeRegistry::new();

    parse(&tokenize("let string s = \"a\";"), &mut registry).unwrap();
    assert!(parse(&tokenize("s = \"b\";"), &mut registry).is_ok());
    assert!(matches!(parse(&tokenize("s = 1;"), &mut registry),
                     Err(SyntaxError::TypeMismatch { .. })));
    assert_eq!(registry.lookup("s"), Some(ValueType::String));
}

#[test]
fn mismatched_declaration_is_not_registered() {
    let mut registry = TypeRegistry::new();

    assert!(parse(&tokenize("let int x = true;"), &mut registry).is_err());
    assert!(!registry.contains("x"));
}

#[test]
fn unclosed_parenthesis_points_at_opening() {
    assert_eq!(error("out -> (1 + 2;"),
               SyntaxError::ExpectedClosingParen { line: 1, column: 8 });
    assert_eq!(error("if (true { }"),
               SyntaxError::ExpectedClosingParen { line: 1, column: 4 });
}

#[test]
fn missing_semicolon_at_end_of_input() {
    assert_eq!(error("out -> 1"),
               SyntaxError::UnexpectedEndOfInput { expected: "'->' or ';' after output expression".into(),
                                                   line:     1,
                                                   column:   9, });
}

#[test]
fn declaration_requires_a_type_name() {
    assert_eq!(error("let x = 1;"),
               SyntaxError::UnexpectedToken { found:    "identifier 'x'".to_string(),
                                              expected: "a type name (int, double, string or bool)".into(),
                                              line:     1,
                                              column:   5, });
}

#[test]
fn invalid_statement_starts_are_rejected() {
    assert!(matches!(error("5;"),
                     SyntaxError::UnexpectedToken { ref expected, .. } if expected == "a statement"));
    assert!(matches!(error("}"),
                     SyntaxError::UnexpectedToken { ref found, .. } if found == "'}'"));
    assert!(matches!(error("out -> @;"),
                     SyntaxError::UnexpectedToken { ref found, .. } if found == "unknown character '@'"));
}

#[test]
fn identifier_statement_must_be_an_assignment() {
    let mut registry = TypeRegistry::new();
    registry.declare("x", ValueType::Int);

    let err = parse(&tokenize("x;"), &mut registry).unwrap_err();

    assert!(matches!(err, SyntaxError::UnexpectedToken { ref found, .. } if found == "';'"));
}

#[test]
fn unclosed_block_reports_end_of_input() {
    assert!(matches!(error("if (true) { out -> 1;"),
                     SyntaxError::UnexpectedEndOfInput { .. }));
}

#[test]
fn out_requires_an_arrow() {
    assert!(matches!(error("out 1;"),
                     SyntaxError::UnexpectedToken { ref expected, .. } if expected == "'->' after 'out'"));
}

#[test]
fn in_requires_left_arrow_and_name() {
    assert!(error("in -> x;").to_string().contains("'<-' after 'in'"));
    assert!(error("in <- 1;").to_string().contains("a variable name"));
}

#[test]
fn long_prefix_chains_are_rejected() {
    let source = format!("out -> {}1;", "-".repeat(200_000));

    assert_eq!(error(&source),
               SyntaxError::NestingTooDeep { limit:  MAX_NESTING,
                                             line:   1,
                                             column: 8 + MAX_NESTING, });
}

#[test]
fn deep_parentheses_are_rejected() {
    let source = format!("out -> {}1{};", "(".repeat(100_000), ")".repeat(100_000));
    assert_eq!(error(&source).position(), Position::new(1, 8 + MAX_NESTING));

    let mixed = format!("out -> {}1{};", "-(".repeat(200), ")".repeat(200));
    assert_eq!(error(&mixed).position(), Position::new(1, 8 + MAX_NESTING));
}

#[test]
fn deep_blocks_are_rejected() {
    let source = format!("{}{}", "if (true) {\n".repeat(300), "}\n".repeat(300));

    assert!(matches!(error(&source), SyntaxError::NestingTooDeep { .. }));
}

#[test]
fn nesting_up_to_the_limit_parses() {
    let groups = format!("out -> {}1{};", "(".repeat(MAX_NESTING), ")".repeat(MAX_NESTING));
    assert!(parse_source(&groups).is_ok());

    let prefixes = format!("out -> {}x;", "!".repeat(MAX_NESTING));
    assert!(parse_source(&prefixes).is_ok());

    let chain = format!("out -> 1{};", " - -1".repeat(1_000));
    assert!(parse_source(&chain).is_ok());
}
