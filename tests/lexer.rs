use pancake::{Token, TokenKind, tokenize};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).iter().map(|t| t.kind).collect()
}

#[test]
fn empty_source_yields_only_end_of_file() {
    assert_eq!(tokenize(""), [Token::new(TokenKind::EndOfFile, "", 1, 1)]);
}

#[test]
fn stream_ends_with_exactly_one_end_of_file() {
    for source in ["", "out -> 1;", "\n\n", "\"open", "@#$", "// only a comment"] {
        let tokens = tokenize(source);
        let eofs = tokens.iter()
                         .filter(|t| t.kind == TokenKind::EndOfFile)
                         .count();
        assert_eq!(eofs, 1, "in {source:?}");
        assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::EndOfFile));
    }
}

#[test]
fn newline_token_carries_the_line_it_ends() {
    assert_eq!(tokenize("a\nb"),
               [Token::new(TokenKind::Identifier, "a", 1, 1),
                Token::new(TokenKind::EndOfLine, "\n", 1, 2),
                Token::new(TokenKind::Identifier, "b", 2, 1),
                Token::new(TokenKind::EndOfFile, "", 2, 2)]);
}

#[test]
fn two_character_operators_take_precedence() {
    use TokenKind::{
        ArrowLeft, ArrowRight, Assign, Bang, BangEqual, EndOfFile, EqualEqual, Greater,
        GreaterEqual, Less, LessEqual, Minus,
    };

    assert_eq!(kinds("== != <= >= -> <- = ! < > -"),
               [EqualEqual,
                BangEqual,
                LessEqual,
                GreaterEqual,
                ArrowRight,
                ArrowLeft,
                Assign,
                Bang,
                Less,
                Greater,
                Minus,
                EndOfFile]);
    assert_eq!(kinds("x<-1"), [TokenKind::Identifier, ArrowLeft, TokenKind::IntLiteral, EndOfFile]);
}

#[test]
fn numbers_split_into_int_and_double() {
    let tokens = tokenize("3.14 42 3.");
    let pairs: Vec<(TokenKind, &str)> = tokens.iter()
                                              .map(|t| (t.kind, t.lexeme.as_str()))
                                              .collect();

    assert_eq!(pairs,
               [(TokenKind::DoubleLiteral, "3.14"),
                (TokenKind::IntLiteral, "42"),
                (TokenKind::IntLiteral, "3"),
                (TokenKind::Unknown, "."),
                (TokenKind::EndOfFile, "")]);
}

#[test]
fn keywords_match_whole_words_only() {
    use TokenKind::{BoolLiteral, EndOfFile, Identifier, In, Let, Mod, TypeInt};

    assert_eq!(kinds("let letter in int integer true trueish mod"),
               [Let, Identifier, In, TypeInt, Identifier, BoolLiteral, Identifier, Mod, EndOfFile]);
    assert_eq!(kinds("Let"), [Identifier, EndOfFile]);
}

#[test]
fn string_literal_drops_quotes_and_keeps_text() {
    let tokens = tokenize("\"a // b\" x");

    assert_eq!(tokens[0], Token::new(TokenKind::StringLiteral, "a // b", 1, 1));
    assert_eq!(tokens[1], Token::new(TokenKind::Identifier, "x", 1, 10));
}

#[test]
fn unterminated_string_runs_to_end_of_input() {
    assert_eq!(tokenize("\"abc"),
               [Token::new(TokenKind::StringLiteral, "abc", 1, 1),
                Token::new(TokenKind::EndOfFile, "", 1, 5)]);
}

#[test]
fn multi_line_string_advances_line_numbers() {
    let tokens = tokenize("\"a\nb\" x");

    assert_eq!(tokens[0], Token::new(TokenKind::StringLiteral, "a\nb", 1, 1));
    assert_eq!(tokens[1], Token::new(TokenKind::Identifier, "x", 2, 4));
}

#[test]
fn comments_run_to_end_of_line() {
    assert_eq!(kinds("x // out -> 1;\ny"),
               [TokenKind::Identifier,
                TokenKind::EndOfLine,
                TokenKind::Identifier,
                TokenKind::EndOfFile]);
}

#[test]
fn unrecognized_characters_become_unknown_tokens() {
    let tokens = tokenize("x @ y");

    assert_eq!(tokens[1], Token::new(TokenKind::Unknown, "@", 1, 3));
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
}

#[test]
fn columns_count_characters() {
    let tokens = tokenize("\"é\" x\n\ty");

    assert_eq!(tokens[1].column, 5);
    assert_eq!(tokens[3], Token::new(TokenKind::Identifier, "y", 2, 2));
}

#[test]
fn carriage_returns_are_whitespace() {
    assert_eq!(tokenize("a\r\nb")[2], Token::new(TokenKind::Identifier, "b", 2, 1));
}

#[test]
fn tokens_render_kind_text_and_position() {
    let token = Token::new(TokenKind::Identifier, "x", 3, 7);

    assert_eq!(token.to_string(), "Identifier \"x\" at 3:7");
    assert_eq!(TokenKind::ArrowRight.to_string(), "'->'");
}
