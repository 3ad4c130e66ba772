use std::fmt;

use logos::Logos;
use tracing::{debug, trace};

use crate::ast::Position;

/// The classification of a lexical token.
///
/// Most variants are produced directly by the derived `logos` lexer.
/// `EndOfFile` is synthesized by [`tokenize`], and `Unknown` collects any
/// character no other rule accepts.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    /// `let`
    #[token("let")]
    Let,
    /// `out`
    #[token("out")]
    Out,
    /// `in`
    #[token("in")]
    In,
    /// `if`
    #[token("if")]
    If,
    /// `elif`
    #[token("elif")]
    Elif,
    /// `else`
    #[token("else")]
    Else,
    /// `mod`
    #[token("mod")]
    Mod,
    /// `and`
    #[token("and")]
    And,
    /// `or`
    #[token("or")]
    Or,
    /// `int`
    #[token("int")]
    TypeInt,
    /// `double`
    #[token("double")]
    TypeDouble,
    /// `string`
    #[token("string")]
    TypeString,
    /// `bool`
    #[token("bool")]
    TypeBool,

    /// Floating literal such as `3.14`. A trailing dot without a digit after
    /// it is not part of the number.
    #[regex(r"[0-9]+\.[0-9]+")]
    DoubleLiteral,
    /// Integer literal such as `42`.
    #[regex(r"[0-9]+")]
    IntLiteral,
    /// `"text"`, with no escape sequences.
    #[token("\"", lex_string)]
    StringLiteral,
    /// `true` or `false`.
    #[token("true")]
    #[token("false")]
    BoolLiteral,
    /// Variable names such as `x` or `total_2`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,

    /// `->`
    #[token("->")]
    ArrowRight,
    /// `<-`
    #[token("<-")]
    ArrowLeft,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `=`
    #[token("=")]
    Assign,
    /// `!`
    #[token("!")]
    Bang,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,

    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `,`
    #[token(",")]
    Comma,

    /// A newline. Distinct from the `;` terminator.
    #[token("\n")]
    EndOfLine,
    /// Always the last token of a stream.
    EndOfFile,
    /// Any character no other rule matches.
    #[regex(r".", priority = 0)]
    Unknown,

    /// `// Comments.`
    #[token("//", skip_comment)]
    Comment,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

impl TokenKind {
    /// A short human-readable name used in diagnostics.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Let => "'let'",
            Self::Out => "'out'",
            Self::In => "'in'",
            Self::If => "'if'",
            Self::Elif => "'elif'",
            Self::Else => "'else'",
            Self::Mod => "'mod'",
            Self::And => "'and'",
            Self::Or => "'or'",
            Self::TypeInt => "'int'",
            Self::TypeDouble => "'double'",
            Self::TypeString => "'string'",
            Self::TypeBool => "'bool'",
            Self::DoubleLiteral => "double literal",
            Self::IntLiteral => "integer literal",
            Self::StringLiteral => "string literal",
            Self::BoolLiteral => "boolean literal",
            Self::Identifier => "identifier",
            Self::ArrowRight => "'->'",
            Self::ArrowLeft => "'<-'",
            Self::EqualEqual => "'=='",
            Self::BangEqual => "'!='",
            Self::LessEqual => "'<='",
            Self::GreaterEqual => "'>='",
            Self::Assign => "'='",
            Self::Bang => "'!'",
            Self::Less => "'<'",
            Self::Greater => "'>'",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::Slash => "'/'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::LBrace => "'{'",
            Self::RBrace => "'}'",
            Self::Semicolon => "';'",
            Self::Comma => "','",
            Self::EndOfLine => "end of line",
            Self::EndOfFile => "end of input",
            Self::Unknown => "unknown character",
            Self::Comment => "comment",
            Self::Ignored => "whitespace",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// A classified lexical unit with its source position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What the token is.
    pub kind:   TokenKind,
    /// The text of the token. String literals hold the text between the
    /// quotes; end-of-file holds an empty string.
    pub lexeme: String,
    /// 1-based line of the first character.
    pub line:   usize,
    /// 1-based column of the first character.
    pub column: usize,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize, column: usize) -> Self {
        Self { kind,
               lexeme: lexeme.into(),
               line,
               column }
    }

    /// The position of the token's first character.
    #[must_use]
    pub const fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Describes the token for an error message, including its text where
    /// that helps.
    ///
    /// ```
    /// use pancake::interpreter::lexer::{Token, TokenKind};
    ///
    /// let token = Token::new(TokenKind::Identifier, "total", 1, 5);
    /// assert_eq!(token.describe(), "identifier 'total'");
    /// ```
    #[must_use]
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Identifier
            | TokenKind::IntLiteral
            | TokenKind::DoubleLiteral
            | TokenKind::BoolLiteral
            | TokenKind::Unknown => format!("{} '{}'", self.kind, self.lexeme),
            TokenKind::StringLiteral => format!("{} \"{}\"", self.kind, self.lexeme),
            _ => self.kind.describe().to_string(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,
               "{:?} {:?} at {}:{}",
               self.kind, self.lexeme, self.line, self.column)
    }
}

/// Converts source text into tokens.
///
/// Scanning never fails: characters that start no token become
/// [`TokenKind::Unknown`] and are left for the parser to reject. Every
/// newline yields an [`TokenKind::EndOfLine`] token carrying the number of
/// the line it ends, and the result always finishes with exactly one
/// [`TokenKind::EndOfFile`] token positioned just past the last character.
///
/// ```
/// use pancake::interpreter::lexer::{TokenKind, tokenize};
///
/// let kinds: Vec<TokenKind> = tokenize("x <= 2 // comment").iter()
///                                                          .map(|t| t.kind)
///                                                          .collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Identifier,
///             TokenKind::LessEqual,
///             TokenKind::IntLiteral,
///             TokenKind::EndOfFile]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);
    let mut line = 1;
    let mut line_start = 0;

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let slice = lexer.slice();
        let column = column_at(source, line_start, span.start);
        let kind = result.unwrap_or(TokenKind::Unknown);

        match kind {
            TokenKind::EndOfLine => {
                tokens.push(Token::new(kind, slice, line, column));
                line += 1;
                line_start = span.end;
            },
            TokenKind::StringLiteral => {
                let text = slice.strip_prefix('"').unwrap_or(slice);
                let text = text.strip_suffix('"').unwrap_or(text);
                tokens.push(Token::new(kind, text, line, column));

                // A string may span lines; later tokens must still get
                // correct positions.
                if let Some(offset) = slice.rfind('\n') {
                    line += slice.matches('\n').count();
                    line_start = span.start + offset + 1;
                }
            },
            _ => tokens.push(Token::new(kind, slice, line, column)),
        }
        trace!(kind = ?kind, line, column, "scanned token");
    }

    let column = column_at(source, line_start, source.len());
    tokens.push(Token::new(TokenKind::EndOfFile, "", line, column));
    debug!(tokens = tokens.len(), lines = line, "tokenized source");

    tokens
}

/// 1-based character column of `offset` on the line starting at `line_start`.
fn column_at(source: &str, line_start: usize, offset: usize) -> usize {
    source.get(line_start..offset)
          .map_or(0, |text| text.chars().count())
    + 1
}

/// Consumes a string literal body after its opening quote.
///
/// Scanning stops after the next `"`. Without one, the literal runs to the
/// end of the input.
fn lex_string(lex: &mut logos::Lexer<TokenKind>) {
    let remainder = lex.remainder();
    let length = remainder.find('"')
                          .map_or(remainder.len(), |index| index + 1);
    lex.bump(length);
}

/// Consumes a `//` comment up to, but not including, the next newline.
fn skip_comment(lex: &mut logos::Lexer<TokenKind>) -> logos::Skip {
    let remainder = lex.remainder();
    let length = remainder.find('\n').unwrap_or(remainder.len());
    lex.bump(length);
    logos::Skip
}
