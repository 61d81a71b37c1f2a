use std::fmt;

use logos::{FilterResult, Logos};

use crate::error::{ParseError, Position};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexError)]
pub enum Token {
    /// Decimal literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_decimal)]
    Decimal(i64),
    /// `read`
    #[token("read")]
    Read,
    /// `write`
    #[token("write")]
    Write,
    /// Identifier tokens; variable names such as `x` or `total_1`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `-- Comments.`
    #[regex(r"--[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// `(* Block comments, which may nest. *)`
    #[token("(*", skip_block_comment)]
    BlockComment,
    /// `:=`
    #[token(":=")]
    Assign,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(", open_paren)]
    LParen,
    /// `)`
    #[token(")", close_paren)]
    RParen,
    /// `!!`
    #[token("!!")]
    DoubleBang,
    /// `&&`
    #[token("&&")]
    DoubleAmpersand,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
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
    /// `%`
    #[token("%")]
    Percent,
    /// Line breaks; skipped, but counted for positions.
    #[token("\n", |lex| {
        lex.extras.start_line(lex.span().end);
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
    /// Marks the end of the token stream. Never produced by the lexer itself;
    /// [`tokenize`] appends it so the parser can report where input ended.
    EndOfInput,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Decimal(n) => return write!(f, "number {n}"),
            Self::Identifier(name) => return write!(f, "identifier '{name}'"),
            Self::EndOfInput => return write!(f, "end of input"),
            Self::Read => "read",
            Self::Write => "write",
            Self::Comment => "--",
            Self::BlockComment => "(*",
            Self::Assign => ":=",
            Self::Semicolon => ";",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::DoubleBang => "!!",
            Self::DoubleAmpersand => "&&",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::LessEqual => "<=",
            Self::Less => "<",
            Self::GreaterEqual => ">=",
            Self::Greater => ">",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::NewLine => "\\n",
            Self::Ignored => "whitespace",
        };
        write!(f, "'{text}'")
    }
}

/// Errors raised from inside token callbacks.
///
/// These are turned into [`ParseError`]s, with positions, by [`tokenize`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LexError {
    /// No token matches the input.
    #[default]
    UnexpectedCharacter,
    /// A decimal literal outside the `i64` range.
    LiteralTooLarge,
    /// A block comment that runs to the end of the source.
    UnterminatedComment(Position),
    /// A `(` nested more than [`MAX_NESTING`] deep.
    NestingTooDeep,
}

/// How deeply parentheses may nest.
///
/// The parser descends once per open parenthesis; the limit keeps that
/// descent well inside the stack of a test or worker thread.
pub const MAX_NESTING: usize = 128;

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line, the byte offset at which it starts and the open
/// parenthesis depth. Columns are counted incrementally from the last
/// position asked for, so a long line is scanned once rather than once per
/// token.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
    /// Parentheses opened and not yet closed.
    pub depth:      usize,
    /// Byte offset of the last position computed on the current line.
    scanned_offset: usize,
    /// Characters between `line_start` and `scanned_offset`.
    scanned_chars:  usize,
}

impl LexerExtras {
    /// Extras for the start of a source text.
    #[must_use]
    pub const fn new() -> Self {
        Self { line:           1,
               line_start:     0,
               depth:          0,
               scanned_offset: 0,
               scanned_chars:  0, }
    }

    /// Moves to the next line, which starts at byte `offset`.
    pub const fn start_line(&mut self, offset: usize) {
        self.line += 1;
        self.line_start = offset;
        self.scanned_offset = offset;
        self.scanned_chars = 0;
    }

    /// Converts a byte offset on the current line into a [`Position`].
    ///
    /// Offsets are normally asked for in increasing order; an earlier offset
    /// recounts from the start of the line.
    pub fn position_at(&mut self, source: &str, offset: usize) -> Position {
        if offset < self.scanned_offset {
            self.scanned_offset = self.line_start;
            self.scanned_chars = 0;
        }
        if let Some(skipped) = source.get(self.scanned_offset..offset) {
            self.scanned_chars += skipped.chars().count();
            self.scanned_offset = offset;
        }
        Position::new(self.line, self.scanned_chars + 1)
    }
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self::new()
    }
}

/// Splits source text into tokens paired with their positions.
///
/// Whitespace and comments are dropped. The returned list always ends with
/// [`Token::EndOfInput`], positioned just past the last character.
///
/// # Errors
/// Returns a `ParseError` for characters that start no token, decimal literals
/// that overflow `i64`, unterminated block comments and parentheses nested
/// deeper than [`MAX_NESTING`].
///
/// # Example
/// ```
/// use tinyl::{error::Position, interpreter::lexer::{Token, tokenize}};
///
/// let tokens = tokenize("x := 1 -- set x").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|(token, _)| token.clone()).collect();
///
/// assert_eq!(kinds,
///            vec![Token::Identifier("x".to_string()),
///                 Token::Assign,
///                 Token::Decimal(1),
///                 Token::EndOfInput]);
/// assert_eq!(tokens[2].1, Position::new(1, 6));
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, Position)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras::new());

    while let Some(token) = lexer.next() {
        let position = lexer.extras.position_at(source, lexer.span().start);
        match token {
            Ok(tok) => tokens.push((tok, position)),
            Err(LexError::UnexpectedCharacter) => {
                return Err(ParseError::UnexpectedCharacter { found: lexer.slice().to_string(),
                                                             position });
            },
            Err(LexError::LiteralTooLarge) => {
                return Err(ParseError::LiteralTooLarge { literal: lexer.slice().to_string(),
                                                         position });
            },
            Err(LexError::UnterminatedComment(start)) => {
                return Err(ParseError::UnterminatedComment { position: start });
            },
            Err(LexError::NestingTooDeep) => {
                return Err(ParseError::NestingTooDeep { limit: MAX_NESTING,
                                                        position });
            },
        }
    }

    let end = lexer.extras.position_at(source, source.len());
    tokens.push((Token::EndOfInput, end));

    Ok(tokens)
}

/// Parses a decimal literal from the current token slice.
///
/// # Returns
/// - `Ok(i64)`: The parsed value.
/// - `Err(LexError::LiteralTooLarge)`: If the digits do not fit in an `i64`.
fn parse_decimal(lex: &logos::Lexer<Token>) -> Result<i64, LexError> {
    lex.slice().parse().map_err(|_| LexError::LiteralTooLarge)
}

/// Counts an opening parenthesis, failing past [`MAX_NESTING`].
fn open_paren(lex: &mut logos::Lexer<Token>) -> Result<(), LexError> {
    if lex.extras.depth == MAX_NESTING {
        return Err(LexError::NestingTooDeep);
    }
    lex.extras.depth += 1;
    Ok(())
}

/// Counts a closing parenthesis. Unbalanced ones are left to the parser.
fn close_paren(lex: &mut logos::Lexer<Token>) {
    lex.extras.depth = lex.extras.depth.saturating_sub(1);
}

/// Skips a `(* ... *)` comment, following nested comments to the matching
/// close.
///
/// Called with the opening `(*` already matched. Newlines inside the comment
/// are counted so later positions stay correct.
fn skip_block_comment(lex: &mut logos::Lexer<Token>) -> FilterResult<(), LexError> {
    let start = lex.extras.position_at(lex.source(), lex.span().start);
    let body_offset = lex.span().end;
    let remainder = lex.remainder();
    let bytes = remainder.as_bytes();

    let mut depth = 1usize;
    let mut i = 0;
    while i < bytes.len() {
        match (bytes[i], bytes.get(i + 1)) {
            (b'(', Some(b'*')) => {
                depth += 1;
                i += 2;
            },
            (b'*', Some(b')')) => {
                depth -= 1;
                i += 2;
                if depth == 0 {
                    lex.bump(i);
                    return FilterResult::Skip;
                }
            },
            (b'\n', _) => {
                lex.extras.start_line(body_offset + i + 1);
                i += 1;
            },
            _ => i += 1,
        }
    }

    lex.bump(remainder.len());
    FilterResult::Error(LexError::UnterminatedComment(start))
}
