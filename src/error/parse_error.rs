use std::fmt;

/// A 1-based location in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Position {
    /// The source line.
    pub line:   usize,
    /// The column of the first character, counted in characters.
    pub column: usize,
}

impl Position {
    /// Creates a position from a line and a column.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// A character that starts no token.
    UnexpectedCharacter {
        /// The offending text.
        found:    String,
        /// Where it was found.
        position: Position,
    },
    /// A `(*` comment without its closing `*)`.
    UnterminatedComment {
        /// Where the comment starts.
        position: Position,
    },
    /// A decimal literal that does not fit in a 64 bit integer.
    LiteralTooLarge {
        /// The literal text.
        literal:  String,
        /// Where the literal starts.
        position: Position,
    },
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// What the parser was looking for.
        expected: String,
        /// The token encountered.
        found:    String,
        /// Where the token starts.
        position: Position,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// What the parser was looking for.
        expected: String,
        /// The end of the source.
        position: Position,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The position of the matching `(`.
        position: Position,
    },
    /// A comparison operand was itself followed by a comparison.
    ChainedComparison {
        /// The second comparison operator.
        operator: String,
        /// Where the second operator starts.
        position: Position,
    },
    /// Found extra tokens after the program should have ended.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:    String,
        /// Where the token starts.
        position: Position,
    },
    /// Parentheses nested deeper than the parser accepts.
    NestingTooDeep {
        /// The deepest accepted nesting.
        limit:    usize,
        /// The `(` that went past the limit.
        position: Position,
    },
    /// The source contains no statement.
    EmptyProgram,
}

impl ParseError {
    /// The position the error is reported at, if any.
    #[must_use]
    pub const fn position(&self) -> Option<Position> {
        match self {
            Self::UnexpectedCharacter { position, .. }
            | Self::UnterminatedComment { position }
            | Self::LiteralTooLarge { position, .. }
            | Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position, .. }
            | Self::ExpectedClosingParen { position }
            | Self::ChainedComparison { position, .. }
            | Self::UnexpectedTrailingTokens { position, .. }
            | Self::NestingTooDeep { position, .. } => Some(*position),
            Self::EmptyProgram => None,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedCharacter { found, position } => {
                write!(f, "Syntax error at {position}: Unexpected character '{found}'.")
            },
            Self::UnterminatedComment { position } => {
                write!(f, "Syntax error at {position}: Comment is never closed.")
            },
            Self::LiteralTooLarge { literal, position } => {
                write!(f, "Syntax error at {position}: Literal {literal} is too large.")
            },
            Self::UnexpectedToken { expected,
                                    found,
                                    position, } => {
                write!(f, "Syntax error at {position}: Expected {expected}, found {found}.")
            },
            Self::UnexpectedEndOfInput { expected, position } => write!(f,
                                                                        "Syntax error at {position}: Expected {expected}, found end of input."),
            Self::ExpectedClosingParen { position } => write!(f,
                                                              "Syntax error at {position}: Expected closing parenthesis ')' but none found."),
            Self::ChainedComparison { operator, position } => write!(f,
                                                                     "Syntax error at {position}: Comparisons cannot be chained, found a second '{operator}'."),
            Self::UnexpectedTrailingTokens { token, position } => {
                write!(f, "Syntax error at {position}: Extra tokens after program: {token}.")
            },
            Self::NestingTooDeep { limit, position } => {
                write!(f, "Syntax error at {position}: Parentheses nest deeper than {limit} levels.")
            },
            Self::EmptyProgram => write!(f, "Syntax error: The program is empty."),
        }
    }
}

impl std::error::Error for ParseError {}
