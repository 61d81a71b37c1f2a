use std::iter::Peekable;

use crate::{
    error::{ParseError, Position},
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Builds the error for a token that does not fit the grammar.
///
/// The end-of-input marker (or an exhausted iterator) becomes
/// `UnexpectedEndOfInput`; anything else becomes `UnexpectedToken`.
pub(in crate::interpreter::parser) fn unexpected(expected: &str,
                                                 found: Option<&(Token, Position)>)
                                                 -> ParseError {
    match found {
        Some((Token::EndOfInput, position)) => {
            ParseError::UnexpectedEndOfInput { expected: expected.to_string(),
                                               position: *position, }
        },
        Some((tok, position)) => ParseError::UnexpectedToken { expected: expected.to_string(),
                                                               found:    tok.to_string(),
                                                               position: *position, },
        None => ParseError::UnexpectedEndOfInput { expected: expected.to_string(),
                                                   position: Position::default(), },
    }
}

/// Consumes the next token if it equals `expected`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the expected token.
/// - `expected`: The token that must come next.
///
/// # Returns
/// The position of the consumed token.
///
/// # Errors
/// Returns a `ParseError` naming `expected` if another token, or the end of
/// input, comes first.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &Token)
                                                    -> ParseResult<Position>
    where I: Iterator<Item = &'a (Token, Position)>
{
    match tokens.next() {
        Some((tok, position)) if tok == expected => Ok(*position),
        other => Err(unexpected(&expected.to_string(), other)),
    }
}

/// Parses a plain identifier and returns its name.
///
/// The next token must be `Token::Identifier`. Keywords are separate tokens,
/// so `read` and `write` are rejected here.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
///
/// # Returns
/// A `String` containing the identifier.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token is not an identifier,
/// - the input ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, Position)>
{
    match tokens.next() {
        Some((Token::Identifier(s), _)) => Ok(s.clone()),
        other => Err(unexpected("identifier", other)),
    }
}
