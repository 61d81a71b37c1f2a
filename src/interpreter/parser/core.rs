use std::iter::Peekable;

use tracing::debug;

use crate::{
    ast::{Expr, Statement},
    error::{ParseError, Position},
    interpreter::{
        lexer::Token,
        parser::{binary::parse_logical_or, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, logical OR, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := logical_or`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, Position)` pairs. Tokens
///   after the expression are left in the iterator.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    parse_logical_or(tokens)
}

/// Parses a complete program.
///
/// A program is one statement (usually a `;` chain) that must consume every
/// token up to [`Token::EndOfInput`].
///
/// # Parameters
/// - `tokens`: Token iterator over the whole source, as produced by
///   [`tokenize`](crate::interpreter::lexer::tokenize).
///
/// # Returns
/// The program's statement tree.
///
/// # Errors
/// - `EmptyProgram` if there are no tokens besides the end marker.
/// - `UnexpectedTrailingTokens` if tokens remain after the statement.
/// - Propagates any error from statement parsing.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Position)>
{
    if matches!(tokens.peek(), None | Some((Token::EndOfInput, _))) {
        return Err(ParseError::EmptyProgram);
    }

    let program = parse_statement(tokens)?;

    match tokens.next() {
        None | Some((Token::EndOfInput, _)) => {},
        Some((tok, position)) => {
            return Err(ParseError::UnexpectedTrailingTokens { token:    tok.to_string(),
                                                              position: *position, });
        },
    }

    debug!(statements = program.primary_count(), "parsed program");
    Ok(program)
}
