use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::{ParseError, Position},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::unexpected,
        },
    },
};

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// - decimal literals
/// - identifiers
/// - parenthesized expressions
///
/// Grammar:
/// ```text
///     primary := IDENT | DECIMAL | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    match tokens.next() {
        Some((Token::Decimal(n), _)) => Ok(Expr::Const(*n)),
        Some((Token::Identifier(name), _)) => Ok(Expr::Var(name.clone())),
        Some((Token::LParen, position)) => parse_grouping(tokens, *position),
        other => Err(unexpected("expression", other)),
    }
}

/// Parses the rest of a parenthesized expression.
///
/// # Parameters
/// - `tokens`: Token iterator positioned after `(`.
/// - `open`: Position of the `(`, reported if the `)` is missing.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, open: Position) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let expr = parse_expression(tokens)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen { position: open }),
    }
}
